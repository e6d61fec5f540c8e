use std::{fmt, iter, mem, slice};

/// A single captured parameter: the name recorded at insertion and the
/// path text it was bound to.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Copy, Clone)]
struct Param<'k, 'v> {
    key: &'k str,
    value: &'v str,
}

impl Param<'_, '_> {
    const EMPTY: Param<'static, 'static> = Param { key: "", value: "" };
}

/// The parameters extracted for one matched pattern, in the order the
/// pattern declared them.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut trie = pathtrie::Trie::new();
/// # trie.insert("/users/:id/*rest", true);
/// let matches = trie.lookup("/users/1/avatar/large.png")?;
/// let params = matches[0].params.as_ref().unwrap();
///
/// // Iterate through the names and values.
/// for (name, value) in params.iter() {
///     println!("{}: {}", name, value);
/// }
///
/// // Get a specific value by name.
/// assert_eq!(params.get("id"), Some("1"));
/// assert_eq!(params.get("rest"), Some("avatar/large.png"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
pub struct Params<'k, 'v> {
    kind: ParamsKind<'k, 'v>,
}

// Most patterns carry only a few parameters, so we can avoid heap
// allocations in the common case.
const SMALL: usize = 3;

#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
enum ParamsKind<'k, 'v> {
    Small([Param<'k, 'v>; SMALL], usize),
    Large(Vec<Param<'k, 'v>>),
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self {
            kind: ParamsKind::Small([Param::EMPTY; SMALL], 0),
        }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        match self.kind {
            ParamsKind::Small(_, len) => len,
            ParamsKind::Large(ref vec) => vec.len(),
        }
    }

    /// Returns the value of the parameter registered under the given name.
    ///
    /// A pattern that repeats a name, such as `/:id/:id`, resolves to the
    /// value bound last.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Returns an iterator over the parameters in declaration order.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter::new(self)
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        match self.kind {
            ParamsKind::Small(_, len) => len == 0,
            ParamsKind::Large(ref vec) => vec.is_empty(),
        }
    }

    pub(crate) fn push(&mut self, key: &'k str, value: &'v str) {
        #[cold]
        fn drain_to_vec<T: Default>(len: usize, elem: T, arr: &mut [T; SMALL]) -> Vec<T> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        let param = Param { key, value };
        match &mut self.kind {
            ParamsKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = ParamsKind::Large(drain_to_vec(*len, param, arr));
                    return;
                }

                arr[*len] = param;
                *len += 1;
            }
            ParamsKind::Large(vec) => vec.push(param),
        }
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'k, 'v> FromIterator<(&'k str, &'v str)> for Params<'k, 'v> {
    fn from_iter<I: IntoIterator<Item = (&'k str, &'v str)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// An iterator over the names and values of a match's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    kind: ParamsIterKind<'ps, 'k, 'v>,
}

impl<'ps, 'k, 'v> ParamsIter<'ps, 'k, 'v> {
    fn new(params: &'ps Params<'k, 'v>) -> Self {
        let kind = match &params.kind {
            ParamsKind::Small(arr, len) => ParamsIterKind::Small(arr.iter().take(*len)),
            ParamsKind::Large(vec) => ParamsIterKind::Large(vec.iter()),
        };
        Self { kind }
    }
}

enum ParamsIterKind<'ps, 'k, 'v> {
    Small(iter::Take<slice::Iter<'ps, Param<'k, 'v>>>),
    Large(slice::Iter<'ps, Param<'k, 'v>>),
}

impl<'k, 'v> Iterator for ParamsIter<'_, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        let param = match self.kind {
            ParamsIterKind::Small(ref mut iter) => iter.next(),
            ParamsIterKind::Large(ref mut iter) => iter.next(),
        };
        param.map(|p| (p.key, p.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for ParamsIter<'_, '_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let param = match self.kind {
            ParamsIterKind::Small(ref mut iter) => iter.next_back(),
            ParamsIterKind::Large(ref mut iter) => iter.next_back(),
        };
        param.map(|p| (p.key, p.value))
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {
    fn len(&self) -> usize {
        match self.kind {
            ParamsIterKind::Small(ref iter) => iter.len(),
            ParamsIterKind::Large(ref iter) => iter.len(),
        }
    }
}
