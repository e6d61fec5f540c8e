use crate::params::Params;
use crate::pretty::PrettyPrint;

use std::collections::BTreeMap;

/// The shape of a node, which is all the tree is keyed on.
///
/// Parameter and wildcard names are not part of the shape: `/:id` and
/// `/:name` share a node and keep their names in their own [`Entry`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A literal segment. The root is a static node with an empty literal.
    Static(Box<str>),
    /// A `:name` segment, matching any single non-empty segment.
    Param,
    /// A `*name` segment, matching the entire non-empty remainder of a path.
    Wildcard,
}

/// A pattern registered at a terminal node.
#[derive(Clone, Debug)]
pub struct Entry<T> {
    value: T,
    names: Vec<Box<str>>,
}

impl<T> Entry<T> {
    /// The value supplied at insertion.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The parameter names collected along the pattern, in declaration order.
    pub fn param_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }

    // Pairs each recorded name with the value `value_at` yields for its
    // position. Names without a value are left out.
    fn params<'k, 'v>(&'k self, value_at: impl Fn(usize) -> Option<&'v str>) -> Option<Params<'k, 'v>> {
        if self.names.is_empty() {
            return None;
        }

        let params = self
            .names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| value_at(i).map(|value| (&**name, value)))
            .collect();

        Some(params)
    }
}

/// A pattern that matched a looked-up path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'k, 'v, V> {
    /// The value registered with the pattern.
    pub value: &'k V,
    /// The extracted parameters, present iff the pattern declared at least one name.
    pub params: Option<Params<'k, 'v>>,
}

impl<'k, 'v, V> Match<'k, 'v, V> {
    /// Returns the value bound to the given parameter name, the last one if
    /// the pattern repeats it.
    pub fn param(&self, name: impl AsRef<str>) -> Option<&'v str> {
        self.params.as_ref().and_then(|params| params.get(name))
    }
}

/// A node of the segment tree.
///
/// Every node may own any number of static children, at most one param
/// child and at most one wildcard child. `entries` is append-only and
/// non-empty exactly when some pattern ends here.
#[derive(Clone, Debug)]
pub struct Node<T> {
    kind: NodeKind,
    statics: BTreeMap<Box<str>, Node<T>>,
    param: Option<Box<Node<T>>>,
    wildcard: Option<Box<Node<T>>>,
    entries: Vec<Entry<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            statics: BTreeMap::new(),
            param: None,
            wildcard: None,
            entries: Vec::new(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(NodeKind::Static("".into()))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns `true` if at least one pattern ends at this node.
    pub fn is_terminal(&self) -> bool {
        !self.entries.is_empty()
    }

    /// The patterns ending at this node, in insertion order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn static_child(&self, literal: &str) -> Option<&Node<T>> {
        self.statics.get(literal)
    }

    pub fn param_child(&self) -> Option<&Node<T>> {
        self.param.as_deref()
    }

    pub fn wildcard_child(&self) -> Option<&Node<T>> {
        self.wildcard.as_deref()
    }

    /// Iterates over the children in matching priority: static children
    /// (ordered by literal), then the param child, then the wildcard child.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.statics
            .values()
            .chain(self.param.as_deref())
            .chain(self.wildcard.as_deref())
    }

    /// Renders the subtree below this node, one line per item.
    pub fn pretty_print(&self) -> PrettyPrint<'_, T> {
        PrettyPrint::subtree(self)
    }

    // Walks `segments` from this node, growing the tree as needed, and
    // records `value` at the node the walk ends on. Returns the number of
    // levels descended.
    pub(crate) fn insert(&mut self, segments: &[&str], value: T, collapse_slashes: bool) -> usize {
        let mut current = self;
        let mut names = Vec::new();
        let mut depth = 0;

        for (i, segment) in segments.iter().enumerate() {
            // an interior empty segment does not consume a level
            if collapse_slashes && i > 0 && segment.is_empty() && i + 1 < segments.len() {
                continue;
            }

            depth += 1;

            if let Some(name) = segment.strip_prefix(':') {
                names.push(name.into());
                current = &mut **current
                    .param
                    .get_or_insert_with(|| Box::new(Node::new(NodeKind::Param)));
            } else if let Some(name) = segment.strip_prefix('*') {
                names.push(name.into());
                current = &mut **current
                    .wildcard
                    .get_or_insert_with(|| Box::new(Node::new(NodeKind::Wildcard)));

                // anything after a wildcard is unreachable
                break;
            } else {
                current = current
                    .statics
                    .entry((*segment).into())
                    .or_insert_with(|| Node::new(NodeKind::Static((*segment).into())));
            }
        }

        current.entries.push(Entry { value, names });
        depth
    }

    // Resolves `rest` against the subtree below this node.
    //
    // `rest` is the unconsumed part of the path, `None` once every segment
    // has been consumed. `Some("")` is a single empty segment. `values` holds
    // the segments bound to param nodes on the way down and is restored
    // before returning.
    pub(crate) fn lookup<'k, 'v>(
        &'k self,
        rest: Option<&'v str>,
        values: &mut Vec<&'v str>,
        collapse_slashes: bool,
        is_root: bool,
    ) -> Option<Vec<Match<'k, 'v, T>>> {
        let Some(mut rest) = rest else {
            return self.terminal_matches(values);
        };

        let split = |rest: &'v str| match rest.split_once('/') {
            Some((head, tail)) => (head, Some(tail)),
            None => (rest, None),
        };

        let (mut head, mut tail) = split(rest);

        // interior empty segments stay on this node, the last one never does
        while collapse_slashes && !is_root && head.is_empty() {
            let Some(next) = tail else { break };
            rest = next;
            (head, tail) = split(rest);
        }

        if let Some(child) = self.statics.get(head) {
            let matches = child.lookup(tail, values, collapse_slashes, false);
            if matches.is_some() {
                return matches;
            }
        }

        // params and wildcards never bind an empty segment
        if head.is_empty() {
            return None;
        }

        if let Some(child) = self.param.as_deref() {
            values.push(head);
            let matches = child.lookup(tail, values, collapse_slashes, false);
            values.pop();

            if matches.is_some() {
                return matches;
            }
        }

        self.wildcard.as_deref()?.wildcard_matches(values, rest)
    }

    fn terminal_matches<'k, 'v>(&'k self, values: &[&'v str]) -> Option<Vec<Match<'k, 'v, T>>> {
        if !self.is_terminal() {
            return None;
        }

        let matches = self
            .entries
            .iter()
            .map(|entry| Match {
                value: &entry.value,
                params: entry.params(|i| values.get(i).copied()),
            })
            .collect();

        Some(matches)
    }

    // Names beyond the param values collected so far all bind to the
    // remainder of the path, slashes included.
    fn wildcard_matches<'k, 'v>(
        &'k self,
        values: &[&'v str],
        remainder: &'v str,
    ) -> Option<Vec<Match<'k, 'v, T>>> {
        if !self.is_terminal() {
            return None;
        }

        let matches = self
            .entries
            .iter()
            .map(|entry| Match {
                value: &entry.value,
                params: entry.params(|i| Some(values.get(i).copied().unwrap_or(remainder))),
            })
            .collect();

        Some(matches)
    }
}
