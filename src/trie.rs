use crate::error::MatchError;
use crate::pretty::PrettyPrint;
use crate::tree::{Match, Node};

use std::fmt;

/// Matching options, fixed when a [`Trie`] is built.
///
/// Both options default to `false`. With the `serde` feature enabled the
/// options can be read from a configuration file, where missing keys fall
/// back to their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieOptions {
    /// Treat `/users/` and `/users` (and `/users//`) as the same pattern or path.
    pub ignore_trailing_slashes: bool,
    /// Treat interior runs of slashes, as in `/users//dashboard`, as a single slash.
    pub ignore_consecutive_slashes: bool,
}

impl TrieOptions {
    /// Creates options with both slash rules disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether trailing slashes are dropped from patterns and paths.
    pub fn ignore_trailing_slashes(mut self, enabled: bool) -> Self {
        self.ignore_trailing_slashes = enabled;
        self
    }

    /// Sets whether runs of interior slashes count as a single slash.
    pub fn ignore_consecutive_slashes(mut self, enabled: bool) -> Self {
        self.ignore_consecutive_slashes = enabled;
        self
    }

    // Returns the part of `path` that is split into segments, or `None` if
    // no segments are left once trailing empty segments are dropped.
    fn segments<'p>(&self, path: &'p str) -> Option<&'p str> {
        if !self.ignore_trailing_slashes {
            return Some(path);
        }

        match path.trim_end_matches('/') {
            "" => None,
            trimmed => Some(trimmed),
        }
    }
}

/// A set of path patterns that a concrete path is resolved against.
///
/// Patterns are split on `/`. A segment starting with `:` is a named
/// parameter matching any non-empty segment. A segment starting with `*` is a
/// named wildcard matching the non-empty remainder of the path, and ends the
/// pattern. Anything else, including the empty segment, is a literal.
///
/// At every node a literal beats a parameter, which beats a wildcard. If the
/// preferred branch fails further down, the lookup backtracks and tries the
/// next one.
///
/// ```rust
/// use pathtrie::Trie;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut trie = Trie::new();
/// trie.insert("/users/dashboard/admin/overview", "overview");
/// trie.insert("/users/:id/admin/:org", "admin");
/// trie.insert("/users/*rest", "fallback");
///
/// let matches = trie.lookup("/users/1/admin/acme")?;
/// assert_eq!(*matches[0].value, "admin");
/// assert_eq!(matches[0].param("org"), Some("acme"));
///
/// let matches = trie.lookup("/users/dashboard/customer/overview")?;
/// assert_eq!(*matches[0].value, "fallback");
/// assert_eq!(matches[0].param("rest"), Some("dashboard/customer/overview"));
/// # Ok(())
/// # }
/// ```
///
/// # Concurrency
///
/// [`insert`](Trie::insert) takes `&mut self` and [`lookup`](Trie::lookup)
/// keeps its state on its own stack, so any number of threads may look up
/// through a shared reference. Inserting while other threads look up needs
/// an external lock such as [`RwLock`](std::sync::RwLock); the trie has none
/// of its own.
#[derive(Clone, Debug)]
pub struct Trie<T> {
    root: Node<T>,
    options: TrieOptions,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> {
    /// Creates an empty trie with the default options.
    pub fn new() -> Self {
        Self::with_options(TrieOptions::default())
    }

    /// Creates an empty trie with the given options.
    ///
    /// ```rust
    /// use pathtrie::{Trie, TrieOptions};
    ///
    /// let mut trie = Trie::with_options(TrieOptions::new().ignore_trailing_slashes(true));
    /// trie.insert("/users/", ());
    ///
    /// assert!(trie.lookup("/users").is_ok());
    /// assert!(trie.lookup("/users/").is_ok());
    /// ```
    pub fn with_options(options: TrieOptions) -> Self {
        Self {
            root: Node::root(),
            options,
        }
    }

    /// Returns the options this trie was built with.
    pub fn options(&self) -> TrieOptions {
        self.options
    }

    /// The root of the node tree, for inspection.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Registers a pattern with a value.
    ///
    /// Every string is a valid pattern. Inserting a pattern that is already
    /// present adds a second entry instead of replacing the first.
    ///
    /// ```rust
    /// let mut trie = pathtrie::Trie::new();
    /// trie.insert("/", "index");
    /// trie.insert("/", "index");
    ///
    /// assert_eq!(trie.lookup("/").unwrap().len(), 2);
    /// ```
    pub fn insert(&mut self, pattern: impl AsRef<str>, value: T) {
        let pattern = pattern.as_ref();
        let segments: Vec<&str> = self
            .options
            .segments(pattern)
            .map(|path| path.split('/').collect())
            .unwrap_or_default();

        let depth = self
            .root
            .insert(&segments, value, self.options.ignore_consecutive_slashes);

        trace!("inserted pattern {:?} at depth {}", pattern, depth);
    }

    /// Resolves a path against every registered pattern.
    ///
    /// All patterns ending at the matched node are returned, in insertion
    /// order, each with its own parameter names bound to the same values.
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut trie = pathtrie::Trie::new();
    /// trie.insert("/:id/:org", 1);
    /// trie.insert("/:name/:surname", 2);
    ///
    /// let matches = trie.lookup("/1/abc")?;
    /// assert_eq!(matches.len(), 2);
    /// assert_eq!(matches[0].param("org"), Some("abc"));
    /// assert_eq!(matches[1].param("surname"), Some("abc"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn lookup<'t, 'p>(&'t self, path: &'p str) -> Result<Vec<Match<'t, 'p, T>>, MatchError> {
        let mut values = Vec::new();
        let matches = self.root.lookup(
            self.options.segments(path),
            &mut values,
            self.options.ignore_consecutive_slashes,
            true,
        );

        match matches {
            Some(matches) => {
                trace!("path {:?} matched {} pattern(s)", path, matches.len());
                Ok(matches)
            }
            None => {
                trace!("path {:?} matched nothing", path);
                Err(MatchError::NotFound)
            }
        }
    }

    /// Renders the tree line by line, for debugging.
    pub fn pretty_print(&self) -> PrettyPrint<'_, T> {
        PrettyPrint::root(&self.root)
    }
}

impl<T> fmt::Display for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.pretty_print() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
