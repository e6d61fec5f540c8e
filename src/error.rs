use thiserror::Error;

/// A failed lookup.
///
/// ```
/// use pathtrie::{MatchError, Trie};
///
/// let mut trie = Trie::new();
/// trie.insert("/home", "Welcome!");
/// trie.insert("/blog/", "Our blog.");
///
/// // no pattern matches
/// assert_eq!(trie.lookup("/foobar").unwrap_err(), MatchError::NotFound);
/// ```
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchError {
    /// Every static, param and wildcard branch was exhausted without
    /// reaching a terminal node.
    #[error("matching route not found")]
    NotFound,
}
