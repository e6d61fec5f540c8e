//! A segment trie for resolving paths against sets of patterns.
//!
//! ```rust
//! use pathtrie::Trie;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trie = Trie::new();
//! trie.insert("/home", "Welcome!");
//! trie.insert("/users/:id", "A User");
//!
//! let matches = trie.lookup("/users/978")?;
//! assert_eq!(matches[0].param("id"), Some("978"));
//! assert_eq!(*matches[0].value, "A User");
//! # Ok(())
//! # }
//! ```
//!
//! # Parameters
//!
//! Patterns are split on `/` into segments, and each segment is one of:
//!
//! ```text
//!  Syntax    Type
//!  :name     named parameter
//!  *name     named wildcard
//!  other     literal
//! ```
//!
//! Named parameters match exactly one non-empty segment:
//!
//! ```text
//!  Pattern: /blog/:category/:post
//!
//!  /blog/rust/request-routers            match: category="rust", post="request-routers"
//!  /blog/rust/request-routers/           no match
//!  /blog/rust/                           no match
//!  /blog/rust/request-routers/comments   no match
//! ```
//!
//! Wildcards match everything from their segment to the end of the path, and
//! must be non-empty. Segments after a wildcard in a pattern are ignored:
//!
//! ```text
//!  Pattern: /files/*filepath
//!
//!  /files/LICENSE                        match: filepath="LICENSE"
//!  /files/templates/article.html         match: filepath="templates/article.html"
//!  /files/                               no match
//!  /files                                no match
//! ```
//!
//! # Priority
//!
//! A path may match more than one pattern. At each segment a literal is tried
//! first, then a parameter, then a wildcard; the first branch that reaches a
//! terminal node wins, backtracking out of branches that dead-end:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut trie = pathtrie::Trie::new();
//! trie.insert("/users/:id", "user");
//! trie.insert("/users/dashboard", "dashboard");
//!
//! assert_eq!(*trie.lookup("/users/dashboard")?[0].value, "dashboard");
//! assert_eq!(*trie.lookup("/users/42")?[0].value, "user");
//! # Ok(())
//! # }
//! ```
//!
//! The tree is keyed on the shape of a pattern, not its parameter names, so
//! `/:id/:org` and `/:name/:surname` end at the same node. Looking up
//! `/1/abc` returns both, in insertion order.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod pretty;
mod tree;
mod trie;

pub use error::MatchError;
pub use params::{Params, ParamsIter};
pub use pretty::PrettyPrint;
pub use tree::{Entry, Match, Node, NodeKind};
pub use trie::{Trie, TrieOptions};
