use crate::tree::{Node, NodeKind};

use std::fmt;

/// A line-by-line rendering of a node tree, produced lazily.
///
/// ```
/// let mut trie = pathtrie::Trie::new();
/// trie.insert("/users/:id", ());
///
/// let lines: Vec<String> = trie.pretty_print().collect();
/// assert_eq!(
///     lines,
///     [
///         "┬",
///         "├── /",
///         "│   ├── /users",
///         "│   │   ├── /:param",
///         "│   │   │   └── (end) #1",
///         "│   │   ┴",
///         "│   ┴",
///         "┴",
///     ]
/// );
/// ```
pub struct PrettyPrint<'t, T> {
    stack: Vec<Step<'t, T>>,
}

enum Step<'t, T> {
    Line(String),
    Children(&'t Node<T>, String),
}

impl<'t, T> PrettyPrint<'t, T> {
    pub(crate) fn root(root: &'t Node<T>) -> Self {
        let stack = vec![
            Step::Line("┴".to_owned()),
            Step::Children(root, String::new()),
            Step::Line("┬".to_owned()),
        ];
        Self { stack }
    }

    pub(crate) fn subtree(node: &'t Node<T>) -> Self {
        Self {
            stack: vec![Step::Children(node, String::new())],
        }
    }
}

impl<T> Iterator for PrettyPrint<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.stack.pop()? {
                Step::Line(line) => return Some(line),
                Step::Children(node, prefix) => {
                    let nested = format!("{}│   ", prefix);
                    let mut steps = Vec::new();

                    for child in node.children() {
                        steps.push(Step::Line(format!("{}├── {}", prefix, Label(child.kind()))));
                        steps.push(Step::Children(child, nested.clone()));
                        steps.push(Step::Line(if child.is_terminal() {
                            format!("{}└── (end) #{}", nested, child.entries().len())
                        } else {
                            format!("{}┴", nested)
                        }));
                    }

                    self.stack.extend(steps.into_iter().rev());
                }
            }
        }
    }
}

struct Label<'a>(&'a NodeKind);

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            NodeKind::Static(literal) => write!(f, "/{}", literal),
            NodeKind::Param => f.write_str("/:param"),
            NodeKind::Wildcard => f.write_str("/*wildcard"),
        }
    }
}
