use indexmap::IndexMap;

use crate::ast::{Block, Document, Value};
use crate::parser::{CONTROLLER, DEVICES, PARAMETERS};

const INDENT: usize = 2;

/// A node of the structure handed to [`render`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Value(Value),
    /// Rendered as `KEY { ... }`.
    Block(Tree),
    /// Rendered as one block per element, named by the singular of the key.
    Blocks(Vec<Tree>),
}

/// Ordered mapping rendered one entry after another.
pub type Tree = IndexMap<String, Node>;

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::Value(value)
    }
}

impl From<&Block> for Tree {
    fn from(block: &Block) -> Self {
        let mut tree: Tree = block
            .pairs
            .iter()
            .map(|(k, v)| (k.clone(), Node::Value(v.clone())))
            .collect();
        if let Some(parameters) = block.parameters() {
            tree.insert(PARAMETERS.to_string(), Node::Block(parameters.into()));
        }
        tree
    }
}

impl From<&Document> for Tree {
    fn from(doc: &Document) -> Self {
        let mut tree: Tree = doc
            .pairs
            .iter()
            .map(|(k, v)| (k.clone(), Node::Value(v.clone())))
            .collect();
        if let Some(controller) = &doc.controller {
            tree.insert(CONTROLLER.to_string(), Node::Block(controller.into()));
        }
        tree.insert(
            DEVICES.to_string(),
            Node::Blocks(doc.devices.iter().map(Tree::from).collect()),
        );
        tree
    }
}

/// Block name used for the elements of a sequence stored under `key`.
///
/// Only a trailing `s` is stripped (`devices` -> `device`); there is no
/// pluralization table, so `address` would come out as `addres`.
pub fn singularize(key: &str) -> &str {
    key.strip_suffix('s').unwrap_or(key)
}

/// Render `tree` in the config text format.
///
/// Two spaces of indentation per nesting level, lines joined by `\n` and no
/// trailing newline. Strings are written between double quotes as they are, so a
/// string containing `"` cannot be read back.
pub fn render(tree: &Tree) -> String {
    let mut lines = Vec::new();
    render_tree(tree, 0, &mut lines);
    lines.join("\n")
}

/// Render a parsed document: top-level pairs, the controller, then devices.
pub fn render_document(doc: &Document) -> String {
    render(&Tree::from(doc))
}

fn render_tree(tree: &Tree, indent: usize, lines: &mut Vec<String>) {
    for (key, node) in tree {
        match node {
            Node::Blocks(items) => {
                let name = singularize(key);
                for item in items {
                    render_block(name, item, indent, lines);
                }
            }
            Node::Block(children) => render_block(key, children, indent, lines),
            Node::Value(value) => {
                lines.push(format!("{:indent$}{} = {}", "", key, value, indent = indent));
            }
        }
    }
}

fn render_block(name: &str, children: &Tree, indent: usize, lines: &mut Vec<String>) {
    lines.push(format!("{:indent$}{} {{", "", name, indent = indent));
    render_tree(children, indent + INDENT, lines);
    lines.push(format!("{:indent$}}}", "", indent = indent));
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_document(self))
    }
}
