// Author: Dustin Pilgrim
// License: MIT

use serde_json::Value as Json;

use crate::ConfError;
use crate::ast::{Document, Number, Value};
use crate::writer::{self, Node, Tree};

/// Export a parsed document to JSON.
///
/// The object has the top-level pairs as keys, then `controller` when present and
/// finally the `devices` array. Each block's `parameters` is a nested object.
///
/// # Examples
/// ```
/// use tellstick_cfg::{parse, export};
///
/// let doc = parse("user = \"nobody\"\ndevice {\n  id = 1\n}").unwrap();
/// let json = export::document_to_json(&doc).unwrap();
/// assert!(json.contains("\"devices\""));
/// ```
pub fn document_to_json(doc: &Document) -> Result<String, ConfError> {
    serde_json::to_string_pretty(doc).map_err(|e| ConfError::InvalidShape {
        message: e.to_string(),
        path: String::new(),
        hint: None,
        code: Some(502),
    })
}

/// Build a writer tree from an arbitrary JSON object.
///
/// Scalars map to values, objects to blocks and arrays of objects to block
/// sequences. Anything else (a non-object root, arrays of scalars, nested arrays)
/// has no textual form and is rejected.
pub fn tree_from_json(json: &Json) -> Result<Tree, ConfError> {
    match json {
        Json::Object(map) => object_to_tree(map, ""),
        other => Err(invalid_shape("", format!("expected an object at the root, got {}", kind(other)))),
    }
}

/// Render a JSON object straight to config text.
pub fn render_json(json: &Json) -> Result<String, ConfError> {
    Ok(writer::render(&tree_from_json(json)?))
}

fn object_to_tree(map: &serde_json::Map<String, Json>, path: &str) -> Result<Tree, ConfError> {
    let mut tree = Tree::new();
    for (key, json) in map {
        let child_path = if path.is_empty() { key.clone() } else { format!("{}.{}", path, key) };
        let node = match json {
            Json::Object(inner) => Node::Block(object_to_tree(inner, &child_path)?),
            Json::Array(items) => {
                let mut blocks = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let item_path = format!("{}.{}", child_path, i);
                    match item {
                        Json::Object(inner) => blocks.push(object_to_tree(inner, &item_path)?),
                        other => {
                            return Err(invalid_shape(
                                &item_path,
                                format!("sequence elements must be objects, got {}", kind(other)),
                            ));
                        }
                    }
                }
                Node::Blocks(blocks)
            }
            scalar => Node::Value(scalar_to_value(scalar, &child_path)?),
        };
        tree.insert(key.clone(), node);
    }
    Ok(tree)
}

fn scalar_to_value(json: &Json, path: &str) -> Result<Value, ConfError> {
    match json {
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Null => Ok(Value::Null),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(Number::Int(i)))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Number(Number::Float(f)))
            } else {
                Err(invalid_shape(path, format!("unsupported number {}", n)))
            }
        }
        other => Err(invalid_shape(path, format!("expected a scalar, got {}", kind(other)))),
    }
}

fn kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

fn invalid_shape(path: &str, message: String) -> ConfError {
    ConfError::InvalidShape {
        message,
        path: path.to_string(),
        hint: Some("Only scalars, objects and arrays of objects can be written".into()),
        code: Some(501),
    }
}
