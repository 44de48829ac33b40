use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Numeric literal. Integer vs float is decided purely from the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the decimal point on whole floats ("1.0").
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_number(&self) -> Option<Number> {
        if let Value::Number(n) = self { Some(*n) } else { None }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Renders the value the way it appears on the right of `=`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Int(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// A brace-delimited group of pairs with an optional nested `parameters` block.
///
/// The block carries no name of its own; whether it is a `device`, the `controller`
/// or a `parameters` block is decided by where it hangs in the [`Document`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub pairs: IndexMap<String, Value>,
    pub parameters: Option<Box<Block>>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair. A repeated key keeps its first position but takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.pairs.insert(key.into(), value.into())
    }

    /// Builder-style [`Block::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_parameters(mut self, parameters: Block) -> Self {
        self.parameters = Some(Box::new(parameters));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.get(key)
    }

    pub fn parameters(&self) -> Option<&Block> {
        self.parameters.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.parameters.is_none()
    }
}

/// Parse result root: top-level pairs, an optional controller and the device list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub pairs: IndexMap<String, Value>,
    pub controller: Option<Block>,
    pub devices: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.get(key)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.pairs.len() + usize::from(self.parameters.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        if let Some(parameters) = &self.parameters {
            map.serialize_entry("parameters", parameters)?;
        }
        map.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.pairs.len() + usize::from(self.controller.is_some()) + 1;
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        if let Some(controller) = &self.controller {
            map.serialize_entry("controller", controller)?;
        }
        map.serialize_entry("devices", &self.devices)?;
        map.end()
    }
}
