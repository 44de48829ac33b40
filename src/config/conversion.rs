// Author: Dustin Pilgrim
// License: MIT

use crate::ConfError;
use crate::ast::{Number, Value};

fn type_error(expected: &str, value: &Value, code: u32) -> ConfError {
    ConfError::TypeError {
        message: format!("Expected {}, got {}", expected, value),
        line: 0,
        hint: Some(format!("Use {} value in your config", expected)),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = ConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(type_error("a string", &other, 402)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(type_error("a boolean", &other, 403)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(type_error("a number", &other, 404)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = ConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|n| n as f32)
    }
}

impl TryFrom<Value> for Number {
    type Error = ConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(type_error("a number", &other, 404)),
        }
    }
}

/// `null` becomes `None`; anything else must convert to `T`.
impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = ConfError>,
{
    type Error = ConfError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

/// Integers only accept integer literals; `1.0` is a float and stays one.
macro_rules! impl_try_from_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = ConfError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::Number(Number::Int(i)) => <$ty>::try_from(i).map_err(|_| ConfError::TypeError {
                            message: format!("{} is out of range for {}", i, stringify!($ty)),
                            line: 0,
                            hint: None,
                            code: Some(406),
                        }),
                        other => Err(type_error("an integer", &other, 404)),
                    }
                }
            }
        )*
    };
}

impl_try_from_integer!(i64, i32, u8, u16, u32, u64, usize);
