//! Conversions between `serde_json::Value` and [`Value`].
//!
//! Parsing JSON text is left to `serde_json`; this module only maps an
//! already-parsed tree onto the five supported kinds. Integer range is
//! checked later, when the value is encoded.

use serde_json::{Map, Number};

use crate::error::CodecError;
use crate::types::{Object, Value};

impl TryFrom<&serde_json::Value> for Value {
    type Error = CodecError;

    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Null => Err(CodecError::UnsupportedType("null".into())),
            serde_json::Value::Bool(b) => Ok(Self::Boolean(*b)),
            serde_json::Value::Number(n) => number_to_value(n),
            serde_json::Value::String(s) => Ok(Self::String(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(k, v)| Self::try_from(v).map(|v| (k.clone(), v)))
                .collect::<Result<Object, _>>()
                .map(Self::Object),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = CodecError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Self::try_from(&json)
    }
}

fn number_to_value(n: &Number) -> Result<Value, CodecError> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(i));
    }
    if n.is_u64() {
        return Err(CodecError::Range {
            field: "integer",
            value: i64::MAX,
        });
    }
    Err(CodecError::UnsupportedType(format!("float {n}")))
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(i) => Self::Number(i.into()),
            Value::String(s) => Self::String(s),
            Value::Boolean(b) => Self::Bool(b),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(obj) => Self::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect::<Map<String, Self>>(),
            ),
        }
    }
}
