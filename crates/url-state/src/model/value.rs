//! Value types for URL-bound parameters.
//!
//! A [`Value`] is the decoded form of one query-string entry. Its kind is
//! always one of the five [`ParamType`] tags.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// String-keyed structure carried by [`Value::Object`].
pub type ObjectMap = serde_json::Map<String, JsonValue>;

/// Type tag selecting how a parameter is encoded and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    /// Returns the lowercase name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
            ParamType::Object => "object",
        }
    }

    /// Returns the zero value of this type, used when a descriptor declares a
    /// type without a default.
    pub fn zero_value(self) -> Value {
        match self {
            ParamType::String => Value::Str(String::new()),
            ParamType::Number => Value::Number(0.0),
            ParamType::Boolean => Value::Bool(false),
            ParamType::Array => Value::Array(Vec::new()),
            ParamType::Object => Value::Object(ObjectMap::new()),
        }
    }
}

/// A typed parameter value.
///
/// Equality is structural (see [`is_equal`]): `NaN` equals `NaN` and `0`
/// equals `-0`.
#[derive(Debug, Clone)]
pub enum Value {
    /// Text.
    Str(String),
    /// Double-precision number. `NaN` is a legitimate value.
    Number(f64),
    /// Boolean flag.
    Bool(bool),
    /// List of strings.
    Array(Vec<String>),
    /// String-keyed structure.
    Object(ObjectMap),
}

impl Value {
    /// Returns the type tag of this value.
    pub fn param_type(&self) -> ParamType {
        match self {
            Value::Str(_) => ParamType::String,
            Value::Number(_) => ParamType::Number,
            Value::Bool(_) => ParamType::Boolean,
            Value::Array(_) => ParamType::Array,
            Value::Object(_) => ParamType::Object,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        is_equal(self, other)
    }
}

/// Deep structural equality between two values.
///
/// Numbers compare with `NaN == NaN` and `0 == -0`. Values of different
/// kinds are never equal, so an array never equals an object.
pub fn is_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(*a, *b),
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => a == b,
        (Value::Object(a), Value::Object(b)) => object_equal(a, b),
        _ => false,
    }
}

/// Deep structural equality between two JSON values.
///
/// Numbers compare numerically, so `1` equals `1.0`.
pub fn json_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
        (JsonValue::Number(a), JsonValue::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => number_equal(x, y),
            _ => a == b,
        },
        (JsonValue::String(a), JsonValue::String(b)) => a == b,
        (JsonValue::Array(a), JsonValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| json_equal(x, y))
        }
        (JsonValue::Object(a), JsonValue::Object(b)) => object_equal(a, b),
        _ => false,
    }
}

#[inline]
fn number_equal(a: f64, b: f64) -> bool {
    // `==` already treats 0 and -0 as equal
    (a.is_nan() && b.is_nan()) || a == b
}

fn object_equal(a: &ObjectMap, b: &ObjectMap) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, x)| b.get(key).is_some_and(|y| json_equal(x, y)))
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::Array(items.into_iter().map(str::to_string).collect())
    }
}

impl From<ObjectMap> for Value {
    fn from(map: ObjectMap) -> Self {
        Value::Object(map)
    }
}

/// Rust types that can be bound to a URL parameter.
pub trait ParamValue: Clone {
    /// Tag used to encode and decode this type.
    const TYPE: ParamType;

    /// Converts into the dynamic representation.
    fn into_value(self) -> Value;

    /// Converts back; returns `None` when the value has another kind.
    fn from_value(value: Value) -> Option<Self>;
}

impl ParamValue for String {
    const TYPE: ParamType = ParamType::String;

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl ParamValue for f64 {
    const TYPE: ParamType = ParamType::Number;

    fn into_value(self) -> Value {
        Value::Number(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_number()
    }
}

impl ParamValue for bool {
    const TYPE: ParamType = ParamType::Boolean;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        value.as_bool()
    }
}

impl ParamValue for Vec<String> {
    const TYPE: ParamType = ParamType::Array;

    fn into_value(self) -> Value {
        Value::Array(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl ParamValue for ObjectMap {
    const TYPE: ParamType = ParamType::Object;

    fn into_value(self) -> Value {
        Value::Object(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}
