//! Parameter descriptors.
//!
//! A descriptor names one query-string key, fixes its [`ParamType`] and
//! carries the default value reported when the key is absent. The type is
//! resolved once, when the descriptor is built.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::ParamError;
use crate::model::{ParamType, Value};

/// Declared name, type tag and default value of one bound parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "DescriptorConfig")]
pub struct ParamDescriptor {
    name: String,
    param_type: ParamType,
    default_value: Value,
}

impl ParamDescriptor {
    /// Creates a descriptor whose type is inferred from `default`.
    pub fn new(name: impl Into<String>, default: impl Into<Value>) -> Self {
        let default_value = default.into();
        Self {
            name: name.into(),
            param_type: default_value.param_type(),
            default_value,
        }
    }

    /// Creates a string parameter defaulting to the empty string.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    /// Creates a descriptor with an explicit type.
    ///
    /// Fails when the default's kind disagrees with `param_type`.
    pub fn with_type(
        name: impl Into<String>,
        param_type: ParamType,
        default: impl Into<Value>,
    ) -> Result<Self, ParamError> {
        let name = name.into();
        let default_value = default.into();
        let found = default_value.param_type();
        if found != param_type {
            return Err(ParamError::DefaultTypeMismatch {
                name,
                declared: param_type,
                found,
            });
        }
        Ok(Self {
            name,
            param_type,
            default_value,
        })
    }

    /// Creates a descriptor from a JSON default, inferring the type from its
    /// runtime shape.
    ///
    /// Shapes are checked in the order string, number, boolean, array,
    /// object. `null` and arrays holding anything other than strings are
    /// rejected.
    pub fn from_json(name: impl Into<String>, default: JsonValue) -> Result<Self, ParamError> {
        let name = name.into();
        let default_value = value_from_json(&name, default)?;
        Ok(Self::new(name, default_value))
    }

    /// Returns the query-string key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type tag.
    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    /// Returns the value reported while the key is absent.
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Returns true if `value` is deep-equal to the default.
    pub fn is_default(&self, value: &Value) -> bool {
        *value == self.default_value
    }
}

fn value_from_json(name: &str, json: JsonValue) -> Result<Value, ParamError> {
    let unsupported = |shape| ParamError::UnsupportedDefault {
        name: name.to_string(),
        shape,
    };
    match json {
        JsonValue::String(s) => Ok(Value::Str(s)),
        JsonValue::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| unsupported("number")),
        JsonValue::Bool(b) => Ok(Value::Bool(b)),
        JsonValue::Array(items) => items
            .into_iter()
            .map(|item| match item {
                JsonValue::String(s) => Ok(s),
                _ => Err(unsupported("array of non-strings")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        JsonValue::Object(map) => Ok(Value::Object(map)),
        JsonValue::Null => Err(unsupported("null")),
    }
}

/// Configuration form of a descriptor.
///
/// ```json
/// { "name": "page", "type": "number", "defaultValue": 1 }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorConfig {
    name: String,
    #[serde(rename = "type", default)]
    param_type: Option<ParamType>,
    #[serde(default)]
    default_value: Option<JsonValue>,
}

impl TryFrom<DescriptorConfig> for ParamDescriptor {
    type Error = ParamError;

    fn try_from(config: DescriptorConfig) -> Result<Self, Self::Error> {
        let DescriptorConfig {
            name,
            param_type,
            default_value,
        } = config;
        match (param_type, default_value) {
            (Some(param_type), Some(default)) => {
                let default = value_from_json(&name, default)?;
                Self::with_type(name, param_type, default)
            }
            (Some(param_type), None) => Self::with_type(name, param_type, param_type.zero_value()),
            (None, Some(default)) => Self::from_json(name, default),
            (None, None) => Err(ParamError::MissingDefault { name }),
        }
    }
}
