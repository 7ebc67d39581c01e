//! Value encoding/decoding for query-string parameters.
//!
//! Converts between [`Value`] and the raw text stored in
//! [`RawParams`](crate::model::RawParams), selected by a [`ParamType`] tag.
//!
//! | type | wire form |
//! |---|---|
//! | string | text as given; decoded with percent-decoding |
//! | number | decimal text |
//! | boolean | `true` / `false` |
//! | array | elements joined by `,` |
//! | object | percent-encoded JSON text |

use serde_json::Value as JsonValue;

use crate::codec::primitives::{decode_component, encode_component, format_number, parse_number};
use crate::error::EncodeError;
use crate::model::{ObjectMap, ParamType, Value};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes raw parameter text as a value of the given type.
///
/// Never fails. Text that does not fit the type degrades: a number becomes
/// `NaN` and an object becomes empty.
pub fn decode_value(param_type: ParamType, raw: &str) -> Value {
    match param_type {
        ParamType::String => Value::Str(decode_component(raw).into_owned()),
        ParamType::Number => Value::Number(parse_number(raw)),
        ParamType::Boolean => Value::Bool(raw.eq_ignore_ascii_case("true")),
        ParamType::Array => decode_array(raw),
        ParamType::Object => Value::Object(decode_object(raw)),
    }
}

/// Empty text yields one empty element, not an empty array.
fn decode_array(raw: &str) -> Value {
    Value::Array(
        raw.split(',')
            .map(|item| decode_component(item).into_owned())
            .collect(),
    )
}

fn decode_object(raw: &str) -> ObjectMap {
    let text = decode_component(raw);
    match serde_json::from_str::<JsonValue>(&text) {
        Ok(JsonValue::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(raw, kind = json_kind(&other), "object parameter is not a JSON object");
            ObjectMap::new()
        }
        Err(err) => {
            tracing::warn!(raw, error = %err, "malformed object parameter");
            ObjectMap::new()
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a value as raw parameter text, using the value's own type.
///
/// Strings and array elements are written as given; only objects are
/// percent-encoded.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.join(","),
        Value::Object(map) => {
            let json = JsonValue::Object(map.clone()).to_string();
            encode_component(&json).into_owned()
        }
    }
}

/// Encodes a value for a parameter declared with `param_type`.
///
/// Fails when the value has a different type.
pub fn encode_as(name: &str, param_type: ParamType, value: &Value) -> Result<String, EncodeError> {
    let found = value.param_type();
    if found != param_type {
        return Err(EncodeError::TypeMismatch {
            name: name.to_string(),
            expected: param_type,
            found,
        });
    }
    Ok(encode_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn roundtrip(value: &Value) -> Value {
        decode_value(value.param_type(), &encode_value(value))
    }

    fn object(v: JsonValue) -> Value {
        match v {
            JsonValue::Object(map) => Value::Object(map),
            _ => panic!("expected object literal"),
        }
    }

    #[test]
    fn test_string_roundtrip() {
        for s in ["", "hello", "hello-world_1.0"] {
            let value = Value::from(s);
            assert_eq!(roundtrip(&value), value);
        }
    }

    #[test]
    fn test_string_decode_percent() {
        assert_eq!(decode_value(ParamType::String, "hello%20world"), Value::from("hello world"));
        // encoding is the identity
        assert_eq!(encode_value(&Value::from("hello world")), "hello world");
    }

    #[test]
    fn test_number_roundtrip() {
        for v in [0.0, 1.0, -1.0, 2.5, 1e21, f64::INFINITY] {
            let value = Value::Number(v);
            assert_eq!(roundtrip(&value), value);
        }
        assert_eq!(roundtrip(&Value::Number(f64::NAN)), Value::Number(f64::NAN));
    }

    #[test]
    fn test_number_non_numeric_is_nan() {
        let decoded = decode_value(ParamType::Number, "abc");
        assert!(decoded.as_number().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_bool_roundtrip() {
        for v in [true, false] {
            let value = Value::Bool(v);
            assert_eq!(encode_value(&value), v.to_string());
            assert_eq!(roundtrip(&value), value);
        }
    }

    #[test]
    fn test_bool_decode_case_insensitive() {
        assert_eq!(decode_value(ParamType::Boolean, "TRUE"), Value::Bool(true));
        assert_eq!(decode_value(ParamType::Boolean, "True"), Value::Bool(true));
        assert_eq!(decode_value(ParamType::Boolean, "1"), Value::Bool(false));
        assert_eq!(decode_value(ParamType::Boolean, ""), Value::Bool(false));
    }

    #[test]
    fn test_array_roundtrip() {
        let value = Value::from(vec!["a", "b"]);
        assert_eq!(encode_value(&value), "a,b");
        assert_eq!(roundtrip(&value), value);
    }

    #[test]
    fn test_array_decode_percent_per_element() {
        assert_eq!(
            decode_value(ParamType::Array, "hello%20world,%2C"),
            Value::from(vec!["hello world", ","])
        );
    }

    #[test]
    fn test_array_empty_text_is_single_empty_element() {
        assert_eq!(decode_value(ParamType::Array, ""), Value::from(vec![""]));
        assert_eq!(encode_value(&Value::Array(Vec::new())), "");
    }

    #[test]
    fn test_object_roundtrip() {
        for v in [json!({}), json!({"category": "electronics", "brand": "apple"}), json!({"a": {"b": [1, 2]}})] {
            let value = object(v);
            assert_eq!(roundtrip(&value), value);
        }
    }

    #[test]
    fn test_object_encoding_is_percent_encoded() {
        let encoded = encode_value(&object(json!({"foo": "bar"})));
        assert_eq!(encoded, "%7B%22foo%22%3A%22bar%22%7D");
    }

    #[test]
    fn test_object_malformed_is_empty() {
        for raw in ["not-json", "%7B", "5", "%5B1%5D", ""] {
            assert_eq!(decode_value(ParamType::Object, raw), Value::Object(ObjectMap::new()));
        }
    }

    #[test]
    fn test_encode_as_checks_type() {
        assert_eq!(encode_as("page", ParamType::Number, &Value::from(2)), Ok("2".to_string()));
        let err = encode_as("page", ParamType::Number, &Value::from("2")).unwrap_err();
        assert_eq!(
            err,
            EncodeError::TypeMismatch {
                name: "page".to_string(),
                expected: ParamType::Number,
                found: ParamType::String,
            }
        );
    }

    proptest! {
        #[test]
        fn prop_number_roundtrip(v in any::<f64>()) {
            prop_assert_eq!(roundtrip(&Value::Number(v)), Value::Number(v));
        }

        #[test]
        fn prop_array_roundtrip(items in prop::collection::vec("[a-zA-Z0-9 _-]{1,8}", 1..6)) {
            let value = Value::Array(items);
            prop_assert_eq!(roundtrip(&value), value);
        }

        #[test]
        fn prop_object_roundtrip(entries in prop::collection::btree_map("[a-z&=%,]{1,6}", "[ -~]{0,10}", 0..5)) {
            let map: ObjectMap = entries.into_iter().map(|(k, v)| (k, JsonValue::String(v))).collect();
            let value = Value::Object(map);
            prop_assert_eq!(roundtrip(&value), value);
        }
    }
}
