//! Request payloads and the field validators the rule chains are built from.
//!
//! Validators look at raw JSON values rather than typed structs so that a
//! wrong type (a string price, a fractional quantity) is reported as an
//! `InvalidField` failure instead of a deserialization error.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::DomainError;

/// Attribute mapping sent by a client under the `data` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Returns the attribute, treating an explicit `null` as absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Returns a non-empty string `id` attribute, if any.
    ///
    /// Non-string ids are rendered as JSON so they can still be compared and
    /// reported.
    pub fn id(&self) -> Option<String> {
        match self.get("id")? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Payload(map),
            _ => Payload::default(),
        }
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Payload(map)
    }
}

/// Requires a non-empty string.
pub fn text(
    value: Option<&Value>,
    field: &'static str,
    message: &str,
) -> Result<String, DomainError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(DomainError::invalid_field(field, message)),
    }
}

/// Requires a number strictly greater than zero.
pub fn positive_number(
    value: Option<&Value>,
    field: &'static str,
    message: &str,
) -> Result<f64, DomainError> {
    match value.and_then(Value::as_f64) {
        Some(n) if n > 0.0 => Ok(n),
        _ => Err(DomainError::invalid_field(field, message)),
    }
}

/// Requires a whole number strictly greater than zero.
pub fn positive_integer(
    value: Option<&Value>,
    field: &'static str,
    message: &str,
) -> Result<u32, DomainError> {
    match value
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
    {
        Some(n) if n > 0 => Ok(n),
        _ => Err(DomainError::invalid_field(field, message)),
    }
}

/// Requires an array with at least one element.
pub fn non_empty_list<'a>(
    value: Option<&'a Value>,
    field: &'static str,
    message: &str,
) -> Result<&'a [Value], DomainError> {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items),
        _ => Err(DomainError::invalid_field(field, message)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn field_of(err: DomainError) -> &'static str {
        match err {
            DomainError::InvalidField { field, .. } => field,
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn payload_treats_null_as_absent() {
        let payload = Payload::from(json!({ "name": null, "price": 3 }));
        assert!(payload.get("name").is_none());
        assert!(payload.get("missing").is_none());
        assert_eq!(payload.get("price"), Some(&json!(3)));
    }

    #[test]
    fn payload_from_non_object_is_empty() {
        assert_eq!(Payload::from(json!([1, 2])), Payload::default());
        assert_eq!(Payload::from(json!("text")), Payload::default());
        assert_eq!(Payload::from(Value::Null), Payload::default());
    }

    #[test]
    fn payload_deserializes_from_any_json() {
        let payload: Payload = serde_json::from_str(r#"{"name":"Taco"}"#).unwrap();
        assert_eq!(payload.get("name"), Some(&json!("Taco")));

        let empty: Payload = serde_json::from_str("42").unwrap();
        assert_eq!(empty, Payload::default());
    }

    #[test]
    fn payload_id_ignores_empty_strings() {
        assert_eq!(Payload::from(json!({ "id": "" })).id(), None);
        assert_eq!(Payload::from(json!({ "id": "a1" })).id(), Some("a1".into()));
        assert_eq!(Payload::from(json!({ "id": 7 })).id(), Some("7".into()));
        assert_eq!(Payload::from(json!({})).id(), None);
    }

    #[test]
    fn text_rejects_missing_empty_and_non_strings() {
        assert_eq!(text(Some(&json!("Taco")), "name", "m").unwrap(), "Taco");

        for bad in [None, Some(json!("")), Some(json!(12)), Some(json!(["a"]))] {
            let err = text(bad.as_ref(), "name", "Dish must include a name").unwrap_err();
            assert_eq!(err.to_string(), "Dish must include a name");
            assert_eq!(field_of(err), "name");
        }
    }

    #[test]
    fn positive_number_bounds_and_type() {
        assert_eq!(positive_number(Some(&json!(5)), "price", "m").unwrap(), 5.0);
        assert_eq!(
            positive_number(Some(&json!(12.5)), "price", "m").unwrap(),
            12.5
        );

        for bad in [None, Some(json!(0)), Some(json!(-1)), Some(json!("5"))] {
            let err = positive_number(bad.as_ref(), "price", "m").unwrap_err();
            assert_eq!(field_of(err), "price");
        }
    }

    #[test]
    fn positive_integer_rejects_fractions_and_non_positive() {
        assert_eq!(
            positive_integer(Some(&json!(2)), "quantity", "m").unwrap(),
            2
        );

        for bad in [
            None,
            Some(json!(0)),
            Some(json!(-3)),
            Some(json!(1.5)),
            Some(json!("2")),
        ] {
            assert!(positive_integer(bad.as_ref(), "quantity", "m").is_err());
        }
    }

    #[test]
    fn non_empty_list_requires_an_array_with_elements() {
        let value = json!([{ "quantity": 1 }]);
        assert_eq!(non_empty_list(Some(&value), "dishes", "m").unwrap().len(), 1);

        for bad in [None, Some(json!([])), Some(json!({ "quantity": 1 })), Some(json!("x"))] {
            assert!(non_empty_list(bad.as_ref(), "dishes", "m").is_err());
        }
    }
}
