//! Request DTOs for the cache HTTP API

use serde::Deserialize;
use serde_json::Value;

/// Request body for PUT /set
///
/// `value` may be any JSON value; it is stored as serialized JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The item key
    pub key: String,
    /// The value to store
    pub value: Value,
}

impl SetRequest {
    /// Returns an error message if the request is unusable, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "item1", "value": "data1"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "item1");
        assert_eq!(req.value, json!("data1"));
    }

    #[test]
    fn test_set_request_structured_value() {
        let json = r#"{"key": "item1", "value": {"n": [1, 2]}}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.value["n"][1], 2);
    }

    #[test]
    fn test_set_request_null_value_and_missing_key() {
        let req: SetRequest = serde_json::from_str(r#"{"key": "k", "value": null}"#).unwrap();
        assert!(req.value.is_null());
        assert!(serde_json::from_str::<SetRequest>(r#"{"value": 1}"#).is_err());
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: json!(1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = SetRequest {
            key: "valid_key".to_string(),
            value: json!("x"),
        };
        assert!(req.validate().is_none());
    }
}
