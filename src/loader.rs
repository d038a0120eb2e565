//! Model loading
//!
//! Reads an ApiModel from a JSON document. This is the bundled schema
//! provider; anything that constructs an `ApiModel` value can stand in
//! for it.
//!
//! Document shape:
//! ```json
//! {
//!   "types": {
//!     "User": { "kind": "object", "fields": { "id": { "kind": "number" } } }
//!   },
//!   "endpoints": {
//!     "getUser": {
//!       "method": "GET",
//!       "path": ["users", "{id}"],
//!       "requestType": { "kind": "void" },
//!       "responseType": { "kind": "reference", "name": "User" },
//!       "defaultErrorType": { "kind": "null" }
//!     }
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::ApiModel;

/// Parse a model from a JSON string
pub fn parse_model(json: &str) -> Result<ApiModel> {
    Ok(serde_json::from_str(json)?)
}

/// Load a model from a JSON file
pub fn load_model(path: impl AsRef<Path>) -> Result<ApiModel> {
    let raw = fs::read_to_string(path)?;
    parse_model(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HttpMethod, TypeNode};

    #[test]
    fn test_parse_minimal_document() {
        let model = parse_model(r#"{"types": {}, "endpoints": {}}"#).unwrap();
        assert!(model.types.is_empty());
        assert!(model.endpoints.is_empty());
    }

    #[test]
    fn test_parse_preserves_field_order() {
        let model = parse_model(
            r#"{
                "types": {
                    "User": {
                        "kind": "object",
                        "fields": {
                            "zeta": { "kind": "string" },
                            "alpha": { "kind": "number" }
                        }
                    }
                },
                "endpoints": {}
            }"#,
        )
        .unwrap();

        match model.types.lookup("User").unwrap() {
            TypeNode::Object { fields } => {
                let names: Vec<&String> = fields.keys().collect();
                assert_eq!(names, vec!["zeta", "alpha"]);
            }
            other => panic!("Expected Object, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_endpoint() {
        let model = parse_model(
            r#"{
                "types": {},
                "endpoints": {
                    "getUser": {
                        "method": "GET",
                        "path": ["users", "{id}"],
                        "requestType": { "kind": "void" },
                        "responseType": { "kind": "reference", "name": "User" },
                        "defaultErrorType": { "kind": "null" },
                        "customErrorTypes": {
                            "403": { "kind": "null" }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let descriptor = &model.endpoints["getUser"];
        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(descriptor.route(), "/users/{id}");
        assert_eq!(
            descriptor.response_type,
            TypeNode::Reference {
                name: "User".to_string()
            }
        );
        assert!(descriptor.custom_error_types.contains_key("403"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_model("{not json").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let result = parse_model(
            r#"{"types": {"T": {"kind": "tuple"}}, "endpoints": {}}"#,
        );
        assert!(result.is_err());
    }
}
