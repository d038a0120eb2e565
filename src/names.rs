//! Predicate Naming
//!
//! Deterministic mapping from logical names (named types and endpoint
//! facets) to generated predicate identifiers, plus the collision table
//! built before any emission.
//!
//! The scheme is straightforward concatenation: `validate<T>` for a named
//! type, `validate<E>_<facet>` for an endpoint facet. No sanitization is
//! applied, so two distinct logical names can concatenate to the same
//! identifier; that is a fatal collision, caught here rather than discovered
//! as invalid output text.

use indexmap::IndexMap;

use crate::error::{CodegenError, Result};
use crate::model::{ApiModel, EndpointDescriptor};

// =============================================================================
// Facets
// =============================================================================

/// One validated aspect of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Request,
    Response,
    DefaultError,
    /// Error shape for a specific HTTP status code
    CustomError(u16),
}

impl Facet {
    /// Identifier suffix for this facet
    pub fn suffix(&self) -> String {
        match self {
            Facet::Request => "request".to_string(),
            Facet::Response => "response".to_string(),
            Facet::DefaultError => "defaultError".to_string(),
            Facet::CustomError(code) => format!("customError{}", code),
        }
    }
}

// =============================================================================
// Naming Scheme
// =============================================================================

/// Predicate identifier for a named type
pub fn type_predicate(name: &str) -> String {
    format!("validate{}", name)
}

/// Predicate identifier for an endpoint facet
pub fn facet_predicate(endpoint: &str, facet: Facet) -> String {
    format!("validate{}_{}", endpoint, facet.suffix())
}

/// Parse a custom-error status key as written in the source document
pub fn parse_status_code(key: &str, endpoint: &str) -> Result<u16> {
    key.parse::<u16>()
        .map_err(|_| CodegenError::MalformedStatusCode {
            key: key.to_string(),
            endpoint: endpoint.to_string(),
        })
}

/// The facets an endpoint emits, in emission order: request, response,
/// default error, then custom errors in input order
pub fn facets_of(endpoint: &str, descriptor: &EndpointDescriptor) -> Result<Vec<Facet>> {
    let mut facets = vec![Facet::Request, Facet::Response, Facet::DefaultError];
    for key in descriptor.custom_error_types.keys() {
        facets.push(Facet::CustomError(parse_status_code(key, endpoint)?));
    }
    Ok(facets)
}

// =============================================================================
// Collision Table
// =============================================================================

/// Every generated identifier, claimed in emission order before emission.
///
/// Registry entries claim first, then endpoint facets in endpoint order. A
/// second claim on an identifier aborts generation with both origins.
#[derive(Debug, Default)]
pub struct NameTable {
    identifiers: IndexMap<String, String>,
}

impl NameTable {
    /// Build the table for a whole model
    pub fn build(model: &ApiModel) -> Result<Self> {
        let mut table = Self::default();

        for (name, _) in model.types.iter() {
            table.claim(type_predicate(name), format!("type \"{}\"", name))?;
        }

        for (endpoint, descriptor) in &model.endpoints {
            for facet in facets_of(endpoint, descriptor)? {
                table.claim(
                    facet_predicate(endpoint, facet),
                    format!("endpoint \"{}\" {}", endpoint, facet.suffix()),
                )?;
            }
        }

        Ok(table)
    }

    fn claim(&mut self, identifier: String, origin: String) -> Result<()> {
        if let Some(first) = self.identifiers.get(&identifier) {
            return Err(CodegenError::NameCollision {
                identifier,
                first: first.clone(),
                second: origin,
            });
        }
        self.identifiers.insert(identifier, origin);
        Ok(())
    }

    /// Iterate identifiers in emission order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.identifiers.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HttpMethod, TypeNode};
    use indexmap::IndexMap;

    #[test]
    fn test_type_predicate_concatenation() {
        assert_eq!(type_predicate("Tree"), "validateTree");
        // No casing is applied
        assert_eq!(type_predicate("user"), "validateuser");
    }

    #[test]
    fn test_facet_predicate_suffixes() {
        assert_eq!(
            facet_predicate("getUser", Facet::Request),
            "validategetUser_request"
        );
        assert_eq!(
            facet_predicate("getUser", Facet::Response),
            "validategetUser_response"
        );
        assert_eq!(
            facet_predicate("getUser", Facet::DefaultError),
            "validategetUser_defaultError"
        );
        assert_eq!(
            facet_predicate("getUser", Facet::CustomError(403)),
            "validategetUser_customError403"
        );
    }

    #[test]
    fn test_parse_status_code() {
        assert_eq!(parse_status_code("404", "getUser").unwrap(), 404);

        let err = parse_status_code("4xx", "getUser").unwrap_err();
        match err {
            CodegenError::MalformedStatusCode { key, endpoint } => {
                assert_eq!(key, "4xx");
                assert_eq!(endpoint, "getUser");
            }
            other => panic!("Expected MalformedStatusCode, got {:?}", other),
        }
    }

    #[test]
    fn test_collision_between_type_and_facet() {
        let mut model = ApiModel::default();
        // The type "getUser_request" and the request facet of endpoint
        // "getUser" concatenate to the same identifier.
        model.types.insert("getUser_request", TypeNode::String);
        model.endpoints.insert(
            "getUser".to_string(),
            crate::model::EndpointDescriptor {
                method: HttpMethod::Get,
                path: vec!["users".to_string()],
                request_type: TypeNode::Void,
                response_type: TypeNode::Void,
                default_error_type: TypeNode::Void,
                custom_error_types: IndexMap::new(),
            },
        );

        let err = NameTable::build(&model).unwrap_err();
        match err {
            CodegenError::NameCollision {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "validategetUser_request");
                assert_eq!(first, "type \"getUser_request\"");
                assert_eq!(second, "endpoint \"getUser\" request");
            }
            other => panic!("Expected NameCollision, got {:?}", other),
        }
    }

    #[test]
    fn test_table_order_matches_emission_order() {
        let mut model = ApiModel::default();
        model.types.insert("B", TypeNode::Null);
        model.types.insert("A", TypeNode::Null);
        model.endpoints.insert(
            "ping".to_string(),
            crate::model::EndpointDescriptor {
                method: HttpMethod::Get,
                path: vec!["ping".to_string()],
                request_type: TypeNode::Void,
                response_type: TypeNode::Void,
                default_error_type: TypeNode::Void,
                custom_error_types: IndexMap::new(),
            },
        );

        let table = NameTable::build(&model).unwrap();
        let identifiers: Vec<&str> = table.identifiers().collect();
        assert_eq!(
            identifiers,
            vec![
                "validateB",
                "validateA",
                "validateping_request",
                "validateping_response",
                "validateping_defaultError",
            ]
        );
    }
}
