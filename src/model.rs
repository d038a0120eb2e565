//! API type model
//!
//! The language-agnostic IR the compiler consumes: primitive and constant
//! kinds, composite kinds, and named references into the registry. Pure data
//! with ordered traversal; the compiler borrows it read-only.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One node of the type IR
///
/// Object field order and union member order are semantically meaningful:
/// they fix the left-to-right order of the generated checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeNode {
    /// The absent value (`undefined` in the target language)
    Void,
    Null,
    Boolean,
    String,
    Number,
    /// Exactly the literal boolean `value`
    BooleanConstant { value: bool },
    /// Exactly the literal string `value`
    StringConstant { value: String },
    /// Exactly the literal integer `value`
    IntegerConstant { value: i64 },
    Object { fields: IndexMap<String, TypeNode> },
    Array { element: Box<TypeNode> },
    /// Absent, or conforming to `inner`
    Optional { inner: Box<TypeNode> },
    /// Disjunction of `members` in declared order; must be non-empty
    Union { members: Vec<TypeNode> },
    /// Indirection into the registry; never inlined during compilation
    Reference { name: String },
}

/// Ordered mapping from type name to its definition
///
/// Declaration order drives emission order. Direct and mutual self-reference
/// are supported: a definition may (transitively) contain a `Reference` to
/// its own name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeNode>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type definition, returning the previous definition if the
    /// name was already taken
    pub fn insert(&mut self, name: impl Into<String>, node: TypeNode) -> Option<TypeNode> {
        self.types.insert(name.into(), node)
    }

    /// Look up a definition by name
    pub fn lookup(&self, name: &str) -> Option<&TypeNode> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeNode)> + '_ {
        self.types.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        };
        write!(f, "{}", s)
    }
}

/// One API operation's validated shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub method: HttpMethod,
    /// Path segments, in order (e.g. `["users", "{id}"]`)
    pub path: Vec<String>,
    pub request_type: TypeNode,
    pub response_type: TypeNode,
    pub default_error_type: TypeNode,
    /// Per-status error shapes, keyed by the status code as written in the
    /// source document. Input order is preserved into emission order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub custom_error_types: IndexMap<String, TypeNode>,
}

impl EndpointDescriptor {
    /// Render the path as a route string (e.g. `/users/{id}`)
    pub fn route(&self) -> String {
        format!("/{}", self.path.join("/"))
    }
}

/// The full model: ordered endpoints plus the type registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiModel {
    #[serde(default)]
    pub types: TypeRegistry,
    #[serde(default)]
    pub endpoints: IndexMap<String, EndpointDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let mut registry = TypeRegistry::new();
        registry.insert("User", TypeNode::String);
        assert!(registry.contains("User"));
        assert_eq!(registry.lookup("User"), Some(&TypeNode::String));
        assert_eq!(registry.lookup("Missing"), None);
    }

    #[test]
    fn test_registry_preserves_declaration_order() {
        let mut registry = TypeRegistry::new();
        registry.insert("Zebra", TypeNode::Null);
        registry.insert("Apple", TypeNode::Boolean);
        registry.insert("Mango", TypeNode::Number);

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_route_rendering() {
        let descriptor = EndpointDescriptor {
            method: HttpMethod::Get,
            path: vec!["users".to_string(), "{id}".to_string()],
            request_type: TypeNode::Void,
            response_type: TypeNode::Void,
            default_error_type: TypeNode::Void,
            custom_error_types: IndexMap::new(),
        };
        assert_eq!(descriptor.route(), "/users/{id}");
        assert_eq!(descriptor.method.to_string(), "GET");
    }
}
