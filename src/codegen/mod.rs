//! Code Generation
//!
//! Assembles per-type and per-endpoint-facet predicates, in declaration
//! order, into one emitted document.
//!
//! Architecture:
//! - NameTable: every identifier is claimed before any emission
//! - typescript: per-node expression compiler and predicate emitters
//! - generate(): ordered assembly; the only writer of the output document
//!
//! Generation is fatal-on-error: an unresolved reference, a name collision,
//! a malformed status code, or an empty union aborts the whole model with no
//! partial output.

pub mod typescript;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::model::ApiModel;
use crate::names::{self, Facet, NameTable};

// =============================================================================
// Generated Output
// =============================================================================

/// Output from validator generation
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// The emitted TypeScript document
    pub code: String,
    /// Number of predicate functions emitted
    pub predicate_count: usize,
    /// SHA-256 fingerprint of the document
    pub fingerprint: Fingerprint,
}

/// File banner for generated output
const HEADER: &str = "\
// Generated by guardgen - DO NOT EDIT
//
// Runtime validators for the API type model. The type declarations named
// by the `value is T` guards are emitted by the companion type generator.
";

// =============================================================================
// Public API
// =============================================================================

/// Compile a whole model into one validator document.
///
/// Emission order: named-type predicates in registry declaration order, then
/// endpoint-facet predicates in endpoint declaration order (request,
/// response, default error, custom errors in input order), separated by a
/// single blank line.
pub fn generate(model: &ApiModel, config: &OutputConfig) -> Result<GeneratedOutput> {
    let _names = NameTable::build(model)?;

    let mut predicates = Vec::new();

    for (name, node) in model.types.iter() {
        predicates.push(typescript::emit_type_predicate(name, node, model)?);
    }

    for (endpoint, descriptor) in &model.endpoints {
        predicates.push(typescript::emit_facet_predicate(
            endpoint,
            Facet::Request,
            &descriptor.request_type,
            model,
        )?);
        predicates.push(typescript::emit_facet_predicate(
            endpoint,
            Facet::Response,
            &descriptor.response_type,
            model,
        )?);
        predicates.push(typescript::emit_facet_predicate(
            endpoint,
            Facet::DefaultError,
            &descriptor.default_error_type,
            model,
        )?);
        for (key, node) in &descriptor.custom_error_types {
            let code = names::parse_status_code(key, endpoint)?;
            predicates.push(typescript::emit_facet_predicate(
                endpoint,
                Facet::CustomError(code),
                node,
                model,
            )?);
        }
    }

    let mut code = String::new();
    if config.header {
        code.push_str(HEADER);
    }
    if !predicates.is_empty() {
        if config.header {
            code.push('\n');
        }
        code.push_str(&predicates.join("\n\n"));
        code.push('\n');
    }

    let fingerprint = Fingerprint::from_text(&code);

    Ok(GeneratedOutput {
        code,
        predicate_count: predicates.len(),
        fingerprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EndpointDescriptor, HttpMethod, TypeNode};
    use indexmap::IndexMap;

    fn bare_output() -> OutputConfig {
        OutputConfig {
            header: false,
            path: None,
        }
    }

    #[test]
    fn test_empty_model_emits_nothing() {
        let output = generate(&ApiModel::default(), &bare_output()).unwrap();
        assert_eq!(output.code, "");
        assert_eq!(output.predicate_count, 0);
    }

    #[test]
    fn test_predicates_separated_by_one_blank_line() {
        let mut model = ApiModel::default();
        model.types.insert("A", TypeNode::Null);
        model.types.insert("B", TypeNode::Boolean);

        let output = generate(&model, &bare_output()).unwrap();
        assert_eq!(
            output.code,
            "export function validateA(value: unknown): value is A {\n  \
             return value === null;\n}\n\n\
             export function validateB(value: unknown): value is B {\n  \
             return typeof value === \"boolean\";\n}\n"
        );
        assert_eq!(output.predicate_count, 2);
    }

    #[test]
    fn test_header_precedes_predicates() {
        let mut model = ApiModel::default();
        model.types.insert("A", TypeNode::Null);

        let output = generate(
            &model,
            &OutputConfig {
                header: true,
                path: None,
            },
        )
        .unwrap();
        assert!(output.code.starts_with("// Generated by guardgen - DO NOT EDIT\n"));
        assert!(output.code.contains("\n\nexport function validateA"));
    }

    #[test]
    fn test_no_output_on_error() {
        let mut model = ApiModel::default();
        model.endpoints.insert(
            "getUser".to_string(),
            EndpointDescriptor {
                method: HttpMethod::Get,
                path: vec!["users".to_string()],
                request_type: TypeNode::Void,
                response_type: TypeNode::Reference {
                    name: "Missing".to_string(),
                },
                default_error_type: TypeNode::Void,
                custom_error_types: IndexMap::new(),
            },
        );

        assert!(generate(&model, &bare_output()).is_err());
    }
}
