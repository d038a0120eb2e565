//! Model Linting
//!
//! Pre-compilation hygiene pass over an ApiModel. Lint errors are structural
//! problems the compiler would otherwise surface mid-generation; warnings
//! flag model smells that still generate.
//!
//! ## Lints
//! 1. **empty-union**: a union with no members can never validate (error)
//! 2. **unreferenced-type**: a registry entry no reference points at (warning)
//! 3. **empty-path**: an endpoint with no path segments (warning)

use std::collections::HashSet;

use crate::config::{DiagnosticLevel, LintConfig};
use crate::error::{CodegenError, Result};
use crate::model::{ApiModel, EndpointDescriptor, TypeNode};

/// Result of linting a model
#[derive(Debug, Default)]
pub struct LintReport {
    pub errors: Vec<LintFinding>,
    pub warnings: Vec<LintFinding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Promote lint errors to a fatal generation error
    pub fn into_result(self) -> Result<Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            let summary = self
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Err(CodegenError::Lint(summary))
        }
    }
}

/// One lint finding
#[derive(Debug, Clone)]
pub struct LintFinding {
    pub code: &'static str,
    pub message: String,
    pub path: String,
}

/// Lint a model against the configured levels
pub fn lint_model(model: &ApiModel, config: &LintConfig) -> LintReport {
    let mut report = LintReport::default();

    // empty-union is always an error: the compiler rejects it too
    for (name, node) in model.types.iter() {
        check_unions(node, &format!("types.{}", name), &mut report);
    }
    for (endpoint, descriptor) in &model.endpoints {
        for (facet, node) in facet_nodes(descriptor) {
            check_unions(
                node,
                &format!("endpoints.{}.{}", endpoint, facet),
                &mut report,
            );
        }
    }

    if config.unreferenced_type != DiagnosticLevel::Ignore {
        let referenced = referenced_names(model);
        for (name, _) in model.types.iter() {
            if !referenced.contains(name) {
                push(
                    &mut report,
                    config.unreferenced_type,
                    LintFinding {
                        code: "unreferenced-type",
                        message: format!("type \"{}\" is never referenced", name),
                        path: format!("types.{}", name),
                    },
                );
            }
        }
    }

    if config.empty_path != DiagnosticLevel::Ignore {
        for (endpoint, descriptor) in &model.endpoints {
            if descriptor.path.is_empty() {
                push(
                    &mut report,
                    config.empty_path,
                    LintFinding {
                        code: "empty-path",
                        message: format!("endpoint \"{}\" has no path segments", endpoint),
                        path: format!("endpoints.{}.path", endpoint),
                    },
                );
            }
        }
    }

    report
}

fn push(report: &mut LintReport, level: DiagnosticLevel, finding: LintFinding) {
    match level {
        DiagnosticLevel::Error => report.errors.push(finding),
        DiagnosticLevel::Warn => report.warnings.push(finding),
        DiagnosticLevel::Ignore => {}
    }
}

/// Every facet node of an endpoint with its display label
fn facet_nodes(descriptor: &EndpointDescriptor) -> Vec<(String, &TypeNode)> {
    let mut nodes = vec![
        ("requestType".to_string(), &descriptor.request_type),
        ("responseType".to_string(), &descriptor.response_type),
        ("defaultErrorType".to_string(), &descriptor.default_error_type),
    ];
    for (key, node) in &descriptor.custom_error_types {
        nodes.push((format!("customErrorTypes.{}", key), node));
    }
    nodes
}

fn check_unions(node: &TypeNode, path: &str, report: &mut LintReport) {
    match node {
        TypeNode::Union { members } => {
            if members.is_empty() {
                report.errors.push(LintFinding {
                    code: "empty-union",
                    message: "union has no members and can never validate".to_string(),
                    path: path.to_string(),
                });
            }
            for member in members {
                check_unions(member, path, report);
            }
        }
        TypeNode::Object { fields } => {
            for (field, field_type) in fields {
                check_unions(field_type, &format!("{}.{}", path, field), report);
            }
        }
        TypeNode::Array { element } => check_unions(element, path, report),
        TypeNode::Optional { inner } => check_unions(inner, path, report),
        _ => {}
    }
}

/// Names mentioned by any `Reference` node reachable from the model
fn referenced_names(model: &ApiModel) -> HashSet<String> {
    let mut names = HashSet::new();
    for (_, node) in model.types.iter() {
        collect_references(node, &mut names);
    }
    for descriptor in model.endpoints.values() {
        for (_, node) in facet_nodes(descriptor) {
            collect_references(node, &mut names);
        }
    }
    names
}

fn collect_references(node: &TypeNode, names: &mut HashSet<String>) {
    match node {
        TypeNode::Reference { name } => {
            names.insert(name.clone());
        }
        TypeNode::Object { fields } => {
            for field_type in fields.values() {
                collect_references(field_type, names);
            }
        }
        TypeNode::Array { element } => collect_references(element, names),
        TypeNode::Optional { inner } => collect_references(inner, names),
        TypeNode::Union { members } => {
            for member in members {
                collect_references(member, names);
            }
        }
        _ => {}
    }
}
