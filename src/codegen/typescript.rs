//! TypeScript Validator Emitter
//!
//! Compiles a TypeNode into a boolean expression over a value accessor, and
//! wraps compiled expressions into exported predicate functions.
//!
//! Key constraints:
//! - References compile to calls, never to inline expansions, so cyclic type
//!   graphs emit finite code.
//! - Field and union-member order is preserved verbatim; the emitted check
//!   order is an observable contract of the output.

use crate::error::{CodegenError, Result};
use crate::model::{ApiModel, TypeNode};
use crate::names::{self, Facet};

// =============================================================================
// Expression Compilation
// =============================================================================

/// Compile a node into a boolean expression testing `accessor`.
///
/// `depth` counts enclosing array quantifiers and picks the element variable
/// (`item`, `item2`, ...). `origin` names the declaration being compiled,
/// for error reporting.
pub(crate) fn compile_expr(
    node: &TypeNode,
    accessor: &str,
    depth: usize,
    model: &ApiModel,
    origin: &str,
) -> Result<String> {
    match node {
        TypeNode::Void => Ok(format!("{} === undefined", accessor)),
        TypeNode::Null => Ok(format!("{} === null", accessor)),
        TypeNode::Boolean => Ok(format!("typeof {} === \"boolean\"", accessor)),
        TypeNode::String => Ok(format!("typeof {} === \"string\"", accessor)),
        TypeNode::Number => Ok(format!("typeof {} === \"number\"", accessor)),
        TypeNode::BooleanConstant { value } => Ok(format!("{} === {}", accessor, value)),
        TypeNode::StringConstant { value } => {
            Ok(format!("{} === {}", accessor, string_literal(value)))
        }
        TypeNode::IntegerConstant { value } => Ok(format!("{} === {}", accessor, value)),
        TypeNode::Object { fields } => {
            let mut parts = vec![
                format!("{} !== null", accessor),
                format!("typeof {} === \"object\"", accessor),
            ];
            for (field, field_type) in fields {
                let field_accessor = format!("{}[{}]", accessor, string_literal(field));
                parts.push(compile_expr(field_type, &field_accessor, depth, model, origin)?);
            }
            Ok(format!("({})", parts.join(" && ")))
        }
        TypeNode::Array { element } => {
            let item = element_var(depth);
            let inner = compile_expr(element, &item, depth + 1, model, origin)?;
            Ok(format!(
                "(Array.isArray({}) && {}.every(({}) => {}))",
                accessor, accessor, item, inner
            ))
        }
        TypeNode::Optional { inner } => {
            let rest = compile_expr(inner, accessor, depth, model, origin)?;
            Ok(format!("({} === undefined || {})", accessor, rest))
        }
        TypeNode::Union { members } => {
            if members.is_empty() {
                return Err(CodegenError::EmptyUnion {
                    origin: origin.to_string(),
                });
            }
            let parts = members
                .iter()
                .map(|member| compile_expr(member, accessor, depth, model, origin))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("({})", parts.join(" || ")))
        }
        TypeNode::Reference { name } => {
            if model.types.lookup(name).is_none() {
                return Err(CodegenError::UnresolvedReference {
                    name: name.clone(),
                    origin: origin.to_string(),
                });
            }
            Ok(format!("{}({})", names::type_predicate(name), accessor))
        }
    }
}

/// Element variable for an array quantifier at the given nesting depth
fn element_var(depth: usize) -> String {
    if depth == 0 {
        "item".to_string()
    } else {
        format!("item{}", depth + 1)
    }
}

/// Render a JS string literal with escaping
fn string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{:?}", s))
}

// =============================================================================
// Predicate Emission
// =============================================================================

/// Emit the predicate for a named type.
///
/// A true return narrows the parameter to the named type; the matching type
/// declaration comes from the companion type generator.
pub(crate) fn emit_type_predicate(
    name: &str,
    node: &TypeNode,
    model: &ApiModel,
) -> Result<String> {
    let origin = format!("type \"{}\"", name);
    let body = compile_expr(node, "value", 0, model, &origin)?;
    Ok(format!(
        "export function {}(value: unknown): value is {} {{\n  return {};\n}}",
        names::type_predicate(name),
        name,
        body
    ))
}

/// Emit the predicate for one endpoint facet.
///
/// Facet shapes are anonymous, so the signature returns plain `boolean`; a
/// true return still means the value conforms to the facet's declared shape.
pub(crate) fn emit_facet_predicate(
    endpoint: &str,
    facet: Facet,
    node: &TypeNode,
    model: &ApiModel,
) -> Result<String> {
    let origin = format!("endpoint \"{}\" {}", endpoint, facet.suffix());
    let body = compile_expr(node, "value", 0, model, &origin)?;
    Ok(format!(
        "export function {}(value: unknown): boolean {{\n  return {};\n}}",
        names::facet_predicate(endpoint, facet),
        body
    ))
}
