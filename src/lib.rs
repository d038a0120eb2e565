//! Guardgen
//!
//! Compiles a language-agnostic API type model into TypeScript runtime
//! validators: one boolean-returning predicate per named type and per
//! endpoint facet (request, response, default error, per-status custom
//! errors).
//!
//! ## Features
//!
//! - **Deterministic Output**: declaration order drives emission order, and
//!   identical models produce byte-identical documents
//! - **Cycle-Safe References**: named references compile to predicate calls,
//!   never inline expansions, so self-referential types emit finite code
//! - **Collision Detection**: every generated identifier is claimed before
//!   emission; two logical names mapping to one identifier abort generation
//! - **Fatal-on-Error**: unresolved references, malformed status codes, and
//!   empty unions fail the whole model with no partial output
//!
//! ## Architecture
//!
//! ```text
//! loader (JSON document)
//!   └─> ApiModel (ordered registry + ordered endpoints)
//!         └─> NameTable (identifier collision check)
//!               └─> typescript compiler (one predicate per type / facet)
//!                     └─> emitter (ordered assembly + fingerprint)
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod lint;
pub mod loader;
pub mod model;
pub mod names;

pub use codegen::{generate, GeneratedOutput};
pub use config::{DiagnosticLevel, GeneratorConfig, LintConfig, OutputConfig};
pub use error::{CodegenError, Result};
pub use fingerprint::Fingerprint;
pub use lint::{lint_model, LintFinding, LintReport};
pub use loader::{load_model, parse_model};
pub use model::{ApiModel, EndpointDescriptor, HttpMethod, TypeNode, TypeRegistry};
pub use names::{facet_predicate, type_predicate, Facet, NameTable};
