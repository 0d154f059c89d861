//! # astgen Schema
//!
//! AST schema model and parser.
//!
//! This crate provides:
//! - Structured field declarations validated at construction
//! - Schema validation (identifiers, duplicate nodes and fields)
//! - Intermediate representation carrying the visitor method table
//! - XML schema document parsing
//! - Built-in `lite` presets

pub mod error;
pub mod ir;
pub mod parser;
pub mod presets;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{ResolvedNode, SchemaIr};
pub use parser::{parse_document, parse_document_file};
pub use presets::preset;
pub use types::{AstSchema, FieldDecl, NodeDef, SchemaDocument};
