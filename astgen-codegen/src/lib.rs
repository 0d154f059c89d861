//! # astgen Codegen
//!
//! Code generation from AST schemas.
//!
//! This crate provides:
//! - Java generation (abstract base class, nested visitor, node classes)
//! - Rust generation (visitor trait, base enum, node structs)
//! - Atomic writing of one source file per base type

pub mod emitter;
pub mod error;
pub mod generator;
pub mod java;
pub mod rust;

pub use emitter::{Emission, Emitter, write_atomic};
pub use error::CodegenError;
pub use generator::{Generator, Target};

use astgen_schema::presets::{LITE_PACKAGE, schema_from_table};
use astgen_schema::{SchemaIr, parse_document};
use std::path::{Path, PathBuf};

/// Emits one Java source file for `base` into `dir`.
///
/// `nodes` lists each node type with its textual `"<type> <name>"` field
/// declarations, in emission order. The file is `<dir>/<base>.java` in the
/// `lite` package and replaces any previous contents.
///
/// # Errors
/// Returns `CodegenError` if a declaration is malformed, the schema is
/// invalid, or the file cannot be written.
pub fn emit(base: &str, nodes: &[(&str, &[&str])], dir: &Path) -> Result<PathBuf, CodegenError> {
    let schema = schema_from_table(base, nodes)?;
    Emitter::new(Target::Java, LITE_PACKAGE).emit(&schema, dir)
}

/// Generates sources from a schema document string.
///
/// # Arguments
/// * `xml` - Schema document content
/// * `target` - Output language
///
/// # Returns
/// Pairs of output file name and generated source, in document order.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_xml(xml: &str, target: Target) -> Result<Vec<(String, String)>, CodegenError> {
    let doc = parse_document(xml)?;
    let generator = Generator::new(target, doc.package.as_str());

    doc.schemas
        .iter()
        .map(|schema| -> Result<(String, String), CodegenError> {
            let ir = SchemaIr::from_schema(schema)?;
            Ok((generator.file_name(&ir.base), generator.generate(&ir)?))
        })
        .collect()
}

/// Generates sources from a schema document file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &Path,
    target: Target,
) -> Result<Vec<(String, String)>, CodegenError> {
    let xml = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
    generate_from_xml(&xml, target)
}
