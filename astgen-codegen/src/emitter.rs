//! Writing generated sources to disk.
//!
//! Each file is staged in a temporary file next to its destination and
//! renamed over it only once the full contents are written, so a failed
//! emission never leaves a truncated source behind.

use crate::error::CodegenError;
use crate::generator::{Generator, Target};
use astgen_schema::{AstSchema, SchemaDocument, SchemaIr};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of emitting one schema of a document.
#[derive(Debug)]
pub struct Emission {
    /// Base type of the schema.
    pub base: String,
    /// Written path, or the failure for this schema alone.
    pub result: Result<PathBuf, CodegenError>,
}

/// Renders schemas and writes one source file per base type.
#[derive(Debug, Clone)]
pub struct Emitter {
    generator: Generator,
}

impl Emitter {
    /// Creates an emitter for `target`, writing `package` into each header.
    #[must_use]
    pub fn new(target: Target, package: impl Into<String>) -> Self {
        Self {
            generator: Generator::new(target, package),
        }
    }

    /// Returns the underlying generator.
    #[must_use]
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Returns the path a base type is written to under `dir`.
    #[must_use]
    pub fn output_path(&self, dir: &Path, base: &str) -> PathBuf {
        dir.join(self.generator.file_name(base))
    }

    /// Validates, renders and writes one schema.
    ///
    /// Any previous file at the destination is replaced.
    ///
    /// # Errors
    /// Returns `CodegenError` if the schema is invalid, the target cannot
    /// express it, or the file cannot be written.
    pub fn emit(&self, schema: &AstSchema, dir: &Path) -> Result<PathBuf, CodegenError> {
        let ir = SchemaIr::from_schema(schema)?;
        self.emit_ir(&ir, dir)
    }

    /// Renders and writes an already resolved schema.
    ///
    /// # Errors
    /// Returns `CodegenError` if rendering or writing fails.
    pub fn emit_ir(&self, ir: &SchemaIr, dir: &Path) -> Result<PathBuf, CodegenError> {
        let source = self.generator.generate(ir)?;
        let path = self.output_path(dir, &ir.base);
        write_atomic(&path, &source)?;
        tracing::info!("Wrote {} ({} bytes)", path.display(), source.len());
        Ok(path)
    }

    /// Emits every schema of a document.
    ///
    /// Schemas are independent: a failure is recorded for its base and the
    /// remaining schemas are still attempted.
    #[must_use]
    pub fn emit_document(&self, doc: &SchemaDocument, dir: &Path) -> Vec<Emission> {
        doc.schemas
            .iter()
            .map(|schema| {
                let result = self.emit(schema, dir);
                if let Err(e) = &result {
                    tracing::error!("Failed to emit {}: {}", schema.base, e);
                }
                Emission {
                    base: schema.base.clone(),
                    result,
                }
            })
            .collect()
    }
}

/// Writes `contents` to `path`, replacing it atomically.
///
/// The data is staged in a temporary file in the same directory and
/// renamed onto `path` after it is fully written and flushed. On failure
/// the temporary file is removed and `path` is left untouched.
///
/// # Errors
/// Returns `CodegenError::Io` carrying `path` if any step fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |source: std::io::Error| CodegenError::io(path, source);

    let mut staged = staging_builder().tempfile_in(dir).map_err(io_err)?;
    staged.write_all(contents.as_bytes()).map_err(io_err)?;
    staged.flush().map_err(io_err)?;
    staged.as_file().sync_all().map_err(io_err)?;
    staged.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}

/// Temporary file settings for staged sources.
fn staging_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".astgen-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    builder
}
