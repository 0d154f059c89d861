//! Command-line interface: schema document or preset -> one source file per base.

use anyhow::{Context, bail};
use astgen_codegen::{CodegenError, Emission, Emitter, Target};
use astgen_schema::{SchemaDocument, parse_document_file, presets};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Generate visitor-pattern AST sources (base type, visitor, node types) from schemas.
#[derive(Parser, Debug)]
#[command(name = "astgen", version)]
pub struct Cli {
    /// Existing directory the generated sources are written to
    pub output_dir: PathBuf,

    /// XML schema document used instead of the built-in preset
    #[arg(long, short = 's', conflicts_with = "preset")]
    pub schema: Option<PathBuf>,

    /// Built-in schema set
    #[arg(long, value_enum, default_value_t = Preset::Lite)]
    pub preset: Preset,

    /// Output language: java, or rust (alias rs)
    #[arg(long, short = 't', default_value = "java", value_parser = parse_target)]
    pub target: Target,

    /// Package written into each generated header (defaults to the document's)
    #[arg(long, short = 'p')]
    pub package: Option<String>,

    /// Log more detail (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Built-in schema sets.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Statements `Expression`, `Print`; expressions `Binary`, `Unary`, `Grouping`, `Literal`
    Lite,
    /// The complete grammar with variables, control flow, functions and calls
    LiteFull,
}

fn parse_target(value: &str) -> Result<Target, String> {
    value.parse().map_err(|e: CodegenError| e.to_string())
}

impl Preset {
    /// Returns the preset name understood by [`presets::preset`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lite => "lite",
            Self::LiteFull => "lite-full",
        }
    }
}

impl Cli {
    /// Returns the tracing filter directive implied by `--verbose`.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Loads the schema document named on the command line.
    ///
    /// # Errors
    /// Fails if the document cannot be read or parsed, or if the built-in
    /// presets are combined with the Rust target.
    pub fn load_document(&self) -> anyhow::Result<SchemaDocument> {
        let mut doc = match &self.schema {
            Some(path) => parse_document_file(path)
                .with_context(|| format!("failed to load schema {}", path.display()))?,
            None => {
                if self.target == Target::Rust {
                    bail!(
                        "the built-in presets declare Java field types; \
                         pass --schema with Rust field types for the rust target"
                    );
                }
                presets::preset(self.preset.name())?
            }
        };

        if let Some(package) = &self.package {
            doc.package = package.clone();
        }
        Ok(doc)
    }

    /// Emits every schema of the selected document.
    ///
    /// Each schema is attempted even if an earlier one failed; inspect the
    /// returned emissions for per-file outcomes.
    ///
    /// # Errors
    /// Fails only if the schema document cannot be loaded.
    pub fn run(&self) -> anyhow::Result<Vec<Emission>> {
        let doc = self.load_document()?;
        tracing::debug!(
            "Emitting {} schema(s) as {} into {}",
            doc.schemas.len(),
            self.target,
            self.output_dir.display()
        );

        let emitter = Emitter::new(self.target, doc.package.as_str());
        Ok(emitter.emit_document(&doc, &self.output_dir))
    }
}
