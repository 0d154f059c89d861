//! Rust code generation modules.
//!
//! The Rust target renders the same scaffold as the Java one with Rust
//! building blocks: a `Visitor<T>` trait, an enum standing in for the
//! abstract base, and one struct per node type. Output is built as a token
//! stream and formatted with `prettyplease`.

pub mod nodes;
pub mod visitor;

pub use nodes::NodeGenerator;
pub use visitor::VisitorGenerator;

use crate::error::CodegenError;
use astgen_schema::ir::SchemaIr;
use proc_macro2::{Ident, Span};
use quote::quote;

/// Keywords that need the raw identifier form.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Identifiers that cannot be written even in raw form.
const RESERVED: &[&str] = &["_", "crate", "self", "Self", "super"];

/// Generator for a Rust AST source file.
pub struct RustGenerator<'a> {
    ir: &'a SchemaIr,
    package: &'a str,
}

impl<'a> RustGenerator<'a> {
    /// Creates a new Rust generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, package: &'a str) -> Self {
        Self { ir, package }
    }

    /// Generates the complete, formatted source file.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name cannot be a Rust identifier or a
    /// field type does not parse as a Rust type.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let header = format!(
            " `{}::{}` syntax tree: visitor, base enum and node types.",
            self.package, self.ir.base
        );
        let notice = " Generated by astgen; edits are overwritten on the next run.";

        let visitor = VisitorGenerator::new(self.ir).generate()?;
        let nodes = NodeGenerator::new(self.ir).generate()?;

        let tokens = quote! {
            #![doc = #header]
            #![doc = ""]
            #![doc = #notice]

            #visitor
            #nodes
        };

        let file: syn::File = syn::parse2(tokens)
            .map_err(|e| CodegenError::generation(format!("{}: {}", self.ir.base, e)))?;
        Ok(prettyplease::unparse(&file))
    }
}

/// Builds an identifier, switching keywords to their raw form.
pub(crate) fn rust_ident(name: &str) -> Result<Ident, CodegenError> {
    if RESERVED.contains(&name) {
        return Err(CodegenError::generation(format!(
            "'{name}' cannot be used as a Rust identifier"
        )));
    }
    if KEYWORDS.contains(&name) {
        Ok(Ident::new_raw(name, Span::call_site()))
    } else {
        Ok(Ident::new(name, Span::call_site()))
    }
}
