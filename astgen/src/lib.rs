//! # astgen
//!
//! Visitor-pattern AST source generator for tree-walking interpreters.
//!
//! Given a base type and an ordered list of node types with typed fields,
//! astgen writes one source file holding the abstract base, a `Visitor<T>`
//! capability with one `visit<Node><Base>` method per node type, and an
//! immutable node type per entry whose `accept` method dispatches to it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use astgen::prelude::*;
//!
//! let schema = AstSchema::new("Expr")
//!     .with_node("Binary", &["Expr left", "Token operator", "Expr right"])?
//!     .with_node("Literal", &["Object value"])?;
//!
//! let path = Emitter::new(Target::Java, "lite").emit(&schema, "src/lite".as_ref())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, validation, XML documents and presets
//! - [`codegen`] - Java and Rust generation and atomic file emission
//! - [`cli`] - The `astgen` command line

pub mod cli;
pub mod prelude;

/// Schema model, validation and parsing.
pub mod schema {
    pub use astgen_schema::*;
}

/// Source generation from schemas.
pub mod codegen {
    pub use astgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use astgen_codegen::{CodegenError, Emitter, Generator, Target, emit};
pub use astgen_schema::{AstSchema, FieldDecl, SchemaDocument, SchemaIr};
