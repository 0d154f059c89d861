//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use astgen::prelude::*;
//! ```

// Schema types
pub use astgen_schema::{
    AstSchema, FieldDecl, NodeDef, ParseError, ResolvedNode, SchemaDocument, SchemaError,
    SchemaIr,
};

// Generation types
pub use astgen_codegen::{CodegenError, Emission, Emitter, Generator, Target};
