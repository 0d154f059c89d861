//! Built-in schema sets for the `lite` interpreter.

use crate::error::SchemaError;
use crate::types::{AstSchema, SchemaDocument};

/// Package name shared by the built-in presets.
pub const LITE_PACKAGE: &str = "lite";

/// Names accepted by [`preset`].
pub const PRESET_NAMES: &[&str] = &["lite", "lite-full"];

type NodeTable<'a> = &'a [(&'a str, &'a [&'a str])];

const LITE_STMT: NodeTable<'static> = &[
    ("Expression", &["Expr expression"]),
    ("Print", &["Expr expression"]),
];

const LITE_EXPR: NodeTable<'static> = &[
    ("Binary", &["Expr left", "Token operator", "Expr right"]),
    ("Unary", &["Token operator", "Expr right"]),
    ("Grouping", &["Expr expression"]),
    ("Literal", &["Object value"]),
];

const FULL_STMT: NodeTable<'static> = &[
    ("Expression", &["Expr expression"]),
    ("Print", &["Expr expression"]),
    ("Var", &["Token name", "Expr initializer"]),
    ("Block", &["List<Stmt> statements"]),
    (
        "If",
        &["Expr condition", "Stmt thenBranch", "Stmt elseBranch"],
    ),
    ("While", &["Expr condition", "Stmt body"]),
    ("Break", &[]),
    (
        "Function",
        &["Token name", "List<Token> params", "List<Stmt> body"],
    ),
];

const FULL_EXPR: NodeTable<'static> = &[
    ("Binary", &["Expr left", "Token operator", "Expr right"]),
    ("Ternary", &["Expr left", "Expr middle", "Expr right"]),
    ("Assign", &["Token name", "Expr value"]),
    ("Unary", &["Token operator", "Expr right"]),
    ("Variable", &["Token name"]),
    ("Grouping", &["Expr expression"]),
    ("Literal", &["Object value"]),
    (
        "Call",
        &["Expr callee", "Token paren", "List<Expr> arguments"],
    ),
];

/// Builds a schema from a table of textual node declarations.
///
/// # Errors
/// Returns `SchemaError` if any declaration is malformed.
pub fn schema_from_table(base: &str, table: &[(&str, &[&str])]) -> Result<AstSchema, SchemaError> {
    table
        .iter()
        .try_fold(AstSchema::new(base), |schema, &(name, fields)| {
            schema.with_node(name, fields)
        })
}

/// The statement and expression schemas of the core `lite` language.
///
/// # Errors
/// Returns `SchemaError` only if the built-in tables are malformed.
pub fn lite() -> Result<SchemaDocument, SchemaError> {
    let mut doc = SchemaDocument::new(LITE_PACKAGE);
    doc.add_schema(schema_from_table("Stmt", LITE_STMT)?);
    doc.add_schema(schema_from_table("Expr", LITE_EXPR)?);
    Ok(doc)
}

/// The complete `lite` grammar: variables, control flow, blocks and calls.
///
/// # Errors
/// Returns `SchemaError` only if the built-in tables are malformed.
pub fn lite_full() -> Result<SchemaDocument, SchemaError> {
    let mut doc = SchemaDocument::new(LITE_PACKAGE);
    doc.add_schema(schema_from_table("Stmt", FULL_STMT)?);
    doc.add_schema(schema_from_table("Expr", FULL_EXPR)?);
    Ok(doc)
}

/// Looks up a preset by name.
///
/// # Errors
/// Returns `SchemaError::UnknownPreset` for names outside [`PRESET_NAMES`].
pub fn preset(name: &str) -> Result<SchemaDocument, SchemaError> {
    match name {
        "lite" => lite(),
        "lite-full" => lite_full(),
        _ => Err(SchemaError::UnknownPreset {
            name: name.to_string(),
        }),
    }
}
