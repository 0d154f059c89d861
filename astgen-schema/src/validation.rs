//! Schema validation utilities.
//!
//! This module provides the identifier checks applied to field declarations
//! at construction time and the structural checks run before a schema is
//! resolved for code generation.

use crate::error::SchemaError;
use crate::types::AstSchema;
use std::collections::HashSet;

/// Punctuation allowed in a field type besides identifier characters.
const TYPE_PUNCTUATION: &[char] = &['<', '>', ',', '.', '[', ']', ':'];

/// Name of the generated visitor capability.
pub const VISITOR_NAME: &str = "Visitor";

/// Returns true if `s` is a plain identifier (`[A-Za-z_][A-Za-z0-9_]*`).
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if `s` is usable as a field type.
///
/// Accepts identifiers with generic and path punctuation, such as
/// `List<Stmt>` or `std::rc::Rc<Expr>`, but never whitespace.
#[must_use]
pub fn is_type_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || TYPE_PUNCTUATION.contains(&c))
}

/// Validates an identifier used as `kind`.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if `value` is not identifier-safe.
pub fn validate_identifier(kind: &'static str, value: &str) -> Result<(), SchemaError> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(SchemaError::invalid_identifier(kind, value))
    }
}

/// Validates a field type token.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if `value` is not a type token.
pub fn validate_type(value: &str) -> Result<(), SchemaError> {
    if is_type_token(value) {
        Ok(())
    } else {
        Err(SchemaError::invalid_identifier("field type", value))
    }
}

/// Validates a schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if the base or a node name is not an identifier,
/// the base or a node type shadows a generated name, a node type is
/// declared twice, or a node declares a field twice.
pub fn validate_schema(schema: &AstSchema) -> Result<(), SchemaError> {
    validate_identifier("base type", &schema.base)?;
    if schema.base == VISITOR_NAME {
        return Err(SchemaError::ReservedName {
            base: schema.base.clone(),
            name: schema.base.clone(),
        });
    }

    let mut seen_nodes = HashSet::new();
    for node in &schema.nodes {
        validate_identifier("node type", &node.name)?;
        if node.name == schema.base || node.name == VISITOR_NAME {
            return Err(SchemaError::ReservedName {
                base: schema.base.clone(),
                name: node.name.clone(),
            });
        }
        if !seen_nodes.insert(node.name.as_str()) {
            return Err(SchemaError::DuplicateNodeType {
                base: schema.base.clone(),
                name: node.name.clone(),
            });
        }

        let mut seen_fields = HashSet::new();
        for field in &node.fields {
            if !seen_fields.insert(field.name()) {
                return Err(SchemaError::DuplicateField {
                    node_type: node.name.clone(),
                    name: field.name().to_string(),
                });
            }
        }
    }

    Ok(())
}
