//! Schema model definitions.
//!
//! A schema describes one AST family: a base type plus its node types, each
//! with an ordered list of typed fields. Declaration order is preserved
//! everywhere and drives emission order.

use crate::error::SchemaError;
use crate::validation::{validate_identifier, validate_type};
use std::fmt;

/// A single typed field of a node type.
///
/// Both components are validated on construction, so a `FieldDecl` always
/// renders as a well-formed `<type> <name>` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    ty: String,
    name: String,
}

impl FieldDecl {
    /// Creates a field declaration from its two components.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidIdentifier` if the type is not a type
    /// token or the name is not an identifier.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Result<Self, SchemaError> {
        let ty = ty.into();
        let name = name.into();
        validate_type(&ty)?;
        validate_identifier("field name", &name)?;
        Ok(Self { ty, name })
    }

    /// Parses the textual `"<type> <name>"` form.
    ///
    /// The text before the first space is the type and the remainder is the
    /// name. `node_type` is only used for error reporting.
    ///
    /// # Errors
    /// Returns `SchemaError::MalformedField` unless there is exactly one
    /// separating space between two non-empty tokens, and
    /// `SchemaError::InvalidIdentifier` if either token is unusable.
    pub fn parse(declaration: &str, node_type: &str) -> Result<Self, SchemaError> {
        let (ty, name) = declaration
            .split_once(' ')
            .ok_or_else(|| SchemaError::malformed_field(declaration, node_type))?;

        if ty.is_empty() || name.is_empty() || name.contains(' ') {
            return Err(SchemaError::malformed_field(declaration, node_type));
        }

        Self::new(ty, name)
    }

    /// Returns the declared type.
    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A concrete node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDef {
    /// Node type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
}

impl NodeDef {
    /// Creates a node type without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a node type from textual field declarations.
    ///
    /// # Errors
    /// Returns `SchemaError` if any declaration is malformed.
    pub fn parse(name: impl Into<String>, declarations: &[&str]) -> Result<Self, SchemaError> {
        let mut node = Self::new(name);
        for declaration in declarations {
            let field = FieldDecl::parse(declaration, &node.name)?;
            node.add_field(field);
        }
        Ok(node)
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: FieldDecl) {
        self.fields.push(field);
    }
}

/// One AST family: a base type and its node types in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstSchema {
    /// Abstract base type name, also the output file stem.
    pub base: String,
    /// Node types in declaration order.
    pub nodes: Vec<NodeDef>,
}

impl AstSchema {
    /// Creates an empty schema for `base`.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            nodes: Vec::new(),
        }
    }

    /// Appends a node type parsed from textual field declarations.
    ///
    /// # Errors
    /// Returns `SchemaError` if any declaration is malformed.
    pub fn with_node(mut self, name: &str, declarations: &[&str]) -> Result<Self, SchemaError> {
        self.add_node(NodeDef::parse(name, declarations)?);
        Ok(self)
    }

    /// Appends a node type.
    pub fn add_node(&mut self, node: NodeDef) {
        self.nodes.push(node);
    }

    /// Gets a node type by name.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Returns true if the schema declares no node types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A set of schemas sharing one package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Package (or module) name written into the generated header.
    pub package: String,
    /// Schemas in document order.
    pub schemas: Vec<AstSchema>,
}

impl SchemaDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            schemas: Vec::new(),
        }
    }

    /// Appends a schema.
    pub fn add_schema(&mut self, schema: AstSchema) {
        self.schemas.push(schema);
    }

    /// Gets a schema by base name.
    #[must_use]
    pub fn get_schema(&self, base: &str) -> Option<&AstSchema> {
        self.schemas.iter().find(|s| s.base == base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse() {
        let field = FieldDecl::parse("Token operator", "Binary").unwrap();
        assert_eq!(field.ty(), "Token");
        assert_eq!(field.name(), "operator");
        assert_eq!(field.to_string(), "Token operator");
    }

    #[test]
    fn test_field_parse_generic_type() {
        let field = FieldDecl::parse("List<Stmt> statements", "Block").unwrap();
        assert_eq!(field.ty(), "List<Stmt>");
        assert_eq!(field.name(), "statements");
    }

    #[test]
    fn test_field_parse_missing_name() {
        let err = FieldDecl::parse("Expr", "Grouping").unwrap_err();
        assert_eq!(err, SchemaError::malformed_field("Expr", "Grouping"));

        let err = FieldDecl::parse("Expr ", "Grouping").unwrap_err();
        assert!(matches!(err, SchemaError::MalformedField { .. }));
    }

    #[test]
    fn test_field_parse_extra_spaces() {
        for bad in [" Expr expression", "Expr  expression", "Expr expression extra"] {
            let err = FieldDecl::parse(bad, "Grouping").unwrap_err();
            assert_eq!(err, SchemaError::malformed_field(bad, "Grouping"), "{bad:?}");
        }
    }

    #[test]
    fn test_field_new_rejects_bad_name() {
        let err = FieldDecl::new("Expr", "1left").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidIdentifier {
                kind: "field name",
                ..
            }
        ));
    }

    #[test]
    fn test_node_parse_preserves_order() {
        let node = NodeDef::parse("Binary", &["Expr left", "Token operator", "Expr right"]).unwrap();
        let names: Vec<_> = node.fields.iter().map(FieldDecl::name).collect();
        assert_eq!(names, ["left", "operator", "right"]);
    }

    #[test]
    fn test_schema_builder() {
        let schema = AstSchema::new("Expr")
            .with_node("Grouping", &["Expr expression"])
            .and_then(|s| s.with_node("Literal", &["Object value"]))
            .unwrap();

        assert_eq!(schema.nodes.len(), 2);
        assert_eq!(schema.nodes[0].name, "Grouping");
        assert!(schema.get_node("Literal").is_some());
        assert!(schema.get_node("Binary").is_none());
        assert!(!schema.is_empty());
        assert!(AstSchema::new("Expr").is_empty());
    }

    #[test]
    fn test_schema_builder_reports_node() {
        let err = AstSchema::new("Expr")
            .with_node("Unary", &["Token operator", "right"])
            .unwrap_err();
        assert_eq!(err, SchemaError::malformed_field("right", "Unary"));
    }

    #[test]
    fn test_document_lookup() {
        let mut doc = SchemaDocument::new("lite");
        doc.add_schema(AstSchema::new("Stmt"));
        doc.add_schema(AstSchema::new("Expr"));

        assert_eq!(doc.package, "lite");
        assert!(doc.get_schema("Expr").is_some());
        assert!(doc.get_schema("Decl").is_none());
    }
}
