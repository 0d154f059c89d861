//! Intermediate representation for code generation.
//!
//! This module provides a validated, resolved representation of a schema
//! that backends render without re-deriving names. Every node carries its
//! visitor method name, computed once here. Backends that restyle the names
//! go through [`SchemaIr::visit_methods_as`], which checks the restyled
//! table for collisions.

use crate::error::SchemaError;
use crate::types::{AstSchema, FieldDecl, NodeDef};
use crate::validation::validate_schema;
use std::collections::HashSet;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIr {
    /// Base type name.
    pub base: String,
    /// Parameter name used for the node in visitor methods.
    pub param_name: String,
    /// Resolved node types in schema order.
    pub nodes: Vec<ResolvedNode>,
}

impl SchemaIr {
    /// Validates a schema and resolves its visitor method table.
    ///
    /// Node names are unique after validation, so the resolved
    /// `visit<Node><Base>` names are unique as well.
    ///
    /// # Errors
    /// Returns `SchemaError` if the schema fails validation.
    pub fn from_schema(schema: &AstSchema) -> Result<Self, SchemaError> {
        validate_schema(schema)?;

        let nodes = schema
            .nodes
            .iter()
            .map(|node| ResolvedNode::from_node_def(node, &schema.base))
            .collect();

        Ok(Self {
            base: schema.base.clone(),
            param_name: schema.base.to_lowercase(),
            nodes,
        })
    }

    /// Returns the visitor method names in schema order.
    #[must_use]
    pub fn visit_methods(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.visit_method.as_str()).collect()
    }

    /// Returns the visitor method names restyled by `rename`, in schema order.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateVisitMethod` if two node types map to
    /// the same restyled name, such as `FooBar` and `Foo_bar` under
    /// snake_case.
    pub fn visit_methods_as<F>(&self, rename: F) -> Result<Vec<String>, SchemaError>
    where
        F: Fn(&str) -> String,
    {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        let mut methods = Vec::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let method = rename(&node.visit_method);
            if !seen.insert(method.clone()) {
                return Err(SchemaError::DuplicateVisitMethod {
                    base: self.base.clone(),
                    method,
                });
            }
            methods.push(method);
        }

        Ok(methods)
    }

    /// Gets a resolved node by name.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<&ResolvedNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

/// Resolved node type information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    /// Node type name.
    pub name: String,
    /// Visitor method dispatched to by this node.
    pub visit_method: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
}

impl ResolvedNode {
    /// Resolves a node definition under `base`.
    #[must_use]
    pub fn from_node_def(node: &NodeDef, base: &str) -> Self {
        Self {
            name: node.name.clone(),
            visit_method: visit_method_name(&node.name, base),
            fields: node.fields.clone(),
        }
    }
}

/// Builds the visitor method name for a node type under a base type.
#[must_use]
pub fn visit_method_name(node: &str, base: &str) -> String {
    format!("visit{node}{base}")
}

/// Converts a camelCase or PascalCase identifier to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr_schema() -> AstSchema {
        AstSchema::new("Expr")
            .with_node("Binary", &["Expr left", "Token operator", "Expr right"])
            .and_then(|s| s.with_node("Unary", &["Token operator", "Expr right"]))
            .and_then(|s| s.with_node("Grouping", &["Expr expression"]))
            .and_then(|s| s.with_node("Literal", &["Object value"]))
            .expect("valid schema")
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("visitBinaryExpr"), "visit_binary_expr");
        assert_eq!(to_snake_case("Expr"), "expr");
        assert_eq!(to_snake_case("thenBranch"), "then_branch");
    }

    #[test]
    fn test_visit_method_name() {
        assert_eq!(visit_method_name("Print", "Stmt"), "visitPrintStmt");
        assert_eq!(visit_method_name("literal", "expr"), "visitliteralexpr");
    }

    #[test]
    fn test_schema_ir_from_schema() {
        let ir = SchemaIr::from_schema(&expr_schema()).expect("Failed to resolve");

        assert_eq!(ir.base, "Expr");
        assert_eq!(ir.param_name, "expr");
        assert_eq!(
            ir.visit_methods(),
            [
                "visitBinaryExpr",
                "visitUnaryExpr",
                "visitGroupingExpr",
                "visitLiteralExpr"
            ]
        );

        let binary = ir.get_node("Binary").unwrap();
        let fields: Vec<_> = binary.fields.iter().map(|f| (f.ty(), f.name())).collect();
        assert_eq!(
            fields,
            [("Expr", "left"), ("Token", "operator"), ("Expr", "right")]
        );
    }

    #[test]
    fn test_schema_ir_empty() {
        let ir = SchemaIr::from_schema(&AstSchema::new("Stmt")).unwrap();
        assert!(ir.nodes.is_empty());
        assert!(ir.visit_methods().is_empty());
        assert_eq!(ir.param_name, "stmt");
    }

    #[test]
    fn test_schema_ir_duplicate_node() {
        let mut schema = expr_schema();
        schema.add_node(NodeDef::new("Unary"));

        let err = SchemaIr::from_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateNodeType { .. }));
    }

    #[test]
    fn test_visit_methods_as_snake_case() {
        let ir = SchemaIr::from_schema(&expr_schema()).unwrap();
        let methods = ir.visit_methods_as(to_snake_case).unwrap();
        assert_eq!(
            methods,
            [
                "visit_binary_expr",
                "visit_unary_expr",
                "visit_grouping_expr",
                "visit_literal_expr"
            ]
        );
    }

    #[test]
    fn test_visit_methods_as_collision() {
        let schema = AstSchema::new("Expr")
            .with_node("FooBar", &["i32 a"])
            .and_then(|s| s.with_node("Foo_bar", &["i32 b"]))
            .unwrap();
        let ir = SchemaIr::from_schema(&schema).unwrap();

        assert_eq!(ir.visit_methods(), ["visitFooBarExpr", "visitFoo_barExpr"]);
        assert_eq!(
            ir.visit_methods_as(to_snake_case).unwrap_err(),
            SchemaError::DuplicateVisitMethod {
                base: "Expr".to_string(),
                method: "visit_foo_bar_expr".to_string(),
            }
        );
    }

    #[test]
    fn test_resolved_node_clone() {
        let ir = SchemaIr::from_schema(&expr_schema()).unwrap();
        let node = ir.nodes[3].clone();
        assert_eq!(node, ir.nodes[3]);
        assert_eq!(node.visit_method, "visitLiteralExpr");
    }
}
