//! Java code generation.
//!
//! Emits one file holding an abstract base class, its nested `Visitor<T>`
//! interface and a static nested class per node type. Indentation uses tabs
//! and the layout matches the hand-maintained `lite` sources line for line.

use crate::error::CodegenError;
use astgen_schema::ir::{ResolvedNode, SchemaIr};

/// Reserved words and literals that cannot name a Java class, parameter or
/// field.
const KEYWORDS: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Generator for a Java AST source file.
pub struct JavaGenerator<'a> {
    ir: &'a SchemaIr,
    package: &'a str,
}

impl<'a> JavaGenerator<'a> {
    /// Creates a new Java generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, package: &'a str) -> Self {
        Self { ir, package }
    }

    /// Generates the complete source file.
    ///
    /// # Errors
    /// Returns `CodegenError` if the base, its parameter name, a node type or
    /// a field name is a Java reserved word.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.check_names()?;

        let mut output = String::new();

        output.push_str(&format!("package {};\n\n", self.package));
        output.push_str(&format!("abstract class {}{{\n\n", self.ir.base));
        output.push_str("\tabstract <T> T accept(Visitor<T> visitor);\n\n");

        output.push_str(&self.generate_visitor());

        for node in &self.ir.nodes {
            output.push_str(&self.generate_node(node));
        }

        output.push_str("}\n");
        Ok(output)
    }

    /// Checks every name written as a Java identifier.
    fn check_names(&self) -> Result<(), CodegenError> {
        java_ident(&self.ir.base)?;
        java_ident(&self.ir.param_name)?;
        for node in &self.ir.nodes {
            java_ident(&node.name)?;
            for field in &node.fields {
                java_ident(field.name())?;
            }
        }
        Ok(())
    }

    /// Generates the nested visitor interface.
    fn generate_visitor(&self) -> String {
        let mut output = String::new();

        output.push_str("\tinterface Visitor<T> {\n");
        for node in &self.ir.nodes {
            output.push_str(&format!(
                "\t\tT {}({} {});\n",
                node.visit_method, node.name, self.ir.param_name
            ));
        }
        output.push_str("\t}\n\n");

        output
    }

    /// Generates a node class: constructor, final fields and `accept`.
    fn generate_node(&self, node: &ResolvedNode) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\tstatic class {} extends {} {{\n",
            node.name, self.ir.base
        ));

        let params = node
            .fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("\t\t{}({}){{\n", node.name, params));
        for field in &node.fields {
            output.push_str(&format!(
                "\t\t\tthis.{}={};\n",
                field.name(),
                field.name()
            ));
        }
        output.push_str("\t\t}\n");

        for field in &node.fields {
            output.push_str(&format!("\t\tfinal {};\n", field));
        }

        output.push_str("\t\t@Override\n");
        output.push_str("\t\t<T> T accept(Visitor<T> visitor){\n");
        output.push_str(&format!(
            "\t\t\treturn visitor.{}(this);\n",
            node.visit_method
        ));
        output.push_str("\t\t}\n");
        output.push_str("\t}\n");

        output
    }
}

/// Rejects Java reserved words.
fn java_ident(name: &str) -> Result<(), CodegenError> {
    if KEYWORDS.contains(&name) {
        return Err(CodegenError::generation(format!("'{name}' is a reserved word in Java")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::AstSchema;
    use astgen_schema::presets;

    const STMT_JAVA: &str = "package lite;

abstract class Stmt{

\tabstract <T> T accept(Visitor<T> visitor);

\tinterface Visitor<T> {
\t\tT visitExpressionStmt(Expression stmt);
\t\tT visitPrintStmt(Print stmt);
\t}

\tstatic class Expression extends Stmt {
\t\tExpression(Expr expression){
\t\t\tthis.expression=expression;
\t\t}
\t\tfinal Expr expression;
\t\t@Override
\t\t<T> T accept(Visitor<T> visitor){
\t\t\treturn visitor.visitExpressionStmt(this);
\t\t}
\t}
\tstatic class Print extends Stmt {
\t\tPrint(Expr expression){
\t\t\tthis.expression=expression;
\t\t}
\t\tfinal Expr expression;
\t\t@Override
\t\t<T> T accept(Visitor<T> visitor){
\t\t\treturn visitor.visitPrintStmt(this);
\t\t}
\t}
}
";

    fn lite_ir(base: &str) -> SchemaIr {
        let doc = presets::lite().expect("preset");
        SchemaIr::from_schema(doc.get_schema(base).expect("schema")).expect("resolve")
    }

    #[test]
    fn test_generate_stmt_matches_reference() {
        let ir = lite_ir("Stmt");
        let output = JavaGenerator::new(&ir, "lite").generate().unwrap();
        assert_eq!(output, STMT_JAVA);
    }

    #[test]
    fn test_generate_expr_visitor_methods() {
        let ir = lite_ir("Expr");
        let output = JavaGenerator::new(&ir, "lite").generate().unwrap();

        assert!(output.contains("\t\tT visitBinaryExpr(Binary expr);\n"));
        assert!(output.contains("\t\tT visitUnaryExpr(Unary expr);\n"));
        assert!(output.contains("\t\tT visitGroupingExpr(Grouping expr);\n"));
        assert!(output.contains("\t\tT visitLiteralExpr(Literal expr);\n"));
        assert_eq!(output.matches("\t\tT visit").count(), 4);
        assert_eq!(output.matches("static class").count(), 4);
    }

    #[test]
    fn test_generate_binary_fields_in_order() {
        let ir = lite_ir("Expr");
        let output = JavaGenerator::new(&ir, "lite").generate().unwrap();

        assert!(output.contains("\t\tBinary(Expr left, Token operator, Expr right){\n"));
        assert!(output.contains(
            "\t\t\tthis.left=left;\n\t\t\tthis.operator=operator;\n\t\t\tthis.right=right;\n"
        ));
        assert!(output.contains(
            "\t\tfinal Expr left;\n\t\tfinal Token operator;\n\t\tfinal Expr right;\n"
        ));
        assert!(output.contains("\t\t\treturn visitor.visitBinaryExpr(this);\n"));
    }

    #[test]
    fn test_generate_preserves_node_order() {
        let ir = lite_ir("Expr");
        let output = JavaGenerator::new(&ir, "lite").generate().unwrap();

        let positions: Vec<_> = ["Binary", "Unary", "Grouping", "Literal"]
            .iter()
            .map(|n| {
                output
                    .find(&format!("static class {n} extends Expr"))
                    .expect("node class")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_generate_empty_schema() {
        let ir = SchemaIr::from_schema(&AstSchema::new("Decl")).unwrap();
        let output = JavaGenerator::new(&ir, "lite").generate().unwrap();

        assert_eq!(
            output,
            "package lite;\n\nabstract class Decl{\n\n\tabstract <T> T accept(Visitor<T> visitor);\n\n\tinterface Visitor<T> {\n\t}\n\n}\n"
        );
    }

    #[test]
    fn test_generate_node_without_fields() {
        let schema = AstSchema::new("Stmt").with_node("Break", &[]).unwrap();
        let ir = SchemaIr::from_schema(&schema).unwrap();
        let output = JavaGenerator::new(&ir, "lite").generate().unwrap();

        assert!(output.contains("\t\tBreak(){\n\t\t}\n\t\t@Override\n"));
    }

    #[test]
    fn test_generate_rejects_reserved_words() {
        let field = AstSchema::new("Expr")
            .with_node("Binary", &["Token class"])
            .unwrap();
        let node = AstSchema::new("Expr").with_node("int", &[]).unwrap();
        let param = AstSchema::new("Int").with_node("Literal", &[]).unwrap();

        for schema in [field, node, param] {
            let ir = SchemaIr::from_schema(&schema).unwrap();
            let err = JavaGenerator::new(&ir, "lite").generate().unwrap_err();
            assert!(err.to_string().contains("reserved word in Java"));
        }
    }

    #[test]
    fn test_generate_package_header() {
        let ir = lite_ir("Stmt");
        let output = JavaGenerator::new(&ir, "com.example.ast").generate().unwrap();
        assert!(output.starts_with("package com.example.ast;\n\n"));
    }
}
