//! Node struct generation.

use super::rust_ident;
use crate::error::CodegenError;
use astgen_schema::ir::{ResolvedNode, SchemaIr, to_snake_case};
use proc_macro2::TokenStream;
use quote::quote;

/// Methods every node struct defines; fields may not reuse these names.
const NODE_METHODS: &[&str] = &["new", "accept"];

/// Generator for node structs.
pub struct NodeGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> NodeGenerator<'a> {
    /// Creates a new node generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates all node structs in schema order.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field type is not a Rust type, a name
    /// cannot be used, or two node types share a snake_case visitor method.
    pub fn generate(&self) -> Result<TokenStream, CodegenError> {
        let method_names = self.ir.visit_methods_as(to_snake_case)?;
        let mut output = TokenStream::new();
        for (node, method) in self.ir.nodes.iter().zip(&method_names) {
            output.extend(self.generate_node(node, method)?);
        }
        Ok(output)
    }

    /// Generates one struct with its constructor, accessors and `accept`.
    fn generate_node(
        &self,
        node: &ResolvedNode,
        method: &str,
    ) -> Result<TokenStream, CodegenError> {
        let name = rust_ident(&node.name)?;
        let method = rust_ident(method)?;

        let mut names = Vec::with_capacity(node.fields.len());
        let mut types = Vec::with_capacity(node.fields.len());
        for field in &node.fields {
            if NODE_METHODS.contains(&field.name()) {
                return Err(CodegenError::generation(format!(
                    "field '{}' of '{}' clashes with a generated method",
                    field.name(),
                    node.name
                )));
            }
            let ty: syn::Type =
                syn::parse_str(field.ty()).map_err(|_| CodegenError::InvalidType {
                    node_type: node.name.clone(),
                    field: field.name().to_string(),
                    ty: field.ty().to_string(),
                })?;
            names.push(rust_ident(field.name())?);
            types.push(ty);
        }

        let struct_doc = format!(" `{}` node of `{}`.", node.name, self.ir.base);
        let accessor_docs = node
            .fields
            .iter()
            .map(|f| format!(" Returns `{}`.", f.name()))
            .collect::<Vec<_>>();

        Ok(quote! {
            #[doc = #struct_doc]
            pub struct #name {
                #(#names: #types,)*
            }

            impl #name {
                /// Creates the node from its fields in declaration order.
                pub fn new(#(#names: #types),*) -> Self {
                    Self { #(#names),* }
                }

                #(
                    #[doc = #accessor_docs]
                    pub fn #names(&self) -> &#types {
                        &self.#names
                    }
                )*

                /// Calls the visitor method for this node type.
                pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {
                    visitor.#method(self)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::AstSchema;

    fn render(schema: &AstSchema) -> Result<String, CodegenError> {
        let ir = SchemaIr::from_schema(schema).unwrap();
        let tokens = NodeGenerator::new(&ir).generate()?;
        let file: syn::File = syn::parse2(tokens).unwrap();
        Ok(prettyplease::unparse(&file))
    }

    #[test]
    fn test_generate_fields_in_order() {
        let schema = AstSchema::new("Expr")
            .with_node(
                "Binary",
                &["Box<Expr> left", "Token operator", "Box<Expr> right"],
            )
            .unwrap();
        let output = render(&schema).unwrap();

        assert!(output.contains("pub struct Binary {"));
        assert!(output.contains(
            "pub fn new(left: Box<Expr>, operator: Token, right: Box<Expr>) -> Self {"
        ));
        assert!(output.contains("Self { left, operator, right }"));
        assert!(output.contains("pub fn operator(&self) -> &Token {"));

        let left = output.find("left: Box<Expr>,").unwrap();
        let operator = output.find("operator: Token,").unwrap();
        let right = output.find("right: Box<Expr>,").unwrap();
        assert!(left < operator && operator < right);
    }

    #[test]
    fn test_generate_dispatch() {
        let schema = AstSchema::new("Stmt")
            .with_node("Print", &["Expr expression"])
            .unwrap();
        let output = render(&schema).unwrap();

        assert!(output.contains("visitor.visit_print_stmt(self)"));
    }

    #[test]
    fn test_generate_node_without_fields() {
        let schema = AstSchema::new("Stmt").with_node("Break", &[]).unwrap();
        let output = render(&schema).unwrap();

        assert!(output.contains("pub struct Break {}"));
        assert!(output.contains("pub fn new() -> Self"));
    }

    #[test]
    fn test_generate_invalid_type() {
        let schema = AstSchema::new("Expr")
            .with_node("Array", &["int[] items"])
            .unwrap();
        let err = render(&schema).unwrap_err();

        match err {
            CodegenError::InvalidType {
                node_type,
                field,
                ty,
            } => {
                assert_eq!(node_type, "Array");
                assert_eq!(field, "items");
                assert_eq!(ty, "int[]");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generate_field_clashes_with_method() {
        let schema = AstSchema::new("Expr")
            .with_node("Call", &["Expr accept"])
            .unwrap();
        assert!(matches!(
            render(&schema),
            Err(CodegenError::Generation { .. })
        ));
    }
}
