//! Visitor trait and base enum generation.

use super::rust_ident;
use crate::error::CodegenError;
use astgen_schema::ir::{SchemaIr, to_snake_case};
use proc_macro2::TokenStream;
use quote::quote;

/// Generator for the `Visitor<T>` trait and the base enum that dispatches
/// to it.
pub struct VisitorGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the trait, the base enum with its `accept` method and one
    /// `From` conversion per node type.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name cannot be a Rust identifier or two
    /// node types share a snake_case visitor method.
    pub fn generate(&self) -> Result<TokenStream, CodegenError> {
        let base = rust_ident(&self.ir.base)?;
        let param = rust_ident(&self.ir.param_name)?;
        let method_names = self.ir.visit_methods_as(to_snake_case)?;

        let mut methods = Vec::with_capacity(self.ir.nodes.len());
        let mut variants = Vec::with_capacity(self.ir.nodes.len());
        let mut arms = Vec::with_capacity(self.ir.nodes.len());
        let mut conversions = Vec::with_capacity(self.ir.nodes.len());

        for (node, method) in self.ir.nodes.iter().zip(&method_names) {
            let name = rust_ident(&node.name)?;
            let method = rust_ident(method)?;

            methods.push(quote! {
                fn #method(&mut self, #param: &#name) -> T;
            });
            variants.push(quote! { #name(#name) });
            arms.push(quote! { #base::#name(ref node) => node.accept(visitor) });
            conversions.push(quote! {
                impl From<#name> for #base {
                    fn from(node: #name) -> Self {
                        #base::#name(node)
                    }
                }
            });
        }

        let visitor_doc = format!(
            " Operation over `{}` nodes, one method per node type.",
            self.ir.base
        );
        let base_doc = format!(" Any `{}` node.", self.ir.base);

        Ok(quote! {
            #[doc = #visitor_doc]
            pub trait Visitor<T> {
                #(#methods)*
            }

            #[doc = #base_doc]
            pub enum #base {
                #(#variants),*
            }

            impl #base {
                /// Dispatches to the visitor method of the wrapped node.
                pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {
                    match *self {
                        #(#arms,)*
                    }
                }
            }

            #(#conversions)*
        })
    }
}
