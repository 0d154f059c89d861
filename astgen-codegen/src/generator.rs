//! Target selection and the rendering entry point.

use crate::error::CodegenError;
use crate::java::JavaGenerator;
use crate::rust::RustGenerator;
use astgen_schema::SchemaIr;
use std::fmt;
use std::str::FromStr;

/// Output language of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// Java abstract class with nested visitor interface and node classes.
    #[default]
    Java,
    /// Rust visitor trait, base enum and node structs.
    Rust,
}

impl Target {
    /// Returns the file extension of generated sources.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Rust => "rs",
        }
    }

    /// Returns the target name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Rust => "rust",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "rust" | "rs" => Ok(Self::Rust),
            _ => Err(CodegenError::UnknownTarget {
                name: s.to_string(),
            }),
        }
    }
}

/// Renders a resolved schema into source text for one target.
#[derive(Debug, Clone)]
pub struct Generator {
    target: Target,
    package: String,
}

impl Generator {
    /// Creates a generator for `target`, writing `package` into the header.
    #[must_use]
    pub fn new(target: Target, package: impl Into<String>) -> Self {
        Self {
            target,
            package: package.into(),
        }
    }

    /// Returns the output language.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Returns the package name written into the header.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the output file name for a base type.
    #[must_use]
    pub fn file_name(&self, base: &str) -> String {
        format!("{}.{}", base, self.target.extension())
    }

    /// Generates the complete source file for `ir`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the target cannot express the schema, such
    /// as a field type that is not valid Rust.
    pub fn generate(&self, ir: &SchemaIr) -> Result<String, CodegenError> {
        tracing::debug!(
            "Generating {} source for {} ({} node types)",
            self.target,
            ir.base,
            ir.nodes.len()
        );

        match self.target {
            Target::Java => JavaGenerator::new(ir, &self.package).generate(),
            Target::Rust => RustGenerator::new(ir, &self.package).generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::AstSchema;

    #[test]
    fn test_target_parse() {
        assert_eq!("java".parse::<Target>().unwrap(), Target::Java);
        assert_eq!("Rust".parse::<Target>().unwrap(), Target::Rust);
        assert_eq!("rs".parse::<Target>().unwrap(), Target::Rust);
        assert!(matches!(
            "kotlin".parse::<Target>(),
            Err(CodegenError::UnknownTarget { .. })
        ));
    }

    #[test]
    fn test_target_default_and_extension() {
        assert_eq!(Target::default(), Target::Java);
        assert_eq!(Target::Java.extension(), "java");
        assert_eq!(Target::Rust.extension(), "rs");
        assert_eq!(Target::Rust.to_string(), "rust");
    }

    #[test]
    fn test_file_name_uses_base_verbatim() {
        let generator = Generator::new(Target::Java, "lite");
        assert_eq!(generator.file_name("Stmt"), "Stmt.java");
        let generator = Generator::new(Target::Rust, "lite");
        assert_eq!(generator.file_name("Expr"), "Expr.rs");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let schema = AstSchema::new("Expr")
            .with_node("Unary", &["Token operator", "Expr right"])
            .unwrap();
        let ir = SchemaIr::from_schema(&schema).unwrap();

        for target in [Target::Java, Target::Rust] {
            let generator = Generator::new(target, "lite");
            let first = generator.generate(&ir).unwrap();
            let second = generator.generate(&ir).unwrap();
            assert_eq!(first, second);
        }
    }
}
