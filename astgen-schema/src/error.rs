//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema document parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid character or entity reference in an attribute value.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid document structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// The document parsed but describes an invalid schema.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Field declaration is not a `<type> <name>` pair.
    #[error("malformed field declaration '{declaration}' in node type '{node_type}'")]
    MalformedField {
        /// The offending declaration text.
        declaration: String,
        /// Node type the declaration belongs to.
        node_type: String,
    },

    /// A name or type token is not usable as an identifier.
    #[error("invalid {kind} '{value}'")]
    InvalidIdentifier {
        /// What the token was used as (base, node type, field name, field type).
        kind: &'static str,
        /// The offending token.
        value: String,
    },

    /// A node type is declared twice under one base.
    #[error("duplicate node type '{name}' in base '{base}'")]
    DuplicateNodeType {
        /// Base type name.
        base: String,
        /// Duplicated node type name.
        name: String,
    },

    /// Two node types resolve to the same visitor method.
    #[error("visitor method '{method}' is generated twice for base '{base}'")]
    DuplicateVisitMethod {
        /// Base type name.
        base: String,
        /// Colliding method name.
        method: String,
    },

    /// The base or a node type reuses a name the generated scaffold already
    /// defines.
    #[error("type name '{name}' clashes with a generated name in base '{base}'")]
    ReservedName {
        /// Base type name.
        base: String,
        /// Offending type name.
        name: String,
    },

    /// A field name is declared twice in one node type.
    #[error("duplicate field '{name}' in node type '{node_type}'")]
    DuplicateField {
        /// Node type name.
        node_type: String,
        /// Duplicated field name.
        name: String,
    },

    /// No built-in preset carries this name.
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// Requested preset name.
        name: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a malformed field error.
    pub fn malformed_field(declaration: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self::MalformedField {
            declaration: declaration.into(),
            node_type: node_type.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }
}
