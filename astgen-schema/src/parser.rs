//! XML schema document parser.
//!
//! This module parses declarative schema documents into a
//! [`SchemaDocument`]:
//!
//! ```xml
//! <astSchema package="lite">
//!     <base name="Expr">
//!         <node name="Binary">
//!             <field type="Expr" name="left"/>
//!             <field type="Token" name="operator"/>
//!             <field decl="Expr right"/>
//!         </node>
//!     </base>
//! </astSchema>
//! ```
//!
//! Bases, nodes and fields keep document order.

use crate::error::ParseError;
use crate::types::{AstSchema, FieldDecl, NodeDef, SchemaDocument};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

const ROOT: &str = "astSchema";

/// Parses a schema document from a string.
///
/// # Arguments
/// * `xml` - XML document content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, contains unknown elements,
/// or declares an invalid field.
pub fn parse_document(xml: &str) -> Result<SchemaDocument, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document: Option<SchemaDocument> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e)?;
                if name != ROOT {
                    return Err(ParseError::unknown_element(name, "document"));
                }
                let mut doc = parse_root(e)?;
                parse_bases(&mut reader, &mut doc)?;
                document = Some(doc);
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e)?;
                if name != ROOT {
                    return Err(ParseError::unknown_element(name, "document"));
                }
                document = Some(parse_root(e)?);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    document.ok_or_else(|| ParseError::structure("No astSchema element found"))
}

/// Reads and parses a schema document file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, or any error of
/// [`parse_document`].
pub fn parse_document_file(path: &Path) -> Result<SchemaDocument, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_document(&xml)
}

/// Parses the root element attributes.
fn parse_root(e: &BytesStart<'_>) -> Result<SchemaDocument, ParseError> {
    let package =
        attribute(e, "package")?.ok_or_else(|| ParseError::missing_attr(ROOT, "package"))?;
    Ok(SchemaDocument::new(package))
}

/// Parses the `base` children of the root element.
fn parse_bases(reader: &mut Reader<&[u8]>, doc: &mut SchemaDocument) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e)?;
                if name != "base" {
                    return Err(ParseError::unknown_element(name, ROOT));
                }
                let mut schema = parse_base_attrs(e)?;
                parse_nodes(reader, &mut schema)?;
                doc.add_schema(schema);
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e)?;
                if name != "base" {
                    return Err(ParseError::unknown_element(name, ROOT));
                }
                doc.add_schema(parse_base_attrs(e)?);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(ParseError::structure("unterminated astSchema element")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the `base` element attributes.
fn parse_base_attrs(e: &BytesStart<'_>) -> Result<AstSchema, ParseError> {
    let name = attribute(e, "name")?.ok_or_else(|| ParseError::missing_attr("base", "name"))?;
    Ok(AstSchema::new(name))
}

/// Parses the `node` children of a `base` element.
fn parse_nodes(reader: &mut Reader<&[u8]>, schema: &mut AstSchema) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e)?;
                if name != "node" {
                    return Err(ParseError::unknown_element(name, "base"));
                }
                let mut node = parse_node_attrs(e)?;
                parse_fields(reader, &mut node)?;
                schema.add_node(node);
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e)?;
                if name != "node" {
                    return Err(ParseError::unknown_element(name, "base"));
                }
                schema.add_node(parse_node_attrs(e)?);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(ParseError::structure("unterminated base element")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the `node` element attributes.
fn parse_node_attrs(e: &BytesStart<'_>) -> Result<NodeDef, ParseError> {
    let name = attribute(e, "name")?.ok_or_else(|| ParseError::missing_attr("node", "name"))?;
    Ok(NodeDef::new(name))
}

/// Parses the `field` children of a `node` element.
fn parse_fields(reader: &mut Reader<&[u8]>, node: &mut NodeDef) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e)?;
                if name != "field" {
                    return Err(ParseError::unknown_element(name, "node"));
                }
                let field = parse_field(e, &node.name)?;
                node.add_field(field);
                skip_to_end(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e)?;
                if name != "field" {
                    return Err(ParseError::unknown_element(name, "node"));
                }
                let field = parse_field(e, &node.name)?;
                node.add_field(field);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(ParseError::structure("unterminated node element")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses a `field` element.
///
/// Accepts either `type` and `name` attributes or a single `decl`
/// attribute holding the `"<type> <name>"` form.
fn parse_field(e: &BytesStart<'_>, node_type: &str) -> Result<FieldDecl, ParseError> {
    if let Some(decl) = attribute(e, "decl")? {
        return Ok(FieldDecl::parse(&decl, node_type)?);
    }

    let ty = attribute(e, "type")?.ok_or_else(|| ParseError::missing_attr("field", "type"))?;
    let name = attribute(e, "name")?.ok_or_else(|| ParseError::missing_attr("field", "name"))?;
    Ok(FieldDecl::new(ty, name)?)
}

/// Returns the unescaped value of attribute `key`, if present.
fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key.as_bytes() {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape(raw)?.into_owned()));
        }
    }
    Ok(None)
}

/// Returns the element name as a string.
fn element_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
