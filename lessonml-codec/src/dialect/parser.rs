//! Dialect parsing (payload markup → Document)
//!
//! Pipeline: payload text → synthetic-root XML parse → per-tag dispatch →
//! typed Document. The dialect has no mandatory root element, so the
//! payload is wrapped in one before parsing to tolerate multiple top-level
//! siblings.

use crate::document::{
    Code, CodeCollection, Document, Example, Heading, Image, ImageRef, ImageSet, Node, Note,
    Paragraph, Snippet, UnknownElement, DEFAULT_HEADING_LEVEL, DEFAULT_IMAGE_ALT, DEFAULT_LANGUAGE,
};
use crate::error::ParseError;
use roxmltree::{Node as XmlNode, NodeType};

/// A recoverable oddity noticed while parsing.
///
/// Warnings are data, not log lines: the codec never logs, the embedding
/// application decides what to surface. `index` is the positional index of
/// the affected top-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// A tag outside the dialect vocabulary was kept as an Unknown node.
    UnknownTag { tag: String, index: usize },
    /// A heading level was non-numeric or outside 1..=6 and fell back to
    /// the default.
    CoercedHeadingLevel { given: String, index: usize },
}

/// Parse a dialect payload into a [`Document`].
pub fn parse(payload: &str) -> Result<Document, ParseError> {
    parse_with_warnings(payload).map(|(doc, _)| doc)
}

/// Parse a dialect payload, also returning the recoverable oddities the
/// caller may want to log.
pub fn parse_with_warnings(payload: &str) -> Result<(Document, Vec<ParseWarning>), ParseError> {
    if payload.trim().is_empty() {
        return Err(ParseError::EmptyPayload);
    }

    let wrapped = format!("<root>{payload}</root>");
    let xml =
        roxmltree::Document::parse(&wrapped).map_err(|e| ParseError::Syntax(e.to_string()))?;

    let mut warnings = Vec::new();
    let nodes = parse_children(xml.root_element(), &mut warnings);
    Ok((Document { nodes }, warnings))
}

/// Parse the element and text children of `parent` in document order.
///
/// Whitespace-only text is layout, not content, and is dropped; any other
/// bare text becomes an implicit paragraph.
fn parse_children(parent: XmlNode, warnings: &mut Vec<ParseWarning>) -> Vec<Node> {
    let mut nodes = Vec::new();
    for child in parent.children() {
        match child.node_type() {
            NodeType::Text => {
                let text = child.text().unwrap_or("").trim();
                if !text.is_empty() {
                    nodes.push(Node::Paragraph(Paragraph {
                        text: text.to_string(),
                    }));
                }
            }
            NodeType::Element => {
                let index = nodes.len();
                nodes.push(parse_element(child, index, warnings));
            }
            _ => {}
        }
    }
    nodes
}

fn parse_element(el: XmlNode, index: usize, warnings: &mut Vec<ParseWarning>) -> Node {
    match el.tag_name().name() {
        "heading" => Node::Heading(Heading {
            level: heading_level(el, index, warnings),
            text: inline_text(el),
        }),
        "paragraph" => Node::Paragraph(Paragraph {
            text: inline_text(el),
        }),
        "code" => Node::Code(Code {
            language: attr_or(el, "language", DEFAULT_LANGUAGE),
            body: verbatim_text(el),
        }),
        "code-collection" => Node::CodeCollection(CodeCollection {
            title: attr(el, "title"),
            snippets: collect_snippets(el),
        }),
        // The authoring surface produced both spellings at the top level.
        "image" | "img" => Node::Image(parse_image(el)),
        "carousel" => Node::Carousel(parse_image_set(el)),
        "gallery" => Node::Gallery(parse_image_set(el)),
        "note" => Node::Note(Note {
            text: inline_text(el),
        }),
        "example" => Node::Example(Example {
            title: attr(el, "title"),
            text: inline_text(el),
        }),
        tag => {
            warnings.push(ParseWarning::UnknownTag {
                tag: tag.to_string(),
                index,
            });
            Node::Unknown(UnknownElement {
                tag: tag.to_string(),
                children: parse_children(el, warnings),
            })
        }
    }
}

/// Read the `level` attribute. Non-numeric or out-of-range values coerce
/// to the default — `level="9"` yields 2, never 6.
fn heading_level(el: XmlNode, index: usize, warnings: &mut Vec<ParseWarning>) -> u8 {
    match el.attribute("level") {
        None => DEFAULT_HEADING_LEVEL,
        Some(raw) => match raw.trim().parse::<u8>() {
            Ok(level) if (1..=6).contains(&level) => level,
            _ => {
                warnings.push(ParseWarning::CoercedHeadingLevel {
                    given: raw.to_string(),
                    index,
                });
                DEFAULT_HEADING_LEVEL
            }
        },
    }
}

fn parse_image(el: XmlNode) -> Image {
    let body = verbatim_text(el);
    let src = if body.is_empty() {
        attr_or(el, "src", "")
    } else {
        body
    };
    Image {
        src,
        alt: attr_or(el, "alt", DEFAULT_IMAGE_ALT),
        width: attr(el, "width"),
        height: attr(el, "height"),
    }
}

fn parse_image_set(el: XmlNode) -> ImageSet {
    let images = el
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "img")
        .map(|img| ImageRef {
            src: verbatim_text(img),
            alt: attr_or(img, "alt", ""),
        })
        .collect();
    ImageSet {
        caption: attr(el, "caption"),
        images,
    }
}

fn collect_snippets(el: XmlNode) -> Vec<Snippet> {
    el.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "snippet")
        .map(|snippet| Snippet {
            language: attr_or(snippet, "language", DEFAULT_LANGUAGE),
            body: verbatim_text(snippet),
        })
        .collect()
}

/// All descendant character data, trimmed — the inline-text reading used
/// by headings, paragraphs, notes and examples.
fn inline_text(el: XmlNode) -> String {
    let mut text = String::new();
    for node in el.descendants() {
        if node.is_text() {
            text.push_str(node.text().unwrap_or(""));
        }
    }
    text.trim().to_string()
}

/// Direct character data of `el` (text and CDATA children concatenated)
/// with a single outer trim. Internal whitespace is preserved exactly.
fn verbatim_text(el: XmlNode) -> String {
    let body: String = el
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    body.trim().to_string()
}

fn attr(el: XmlNode, name: &str) -> Option<String> {
    el.attribute(name).map(str::to_string)
}

fn attr_or(el: XmlNode, name: &str, default: &str) -> String {
    el.attribute(name).unwrap_or(default).to_string()
}
