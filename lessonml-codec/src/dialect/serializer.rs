//! Dialect serialization (editor blocks → canonical markup text)
//!
//! The inverse of the parser for the block types the structured editor can
//! author. Every attribute value passes through XML escaping before
//! interpolation, and code bodies travel inside CDATA sections with the
//! `]]>` terminator guarded — serializer output always parses back without
//! loss.
//!
//! Editor-only block types (practice links, link lists, quizzes) are
//! reported per-block instead of failing the whole document: one
//! inexpressible block must not cost the author everything else.

use crate::document::DEFAULT_HEADING_LEVEL;
use crate::editor::EditorBlock;
use crate::envelope::guard_cdata;
use crate::error::SerializeError;
use serde::{Deserialize, Serialize};

/// Knobs governing the shape of serialized markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializeRules {
    /// Blank lines between top-level elements.
    pub blank_lines_between_blocks: usize,
    /// Indent for nested `<snippet>`/`<img>` children.
    pub indent_string: String,
}

impl Default for SerializeRules {
    fn default() -> Self {
        SerializeRules {
            blank_lines_between_blocks: 1,
            indent_string: "  ".to_string(),
        }
    }
}

/// Result of serializing a block list.
///
/// `markup` holds every expressible block; `failures` names the blocks that
/// were skipped, by input index.
#[derive(Debug, Clone, PartialEq)]
pub struct Serialized {
    pub markup: String,
    pub failures: Vec<BlockFailure>,
}

/// A block the serializer had to skip.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockFailure {
    pub index: usize,
    pub error: SerializeError,
}

/// Serialize editor blocks to canonical markup with default rules.
pub fn serialize(blocks: &[EditorBlock]) -> Serialized {
    serialize_with_rules(blocks, &SerializeRules::default())
}

/// Serialize editor blocks to canonical markup with explicit rules.
pub fn serialize_with_rules(blocks: &[EditorBlock], rules: &SerializeRules) -> Serialized {
    let mut fragments = Vec::new();
    let mut failures = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        match serialize_block(block, rules) {
            Ok(fragment) => fragments.push(fragment),
            Err(error) => failures.push(BlockFailure { index, error }),
        }
    }

    let separator = "\n".repeat(rules.blank_lines_between_blocks + 1);
    Serialized {
        markup: fragments.join(&separator),
        failures,
    }
}

fn serialize_block(block: &EditorBlock, rules: &SerializeRules) -> Result<String, SerializeError> {
    match block {
        EditorBlock::Heading { text, level } => {
            let level = if (1..=6).contains(level) {
                *level
            } else {
                DEFAULT_HEADING_LEVEL
            };
            Ok(format!(
                "<heading level=\"{level}\">{}</heading>",
                escape_text(text)
            ))
        }
        EditorBlock::Paragraph { text } => {
            Ok(format!("<paragraph>{}</paragraph>", escape_text(text)))
        }
        EditorBlock::Code { language, code } => Ok(format!(
            "<code language=\"{}\">{}</code>",
            escape_attribute(language),
            cdata(code)
        )),
        EditorBlock::Note { text } => Ok(format!("<note>{}</note>", escape_text(text))),
        EditorBlock::Example { title, text } => {
            let mut out = String::from("<example");
            push_attr(&mut out, "title", title.as_deref());
            out.push('>');
            out.push_str(&escape_text(text));
            out.push_str("</example>");
            Ok(out)
        }
        EditorBlock::Image {
            src,
            alt,
            width,
            height,
        } => {
            let mut out = String::from("<image");
            push_attr(&mut out, "alt", alt.as_deref());
            push_attr(&mut out, "width", width.as_deref());
            push_attr(&mut out, "height", height.as_deref());
            out.push('>');
            out.push_str(&escape_text(src));
            out.push_str("</image>");
            Ok(out)
        }
        EditorBlock::Carousel { caption, images } => {
            let mut out = String::from("<carousel");
            push_attr(&mut out, "caption", caption.as_deref());
            out.push('>');
            for image in images {
                out.push('\n');
                out.push_str(&rules.indent_string);
                out.push_str("<img");
                push_attr(&mut out, "alt", image.alt.as_deref());
                out.push('>');
                out.push_str(&escape_text(&image.src));
                out.push_str("</img>");
            }
            if !images.is_empty() {
                out.push('\n');
            }
            out.push_str("</carousel>");
            Ok(out)
        }
        EditorBlock::CodeCollection { title, snippets } => {
            let indent = &rules.indent_string;
            let mut out = String::from("<code-collection");
            push_attr(&mut out, "title", title.as_deref());
            out.push('>');
            for snippet in snippets {
                out.push('\n');
                out.push_str(indent);
                out.push_str(&format!(
                    "<snippet language=\"{}\"><![CDATA[\n{}\n{indent}]]></snippet>",
                    escape_attribute(&snippet.language),
                    guard_cdata(&snippet.code),
                ));
            }
            if !snippets.is_empty() {
                out.push('\n');
            }
            out.push_str("</code-collection>");
            Ok(out)
        }
        EditorBlock::PracticeLink { .. } => {
            Err(SerializeError::UnsupportedBlockType("practice_link".to_string()))
        }
        EditorBlock::Links { .. } => Err(SerializeError::UnsupportedBlockType("links".to_string())),
        EditorBlock::Mcq { .. } => Err(SerializeError::UnsupportedBlockType("mcq".to_string())),
    }
}

/// Append ` name="value"` with the value escaped, or nothing for `None`.
fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
}

/// Wrap a verbatim body in a CDATA section, guarding the terminator.
fn cdata(body: &str) -> String {
    format!("<![CDATA[\n{}\n]]>", guard_cdata(body))
}

/// Escape XML special characters for attribute positions.
fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Escape XML special characters in inline text.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
