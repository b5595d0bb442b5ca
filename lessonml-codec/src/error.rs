//! Error types for codec operations

use std::fmt;

/// Errors from envelope unwrap/wrap operations
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The envelope contains no `<section>` element
    MissingSection,
    /// The outer envelope is not parsable XML
    MalformedEnvelope(String),
    /// A CDATA section was opened but never terminated
    UnterminatedCdata,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::MissingSection => write!(f, "envelope has no <section> element"),
            CodecError::MalformedEnvelope(msg) => write!(f, "malformed envelope: {msg}"),
            CodecError::UnterminatedCdata => write!(f, "unterminated CDATA section"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Errors from dialect parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The payload is not structurally valid markup
    Syntax(String),
    /// The payload is empty or whitespace-only
    EmptyPayload,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(msg) => write!(f, "markup syntax error: {msg}"),
            ParseError::EmptyPayload => write!(f, "payload is empty"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors from serializing editor blocks
#[derive(Debug, Clone, PartialEq)]
pub enum SerializeError {
    /// The block type has no representation in the markup dialect
    UnsupportedBlockType(String),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::UnsupportedBlockType(kind) => {
                write!(f, "block type '{kind}' has no markup representation")
            }
        }
    }
}

impl std::error::Error for SerializeError {}
