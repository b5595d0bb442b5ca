//! The lesson markup dialect: parser and serializer pair.
//!
//! Parsing and serialization are deliberately asymmetric: the parser
//! produces the full [`crate::document::Node`] vocabulary, while the
//! serializer consumes [`crate::editor::EditorBlock`] input — the subset of
//! the dialect the structured block editor can author. The two meet in the
//! round-trip law: serializer output always parses back to the equivalent
//! nodes.

pub mod parser;
pub mod serializer;

pub use parser::{parse, parse_with_warnings, ParseWarning};
pub use serializer::{
    serialize, serialize_with_rules, BlockFailure, Serialized, SerializeRules,
};
