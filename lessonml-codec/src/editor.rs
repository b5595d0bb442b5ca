//! Editor block model
//!
//! The structured block editor submits content as a JSON array of
//! `{ "type": ..., ... }` objects. This module is the typed mirror of that
//! payload. The editor vocabulary is wider than the markup dialect: quiz
//! and link blocks deserialize here but are rejected per-block at
//! serialization time (see [`crate::dialect::serializer`]).

use crate::document::{DEFAULT_HEADING_LEVEL, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

/// One block of structured editor input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorBlock {
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Paragraph {
        text: String,
    },
    Code {
        #[serde(default = "default_language")]
        language: String,
        code: String,
    },
    Note {
        text: String,
    },
    Example {
        #[serde(default)]
        title: Option<String>,
        text: String,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        width: Option<String>,
        #[serde(default)]
        height: Option<String>,
    },
    Carousel {
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        images: Vec<EditorImage>,
    },
    CodeCollection {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        snippets: Vec<EditorSnippet>,
    },
    /// Editor-only: a pointer to an exercise page. Not expressible in markup.
    PracticeLink {
        #[serde(default)]
        title: Option<String>,
        href: String,
    },
    /// Editor-only: a reference link list. Not expressible in markup.
    Links {
        #[serde(default)]
        items: Vec<LinkItem>,
    },
    /// Editor-only: a multiple-choice question. Not expressible in markup.
    Mcq {
        question: String,
        #[serde(default)]
        options: Vec<String>,
        #[serde(default)]
        correct_answers: Vec<usize>,
    },
}

/// An image entry of a carousel editor block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorImage {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A code snippet entry of a code-collection editor block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnippet {
    #[serde(default = "default_language")]
    pub language: String,
    pub code: String,
}

/// One entry of a `links` editor block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub text: String,
    pub href: String,
}

/// Decode a JSON block array as submitted by the editor.
pub fn blocks_from_json(json: &str) -> Result<Vec<EditorBlock>, serde_json::Error> {
    serde_json::from_str(json)
}

fn default_heading_level() -> u8 {
    DEFAULT_HEADING_LEVEL
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
