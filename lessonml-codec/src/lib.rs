//! Markup codec for lesson content
//!
//!     This crate is the canonical implementation of the lesson markup
//!     pipeline: it unwraps the stored envelope, parses the embedded dialect
//!     into a typed document, renders that document into presentation
//!     descriptors, and serializes structured editor input back to canonical
//!     markup text.
//!
//!     This is a pure lib: it powers the lesson platform but is shell and
//!     transport agnostic — no code here performs I/O, touches env vars,
//!     logs, or assumes any UI toolkit. Fetching and persisting envelopes,
//!     uploading images and drawing widgets all belong to the embedding
//!     application.
//!
//! Architecture
//!
//!     The pipeline is four pure stages over one shared document model:
//!
//!     read path:   envelope text → envelope::unwrap → dialect::parse
//!                  → Document → render::render → presentation blocks
//!     write path:  editor blocks → dialect::serialize → markup text
//!                  → envelope::wrap → envelope text
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # CodecError / ParseError / SerializeError
//!     ├── document.rs         # Document and the Node tagged union
//!     ├── envelope.rs         # envelope unwrap / wrap, entity decode
//!     ├── dialect
//!     │   ├── parser.rs       # payload → Document
//!     │   └── serializer.rs   # editor blocks → canonical markup
//!     ├── editor.rs           # the block editor's JSON vocabulary
//!     └── render
//!         ├── mod.rs          # presentation blocks, ViewState, render()
//!         └── highlight.rs    # Highlighter seam (+ optional syntect)
//!
//! Dispatch
//!
//!     The dialect's tag vocabulary is closed, so parsing dispatches with an
//!     exhaustive match over tag names into a closed tagged union. Adding a
//!     tag means the compiler walks you through every stage that must learn
//!     about it. Tags outside the vocabulary degrade gracefully to Unknown
//!     nodes that keep their children; they are never silently dropped and
//!     never an error.
//!
//! Interactive state
//!
//!     Tabbed code collections and carousels have per-node selections
//!     (active tab, active slide). The renderer does not own them: callers
//!     pass a ViewState snapshot keyed by node positional index, which keeps
//!     render() a pure function that is trivial to test without a UI
//!     harness.
//!
//! Library Choices
//!
//!     XML reading is offloaded to roxmltree for both the envelope and the
//!     dialect payload; this crate only decides what the trees mean. Editor
//!     input is the block editor's JSON, mirrored with serde. Syntax
//!     highlighting is a collaborator behind the Highlighter trait — the
//!     built-in syntect implementation is feature-gated so the default
//!     build stays light.

pub mod dialect;
pub mod document;
pub mod editor;
pub mod envelope;
pub mod error;
pub mod render;

pub use dialect::{parse, parse_with_warnings, serialize, serialize_with_rules};
pub use dialect::{ParseWarning, SerializeRules, Serialized};
pub use document::{Document, Node};
pub use editor::EditorBlock;
pub use error::{CodecError, ParseError, SerializeError};
pub use render::{render, Block, Highlighter, PlainHighlighter, ViewState};
