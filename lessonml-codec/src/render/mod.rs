//! Rendering (Document → presentation descriptors)
//!
//! Maps a parsed [`Document`] onto backend-agnostic presentation blocks —
//! typed descriptors a UI layer turns into widgets, independent of any
//! toolkit. The renderer is pure: interactive selections arrive as an
//! immutable [`ViewState`] snapshot, syntax highlighting is delegated to
//! the [`Highlighter`] collaborator, and no I/O happens anywhere.

pub mod highlight;

use crate::document::{Document, Node};
use std::collections::HashMap;

pub use highlight::{Highlighted, Highlighter, PlainHighlighter};

/// Title shown for an example without one.
const FALLBACK_EXAMPLE_TITLE: &str = "Example";

/// Caller-owned interactive selections, keyed by node positional index.
///
/// The codec holds no session state: the UI layer owns selections and
/// passes a snapshot into every render call. Missing or stale entries fall
/// back to the first tab / first slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    active_tabs: HashMap<usize, String>,
    active_slides: HashMap<usize, usize>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected snippet language for the code collection at
    /// `index`.
    pub fn select_tab(&mut self, index: usize, language: impl Into<String>) {
        self.active_tabs.insert(index, language.into());
    }

    /// Record the visible slide for the carousel at `index`.
    pub fn select_slide(&mut self, index: usize, slide: usize) {
        self.active_slides.insert(index, slide);
    }

    pub fn tab(&self, index: usize) -> Option<&str> {
        self.active_tabs.get(&index).map(String::as_str)
    }

    pub fn slide(&self, index: usize) -> Option<usize> {
        self.active_slides.get(&index).copied()
    }
}

/// A typed presentation descriptor, ready for a UI layer to display.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(HeadingBlock),
    Paragraph(ParagraphBlock),
    Code(CodeBlock),
    CodeCollection(CodeCollectionBlock),
    Image(ImageBlock),
    Carousel(CarouselBlock),
    Gallery(GalleryBlock),
    Note(NoteBlock),
    Example(ExampleBlock),
    /// Pass-through container for content outside the dialect vocabulary.
    Container(ContainerBlock),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingBlock {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphBlock {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub language: String,
    pub highlighted: Highlighted,
}

/// One tab of a code collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTab {
    /// Display label (the language, uppercased).
    pub label: String,
    pub language: String,
    pub highlighted: Highlighted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeCollectionBlock {
    pub title: Option<String>,
    pub tabs: Vec<CodeTab>,
    /// Index into `tabs`; 0 when the collection is empty.
    pub active_tab: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub src: String,
    pub alt: String,
    pub width: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselBlock {
    pub caption: Option<String>,
    pub slides: Vec<Slide>,
    /// Index into `slides`; 0 when the carousel is empty.
    pub active_slide: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryBlock {
    pub caption: Option<String>,
    pub tiles: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteBlock {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleBlock {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerBlock {
    pub tag: String,
    pub children: Vec<Block>,
}

/// Render a document into presentation blocks.
///
/// An empty document renders to an empty list; the caller decides what a
/// "no content" notice looks like.
pub fn render(doc: &Document, state: &ViewState, highlighter: &dyn Highlighter) -> Vec<Block> {
    doc.nodes
        .iter()
        .enumerate()
        .map(|(index, node)| render_node(node, index, state, highlighter))
        .collect()
}

fn render_node(
    node: &Node,
    index: usize,
    state: &ViewState,
    highlighter: &dyn Highlighter,
) -> Block {
    match node {
        Node::Heading(h) => Block::Heading(HeadingBlock {
            level: h.level,
            text: h.text.clone(),
        }),
        Node::Paragraph(p) => Block::Paragraph(ParagraphBlock {
            text: p.text.clone(),
        }),
        Node::Code(c) => Block::Code(CodeBlock {
            language: c.language.clone(),
            highlighted: highlighter.highlight(&c.body, &c.language),
        }),
        Node::CodeCollection(cc) => {
            let tabs: Vec<CodeTab> = cc
                .snippets
                .iter()
                .map(|s| CodeTab {
                    label: s.language.to_uppercase(),
                    language: s.language.clone(),
                    highlighted: highlighter.highlight(&s.body, &s.language),
                })
                .collect();
            // A selection naming a language that is no longer present
            // falls back to the first tab.
            let active_tab = state
                .tab(index)
                .and_then(|language| tabs.iter().position(|t| t.language == language))
                .unwrap_or(0);
            Block::CodeCollection(CodeCollectionBlock {
                title: cc.title.clone(),
                tabs,
                active_tab,
            })
        }
        Node::Image(i) => Block::Image(ImageBlock {
            src: i.src.clone(),
            alt: i.alt.clone(),
            width: i.width.clone(),
            height: i.height.clone(),
        }),
        Node::Carousel(set) => {
            let slides: Vec<Slide> = set
                .images
                .iter()
                .enumerate()
                .map(|(n, img)| Slide {
                    src: img.src.clone(),
                    alt: if img.alt.is_empty() {
                        format!("Image {}", n + 1)
                    } else {
                        img.alt.clone()
                    },
                })
                .collect();
            let active_slide = state
                .slide(index)
                .filter(|&slide| slide < slides.len())
                .unwrap_or(0);
            Block::Carousel(CarouselBlock {
                caption: set.caption.clone(),
                slides,
                active_slide,
            })
        }
        Node::Gallery(set) => Block::Gallery(GalleryBlock {
            caption: set.caption.clone(),
            tiles: set
                .images
                .iter()
                .map(|img| Slide {
                    src: img.src.clone(),
                    alt: img.alt.clone(),
                })
                .collect(),
        }),
        Node::Note(n) => Block::Note(NoteBlock {
            text: n.text.clone(),
        }),
        Node::Example(e) => Block::Example(ExampleBlock {
            title: e
                .title
                .clone()
                .unwrap_or_else(|| FALLBACK_EXAMPLE_TITLE.to_string()),
            text: e.text.clone(),
        }),
        // Nested pass-through content shares its ancestor's positional
        // index; only top-level nodes carry interactive state.
        Node::Unknown(u) => Block::Container(ContainerBlock {
            tag: u.tag.clone(),
            children: u
                .children
                .iter()
                .map(|child| render_node(child, index, state, highlighter))
                .collect(),
        }),
    }
}
