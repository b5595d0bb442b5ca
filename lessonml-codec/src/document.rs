//! Core data structures for parsed lesson documents.

/// Heading level used when the `level` attribute is missing or unusable.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Language used when a code element carries no `language` attribute.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// Alt text used when an image carries no `alt` attribute.
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// A parsed lesson document: an ordered sequence of nodes.
///
/// Order is significant (it is the render order). A node's position in
/// `nodes` is its only identity — there is no persistent id — and that
/// positional index keys any caller-held interactive state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    /// Build a document from a node list.
    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Document { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// A single block-level element of the lesson markup dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading(Heading),
    Paragraph(Paragraph),
    Code(Code),
    CodeCollection(CodeCollection),
    Image(Image),
    Carousel(ImageSet),
    Gallery(ImageSet),
    Note(Note),
    Example(Example),
    Unknown(UnknownElement),
}

/// A section heading with a level in 1..=6.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// A plain paragraph of inline text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
}

/// A single code block. The body is verbatim: only one outer trim is
/// applied at parse time, internal whitespace is untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    pub language: String,
    pub body: String,
}

/// A tabbed collection of code snippets.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeCollection {
    pub title: Option<String>,
    pub snippets: Vec<Snippet>,
}

/// One language variant inside a [`CodeCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub language: String,
    pub body: String,
}

/// A standalone image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
    /// Optional display width (free-form CSS length string).
    pub width: Option<String>,
    /// Optional display height (free-form CSS length string).
    pub height: Option<String>,
}

/// An ordered set of images with an optional caption.
///
/// Shared by carousels (one image at a time) and galleries (all at once);
/// the distinction lives in the [`Node`] variant, not the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet {
    pub caption: Option<String>,
    pub images: Vec<ImageRef>,
}

/// A single image inside a carousel or gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// A callout note.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub text: String,
}

/// A worked example with an optional title.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub title: Option<String>,
    pub text: String,
}

/// An element outside the dialect vocabulary, kept for best-effort
/// pass-through rendering rather than dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownElement {
    pub tag: String,
    pub children: Vec<Node>,
}
