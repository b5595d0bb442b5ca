//! Renderer tests over the full read path (envelope → parse → render).

use crate::common::KITCHEN_SINK;
use lessonml_codec::dialect::parse;
use lessonml_codec::envelope;
use lessonml_codec::render::{render, Block, Highlighted, Highlighter, PlainHighlighter, ViewState};

/// A fake collaborator that tags its output, to prove delegation happens.
struct MarkerHighlighter;

impl Highlighter for MarkerHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Highlighted {
        Highlighted::Html(format!("<hl lang=\"{language}\">{code}</hl>"))
    }
}

#[test]
fn full_read_path_produces_presentation_blocks() {
    let stored = envelope::wrap(&KITCHEN_SINK);
    let payload = envelope::unwrap(&stored).unwrap();
    let doc = parse(&payload).unwrap();
    let blocks = render(&doc, &ViewState::new(), &PlainHighlighter);

    assert_eq!(blocks.len(), 9);
    assert!(matches!(&blocks[0], Block::Heading(h) if h.level == 1));
    assert!(matches!(&blocks[4], Block::Code(_)));
    assert!(matches!(&blocks[7], Block::Carousel(c) if c.slides.len() == 2));
    assert!(matches!(&blocks[8], Block::Gallery(g) if g.tiles.len() == 1));
}

#[test]
fn highlighting_is_delegated_to_the_collaborator() {
    let doc = parse("<code language=\"python\"><![CDATA[print(1)]]></code>").unwrap();
    let blocks = render(&doc, &ViewState::new(), &MarkerHighlighter);
    let Block::Code(c) = &blocks[0] else {
        panic!("expected code block");
    };
    assert_eq!(
        c.highlighted,
        Highlighted::Html("<hl lang=\"python\">print(1)</hl>".to_string())
    );
}

#[test]
fn tab_state_is_keyed_by_positional_index() {
    let payload = "<code-collection>\
                   <snippet language=\"python\"><![CDATA[a]]></snippet>\
                   <snippet language=\"java\"><![CDATA[b]]></snippet>\
                   </code-collection>\
                   <code-collection>\
                   <snippet language=\"python\"><![CDATA[c]]></snippet>\
                   <snippet language=\"java\"><![CDATA[d]]></snippet>\
                   </code-collection>";
    let doc = parse(payload).unwrap();

    let mut state = ViewState::new();
    state.select_tab(1, "java");
    let blocks = render(&doc, &state, &PlainHighlighter);

    let Block::CodeCollection(first) = &blocks[0] else {
        panic!("expected code collection");
    };
    let Block::CodeCollection(second) = &blocks[1] else {
        panic!("expected code collection");
    };
    assert_eq!(first.active_tab, 0);
    assert_eq!(second.active_tab, 1);
}

#[test]
fn unknown_content_renders_as_a_container() {
    let doc = parse("<aside><paragraph>kept</paragraph></aside>").unwrap();
    let blocks = render(&doc, &ViewState::new(), &PlainHighlighter);
    let Block::Container(container) = &blocks[0] else {
        panic!("expected container block");
    };
    assert_eq!(container.tag, "aside");
    assert!(matches!(&container.children[0], Block::Paragraph(p) if p.text == "kept"));
}

#[test]
fn rendering_is_repeatable_from_the_same_inputs() {
    let doc = parse(&KITCHEN_SINK).unwrap();
    let state = ViewState::new();
    let first = render(&doc, &state, &PlainHighlighter);
    let second = render(&doc, &state, &PlainHighlighter);
    assert_eq!(first, second);
}
