//! Import tests (markup payload → Document)
//!
//! These walk a payload exercising the whole vocabulary and check the
//! resulting typed document node by node.

use crate::common::KITCHEN_SINK;
use lessonml_codec::document::Node;
use lessonml_codec::dialect::{parse, parse_with_warnings, ParseWarning};

#[test]
fn kitchen_sink_parses_to_the_expected_shape() {
    let doc = parse(&KITCHEN_SINK).expect("kitchen sink should parse");
    assert_eq!(doc.len(), 9);

    let Node::Heading(h) = &doc.nodes[0] else {
        panic!("node 0 should be a heading");
    };
    assert_eq!((h.level, h.text.as_str()), (1, "Object Orientation"));

    let Node::Paragraph(p) = &doc.nodes[1] else {
        panic!("node 1 should be a paragraph");
    };
    assert_eq!(p.text, "Classes bundle state and behavior.");

    let Node::Note(n) = &doc.nodes[2] else {
        panic!("node 2 should be a note");
    };
    assert_eq!(n.text, "Everything here is an object.");

    let Node::Example(e) = &doc.nodes[3] else {
        panic!("node 3 should be an example");
    };
    assert_eq!(e.title.as_deref(), Some("Counter"));

    let Node::Code(c) = &doc.nodes[4] else {
        panic!("node 4 should be code");
    };
    assert_eq!(c.language, "python");
    assert_eq!(c.body, "class Counter:\n    def __init__(self):\n        self.n = 0");

    let Node::CodeCollection(cc) = &doc.nodes[5] else {
        panic!("node 5 should be a code collection");
    };
    assert_eq!(cc.title.as_deref(), Some("Hello"));
    assert_eq!(cc.snippets.len(), 2);

    let Node::Image(i) = &doc.nodes[6] else {
        panic!("node 6 should be an image");
    };
    assert_eq!(i.src, "https://cdn.example/diagram.png");
    assert_eq!(i.width.as_deref(), Some("480px"));

    let Node::Carousel(car) = &doc.nodes[7] else {
        panic!("node 7 should be a carousel");
    };
    assert_eq!(car.images.len(), 2);

    let Node::Gallery(gal) = &doc.nodes[8] else {
        panic!("node 8 should be a gallery");
    };
    assert_eq!(gal.caption.as_deref(), Some("Screens"));
}

#[test]
fn node_order_is_document_order() {
    let payload = "<note>first</note><paragraph>second</paragraph><note>third</note>";
    let doc = parse(payload).unwrap();
    let kinds: Vec<&str> = doc
        .nodes
        .iter()
        .map(|n| match n {
            Node::Note(_) => "note",
            Node::Paragraph(_) => "paragraph",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["note", "paragraph", "note"]);
}

#[test]
fn warnings_surface_unknown_tags_without_dropping_content() {
    let payload = "<paragraph>ok</paragraph><quiz><paragraph>inner</paragraph></quiz>";
    let (doc, warnings) = parse_with_warnings(payload).unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(
        warnings,
        vec![ParseWarning::UnknownTag {
            tag: "quiz".to_string(),
            index: 1,
        }]
    );
}

#[test]
fn entities_in_text_decode_during_parse() {
    let doc = parse("<paragraph>5 &lt; 7 &amp; 7 &gt; 5</paragraph>").unwrap();
    let Node::Paragraph(p) = &doc.nodes[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(p.text, "5 < 7 & 7 > 5");
}

#[test]
fn escaped_attribute_values_decode_during_parse() {
    let doc = parse("<example title=\"a &quot;b&quot; &amp; c\">x</example>").unwrap();
    let Node::Example(e) = &doc.nodes[0] else {
        panic!("expected example");
    };
    assert_eq!(e.title.as_deref(), Some("a \"b\" & c"));
}
