//! Envelope wrap/unwrap for stored lesson content.
//!
//! The content store persists lesson markup inside an XML envelope and
//! treats it as an opaque blob:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <content>
//!   <section><![CDATA[
//! {dialect payload}
//!   ]]></section>
//! </content>
//! ```
//!
//! Unwrapping tolerates the artifacts the rich-text authoring surface
//! introduces: payloads that were entity-escaped instead of (or on top of)
//! CDATA-wrapped, and stray paragraph/line-break wrapper tags around inline
//! text. Entity decoding runs exactly once — a doubly-escaped `&amp;lt;`
//! comes out as `&lt;`, never cascading down to `<`.

use crate::error::CodecError;

/// Extract the dialect payload from an envelope.
///
/// Locates the single `<content><section>…</section></content>` wrapper,
/// pulls the section's character data, decodes entities one time, strips
/// authoring wrapper tags and trims the result.
///
/// Failures are recoverable: callers typically fall back to treating the
/// raw input as plain inline text.
pub fn unwrap(envelope: &str) -> Result<String, CodecError> {
    let doc = roxmltree::Document::parse(envelope)
        .map_err(|e| classify_envelope_error(envelope, &e))?;

    let section = doc
        .descendants()
        .find(|n| n.has_tag_name("section"))
        .ok_or(CodecError::MissingSection)?;

    // Character data of the section: plain text and CDATA children alike.
    let raw: String = section
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    let decoded = decode_entities(&raw);
    let stripped = strip_authoring_wrappers(&decoded);
    Ok(stripped.trim().to_string())
}

/// Wrap a dialect payload in the envelope wire format.
///
/// The payload is trimmed and carried verbatim inside CDATA — never
/// entity-escaped. A literal `]]>` inside the payload would terminate the
/// CDATA section early, so it is split across two sections instead.
pub fn wrap(payload: &str) -> String {
    let body = guard_cdata(payload.trim());
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<content>\n  <section><![CDATA[\n{body}\n  ]]></section>\n</content>"
    )
}

/// Split any literal `]]>` so an emitted CDATA section stays well formed.
///
/// `a]]>b` becomes `a]]` + `]]><![CDATA[` + `>b`; adjacent sections read
/// back as one text run, so the original bytes survive the round trip.
pub(crate) fn guard_cdata(text: &str) -> String {
    text.replace("]]>", "]]]]><![CDATA[>")
}

/// Decode the three entities the authoring surface escapes, exactly once.
///
/// Order is fixed with `&amp;` last: decoding it earlier would manufacture
/// new `&lt;`/`&gt;` sequences and double-decode them.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Remove the specific wrapper tags the rich-text editor injects around
/// inline text. Only these, never arbitrary tags.
fn strip_authoring_wrappers(text: &str) -> String {
    text.replace("<p>", "")
        .replace("</p>", "")
        .replace("<br/>", "")
        .replace("<br>", "")
}

fn classify_envelope_error(envelope: &str, err: &roxmltree::Error) -> CodecError {
    if let Some(open) = envelope.rfind("<![CDATA[") {
        if !envelope[open..].contains("]]>") {
            return CodecError::UnterminatedCdata;
        }
    }
    CodecError::MalformedEnvelope(err.to_string())
}
