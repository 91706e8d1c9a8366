// src/utils/html.rs

/// Decode HTML entities using the html-escape library.
///
/// The external trivia source entity-encodes question and answer text
/// (`&quot;`, `&#039;`, `&amp;`, ...). We decode once at ingestion so the
/// stored question set is plain text and the correct answer compares equal
/// to its option verbatim.
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}
