use std::ops::Range;

use log::debug;

use crate::{
    record::WordRecord,
    tags::{self, Element, Token, TokenKind},
};

/// Marker that switches a document from the line format to the tag format.
pub const WORD_MARKER: &str = "<word";

const WORD_TAG: &str = "word";
const TEXT_TAG: &str = "text";
const DEFINITION_TAG: &str = "definition";
const POS_TAG: &str = "pos";

pub fn parse_word_document(content: &str) -> Vec<WordRecord> {
    if content.contains(WORD_MARKER) {
        parse_tagged(content)
    } else {
        parse_lines(content)
    }
}

/// One record per non-blank line.
pub fn parse_lines(content: &str) -> Vec<WordRecord> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(WordRecord::new)
        .collect()
}

pub fn parse_tagged(content: &str) -> Vec<WordRecord> {
    let tokens = tags::tokenize(content);
    let spans = tags::find_elements(&tokens, 0..tokens.len(), WORD_TAG);
    let count = spans.len();

    let records: Vec<WordRecord> = spans
        .iter()
        .filter_map(|span| parse_word_span(content, &tokens, span))
        .collect();

    debug!(
        "parsed {} word records from {} spans, {} dropped",
        records.len(),
        count,
        count - records.len()
    );
    records
}

fn parse_word_span(content: &str, tokens: &[Token], span: &Element) -> Option<WordRecord> {
    let children = span.children.clone();

    // <word>TEXT</word>, where a stray `<` or a comment is still markup
    let is_simple = tokens[children.clone()]
        .iter()
        .all(|token| token.kind == TokenKind::Text)
        && !has_markup(span.inner_text(content));
    if is_simple {
        return non_empty(span.inner_text(content)).map(WordRecord::new);
    }

    let text = tags::find_first_element(tokens, children.clone(), TEXT_TAG);
    let definition = tags::find_first_element(tokens, children.clone(), DEFINITION_TAG);
    let pos = tags::find_first_element(tokens, children, POS_TAG);

    let display = match &text {
        Some(text) => text.inner_text(content).to_string(),
        None => {
            let matched: Vec<Range<usize>> = [&definition, &pos]
                .into_iter()
                .flatten()
                .map(|e| e.outer.clone())
                .collect();
            let direct = direct_content(content, span.inner.clone(), matched);
            if has_markup(&direct) {
                String::new()
            } else {
                direct
            }
        }
    };

    let text = non_empty(&display)?;
    let mut record = WordRecord::new(text);
    if let Some(definition) = definition {
        record = record.with_definition(definition.inner_text(content));
    }
    if let Some(pos) = pos {
        record = record.with_part_of_speech(pos.inner_text(content));
    }
    Some(record)
}

/// Content of `inner` with the `excluded` ranges cut out.
fn direct_content(content: &str, inner: Range<usize>, mut excluded: Vec<Range<usize>>) -> String {
    excluded.sort_by_key(|r| r.start);
    let mut out = String::new();
    let mut cursor = inner.start;
    for range in excluded {
        if range.start > cursor {
            out.push_str(&content[cursor..range.start]);
        }
        cursor = cursor.max(range.end);
    }
    if cursor < inner.end {
        out.push_str(&content[cursor..inner.end]);
    }
    out
}

fn has_markup(s: &str) -> bool {
    s.contains('<') || s.contains('>')
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
