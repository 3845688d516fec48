//! Minimal tag tokenizer for the dictionary document format.
//!
//! This is not an XML parser. It only knows about `<name ...>`, `<name/>` and
//! `</name>` markers; anything else (comments, declarations, stray `<`) is
//! kept as plain text. Tokens carry byte offsets into the source so callers
//! can slice the raw content between markers.

use std::ops::Range;

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Text,
    Open(String),
    SelfClosing(String),
    Close(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// A matched `<name>...</name>` (or `<name/>`) pair.
#[derive(Debug, PartialEq, Clone)]
pub struct Element {
    /// Byte range of the whole element, markers included.
    pub outer: Range<usize>,
    /// Byte range between the opening and closing markers.
    pub inner: Range<usize>,
    /// Token indexes strictly between the markers.
    pub children: Range<usize>,
}

impl Element {
    pub fn inner_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.inner.clone()]
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text_start: Option<usize> = None;
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'<' {
            if let Some((kind, end)) = read_tag(input, pos) {
                if let Some(start) = text_start.take() {
                    tokens.push(Token {
                        kind: TokenKind::Text,
                        start,
                        end: pos,
                    });
                }
                tokens.push(Token {
                    kind,
                    start: pos,
                    end,
                });
                pos = end;
                continue;
            }
        }
        // text_start is only ever set at 0 or right after a '>', so it is
        // always on a char boundary.
        if text_start.is_none() {
            text_start = Some(pos);
        }
        pos += 1;
    }
    if let Some(start) = text_start {
        tokens.push(Token {
            kind: TokenKind::Text,
            start,
            end: input.len(),
        });
    }
    tokens
}

/// Reads a marker starting at the `<` at `start`. Returns the token kind and
/// the byte offset right after the closing `>`.
fn read_tag(input: &str, start: usize) -> Option<(TokenKind, usize)> {
    let rest = &input[start + 1..];
    let gt = rest.find('>')?;
    let (closing, body) = match rest[..gt].strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, &rest[..gt]),
    };
    if body.contains('<') {
        return None;
    }

    let name_len = body
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(body.len());
    let name = &body[..name_len];
    if !is_tag_name(name) {
        return None;
    }

    let end = start + 1 + gt + 1;
    let kind = if closing {
        TokenKind::Close(name.to_string())
    } else if body.trim_end().ends_with('/') {
        TokenKind::SelfClosing(name.to_string())
    } else {
        TokenKind::Open(name.to_string())
    };
    Some((kind, end))
}

fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

/// Finds every `name` element in `tokens[range]`, pairing each opening
/// marker with the nearest following closing marker. Scanning resumes after
/// that close, so entries never overlap. An opening marker with no close is
/// dropped.
pub fn find_elements(tokens: &[Token], range: Range<usize>, name: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut i = range.start;
    while i < range.end {
        match &tokens[i].kind {
            TokenKind::SelfClosing(n) if n == name => {
                let token = &tokens[i];
                elements.push(Element {
                    outer: token.start..token.end,
                    inner: token.end..token.end,
                    children: i + 1..i + 1,
                });
                i += 1;
            }
            TokenKind::Open(n) if n == name => {
                let close = (i + 1..range.end)
                    .find(|&j| matches!(&tokens[j].kind, TokenKind::Close(c) if c == name));
                match close {
                    Some(j) => {
                        elements.push(Element {
                            outer: tokens[i].start..tokens[j].end,
                            inner: tokens[i].end..tokens[j].start,
                            children: i + 1..j,
                        });
                        i = j + 1;
                    }
                    None => break,
                }
            }
            _ => i += 1,
        }
    }
    elements
}

pub fn find_first_element(tokens: &[Token], range: Range<usize>, name: &str) -> Option<Element> {
    // Only the first one is needed, but the pairing rules are the same.
    find_elements(tokens, range, name).into_iter().next()
}
