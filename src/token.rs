//! Budget-bounded markup tokenizer.
//!
//! Result rows and descriptions carry a lightweight `%`-markup:
//!
//! - `%I<path>%` — inline image
//! - `%N` — explicit line break
//! - `%L` — horizontal rule
//! - `%B` / `%C` — push a bold / centering modifier for following runs
//! - `%` — pop the innermost modifier
//! - `\%` — literal percent sign
//!
//! Modifiers stack, so `%C..%B..%..%` returns to centered text after the
//! inner pop. Text runs are cut against a pixel budget: the tokenizer
//! measures grapheme-boundary prefixes through the surface's measurement
//! primitive and emits the longest prefix that fits, leaving the remainder
//! for the next call. The cursor only ever advances; a layout pass that
//! needs the content again starts a fresh cursor.

use crate::surface::{DrawSurface, FontSpec, FontWeight};
use bitflags::bitflags;
use unicode_segmentation::UnicodeSegmentation;

bitflags! {
    /// Modifiers applied to a text run by the surrounding markup.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct RunAttrs: u8 {
        /// Render with the bold face.
        const BOLD = 0x01;
        /// Center the run inside the description panel width.
        const CENTER = 0x02;
    }
}

/// One atomic unit of rich content.
///
/// Text content borrows from the string handed to [`MarkupCursor::new`];
/// nothing is copied or mutated during tokenization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Unmodified text run.
    Text(&'a str),
    /// Run under at least one `%B`/`%C` modifier.
    Emphasized(&'a str, RunAttrs),
    /// Inline image reference (path, prior to shell expansion).
    Image(&'a str),
    /// Explicit break (`%N`).
    LineBreak,
    /// Horizontal rule (`%L`).
    Rule,
}

/// Tokenizer state over one content string.
#[derive(Clone, Debug)]
pub struct MarkupCursor<'a> {
    rest: &'a str,
    stack: Vec<RunAttrs>,
}

impl<'a> MarkupCursor<'a> {
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        Self {
            rest: content,
            stack: Vec::new(),
        }
    }

    /// Content not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.rest
    }

    fn attrs(&self) -> RunAttrs {
        self.stack
            .iter()
            .fold(RunAttrs::empty(), |acc, &attr| acc | attr)
    }

    /// Produce the next token, cutting text runs so their rendered advance
    /// stays within `budget` pixels. Returns `None` when the content is
    /// exhausted or when not even one grapheme of the pending run fits.
    pub fn next<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        font: FontSpec<'_>,
        budget: f64,
    ) -> Option<Token<'a>> {
        loop {
            if self.rest.is_empty() {
                return None;
            }

            if let Some(after) = self.rest.strip_prefix('%') {
                match after.chars().next() {
                    Some('I') => {
                        let body = &after[1..];
                        // The closing '%' is left in place; like any other
                        // bare '%' it pops a modifier on the next call.
                        let (path, rest) = match body.find('%') {
                            Some(end) => (&body[..end], &body[end..]),
                            None => (body, ""),
                        };
                        self.rest = rest;
                        return Some(Token::Image(path));
                    }
                    Some('N') => {
                        self.rest = &after[1..];
                        return Some(Token::LineBreak);
                    }
                    Some('L') => {
                        self.rest = &after[1..];
                        return Some(Token::Rule);
                    }
                    Some('B') => {
                        self.stack.push(RunAttrs::BOLD);
                        self.rest = &after[1..];
                    }
                    Some('C') => {
                        self.stack.push(RunAttrs::CENTER);
                        self.rest = &after[1..];
                    }
                    Some('\\') => {
                        // `%\X` ends the innermost modifier right before a
                        // character that would otherwise read as a command.
                        self.stack.pop();
                        self.rest = &after[1..];
                    }
                    Some(_) | None => {
                        self.stack.pop();
                        self.rest = after;
                    }
                }
                continue;
            }

            // Text run. A leading `\%` contributes a literal percent; the
            // emitted slice starts at the '%' itself.
            let escape = self.rest.starts_with("\\%");
            let src = if escape { &self.rest[1..] } else { self.rest };
            let candidate = &src[..run_end(src, usize::from(escape))];

            let attrs = self.attrs();
            let mut measure_font = font;
            if attrs.contains(RunAttrs::BOLD) {
                measure_font.weight = FontWeight::Bold;
            }

            let run = fit_prefix(surface, measure_font, candidate, budget);
            if run.is_empty() {
                return None;
            }
            self.rest = &self.rest[usize::from(escape) + run.len()..];
            return Some(if attrs.is_empty() {
                Token::Text(run)
            } else {
                Token::Emphasized(run, attrs)
            });
        }
    }
}

/// Byte length of the run starting at `src`, stopping before the next `%`
/// command or `\%` escape. The first `skip` bytes are always included.
fn run_end(src: &str, skip: usize) -> usize {
    let bytes = src.as_bytes();
    let mut i = skip;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            break;
        }
        if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b'%') {
            break;
        }
        i += 1;
    }
    i
}

/// Longest grapheme-boundary prefix of `candidate` whose measured advance
/// fits within `budget`.
fn fit_prefix<'a, S: DrawSurface>(
    surface: &mut S,
    font: FontSpec<'_>,
    candidate: &'a str,
    budget: f64,
) -> &'a str {
    if surface.measure_text(candidate, font).x_advance <= budget {
        return candidate;
    }
    let mut fitting = 0;
    for (start, grapheme) in candidate.grapheme_indices(true) {
        let end = start + grapheme.len();
        if surface.measure_text(&candidate[..end], font).x_advance > budget {
            break;
        }
        fitting = end;
    }
    &candidate[..fitting]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offscreen::OffscreenSurface;

    // Offscreen metrics: 5px per column at size 10.
    fn font() -> FontSpec<'static> {
        FontSpec {
            family: "monospace",
            size: 10.0,
            weight: FontWeight::Normal,
        }
    }

    fn all_tokens<'a>(content: &'a str, budget: f64) -> Vec<Token<'a>> {
        let mut surface = OffscreenSurface::new();
        let mut cursor = MarkupCursor::new(content);
        let mut out = Vec::new();
        while let Some(token) = cursor.next(&mut surface, font(), budget) {
            out.push(token);
        }
        out
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(all_tokens("hello", 1000.0), vec![Token::Text("hello")]);
    }

    #[test]
    fn test_bold_then_pop() {
        assert_eq!(
            all_tokens("%Bbold% plain", 1000.0),
            vec![
                Token::Emphasized("bold", RunAttrs::BOLD),
                // The bare '%' pops BOLD but its following character
                // starts the plain run.
                Token::Text(" plain"),
            ]
        );
    }

    #[test]
    fn test_nested_modifiers_restore_outer() {
        let tokens = all_tokens("%Ca%Bb%c%d", 1000.0);
        assert_eq!(
            tokens,
            vec![
                Token::Emphasized("a", RunAttrs::CENTER),
                Token::Emphasized("b", RunAttrs::CENTER | RunAttrs::BOLD),
                Token::Emphasized("c", RunAttrs::CENTER),
                Token::Text("d"),
            ]
        );
    }

    #[test]
    fn test_image_and_breaks() {
        assert_eq!(
            all_tokens("%I~/pic.png%%Nx%L", 1000.0),
            vec![
                Token::Image("~/pic.png"),
                Token::LineBreak,
                Token::Text("x"),
                Token::Rule,
            ]
        );
    }

    #[test]
    fn test_unterminated_image_takes_rest() {
        assert_eq!(all_tokens("%Ifoo.png", 1000.0), vec![Token::Image("foo.png")]);
    }

    #[test]
    fn test_escaped_percent_is_literal() {
        assert_eq!(all_tokens("\\%Bnot bold", 1000.0), vec![Token::Text("%Bnot bold")]);
    }

    #[test]
    fn test_budget_cuts_at_grapheme_boundary() {
        // 5px per column: budget 25 fits exactly five columns.
        let mut surface = OffscreenSurface::new();
        let mut cursor = MarkupCursor::new("hello world");
        let first = cursor.next(&mut surface, font(), 25.0);
        assert_eq!(first, Some(Token::Text("hello")));
        assert_eq!(cursor.remaining(), " world");
    }

    #[test]
    fn test_zero_budget_ends_row() {
        let mut surface = OffscreenSurface::new();
        let mut cursor = MarkupCursor::new("hello");
        assert_eq!(cursor.next(&mut surface, font(), 2.0), None);
        // Nothing was consumed; a fresh budget can continue.
        assert_eq!(cursor.remaining(), "hello");
    }

    #[test]
    fn test_cut_run_resumes_on_next_call() {
        let mut surface = OffscreenSurface::new();
        let mut cursor = MarkupCursor::new("abcdef");
        assert_eq!(cursor.next(&mut surface, font(), 10.0), Some(Token::Text("ab")));
        assert_eq!(cursor.next(&mut surface, font(), 1000.0), Some(Token::Text("cdef")));
        assert_eq!(cursor.next(&mut surface, font(), 1000.0), None);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(all_tokens("", 1000.0), vec![]);
    }
}
