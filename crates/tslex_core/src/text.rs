//! Text span and range types for source location tracking.
//!
//! All positions are offsets in UTF-16 code units, so a code point above
//! U+FFFF occupies two positions. This matches what editors report.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// A position in source text, measured in UTF-16 code units from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    /// The offset where this span starts.
    pub start: TextPos,
    /// The length of this span in code units.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self {
            start: pos,
            length: 0,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this span contains the given position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }

    #[inline]
    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Convert to an index range into a code-unit buffer.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A text range with start and end positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// Inclusive start.
    pub pos: TextPos,
    /// Exclusive end.
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    #[inline]
    pub fn to_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.pos as usize..self.end as usize
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        range.to_span()
    }
}

impl From<TextSpan> for TextRange {
    fn from(span: TextSpan) -> Self {
        TextRange::new(span.start, span.end())
    }
}

/// A zero-based line and a zero-based character offset within that line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LineAndCharacter {
    pub line: u32,
    /// Offset from the line start in UTF-16 code units.
    pub character: u32,
}

impl LineAndCharacter {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Failure to map a line/character pair back to an offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("bad line number {line}: the text has {line_count} line(s)")]
    LineOutOfRange { line: u32, line_count: usize },
    #[error("position {position} runs past the end of line {line}")]
    PastEndOfLine { line: u32, position: TextPos },
    #[error("position {position} runs past the end of the text ({length} code units)")]
    PastEndOfText { position: TextPos, length: TextPos },
}

#[inline]
fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

/// Compute the offset of the first code unit of every line.
///
/// `\r\n`, `\r`, `\n`, U+2028 and U+2029 all end a line; `\r\n` counts once.
/// The result always starts with `0`.
pub fn compute_line_starts(text: &[u16]) -> Vec<TextPos> {
    let mut result = Vec::new();
    let mut pos = 0usize;
    let mut line_start = 0usize;
    while pos < text.len() {
        let ch = text[pos];
        pos += 1;
        if ch == 0x000D {
            if text.get(pos) == Some(&0x000A) {
                pos += 1;
            }
            result.push(line_start as TextPos);
            line_start = pos;
        } else if ch == 0x000A || (ch > 0x7F && is_line_terminator(ch)) {
            result.push(line_start as TextPos);
            line_start = pos;
        }
    }
    result.push(line_start as TextPos);
    result
}

/// Binary search for the line containing `position`, optionally starting the
/// search at `lower_bound`.
pub fn compute_line_of_position(
    line_starts: &[TextPos],
    position: TextPos,
    lower_bound: Option<usize>,
) -> usize {
    let lower = lower_bound.unwrap_or(0).min(line_starts.len());
    match line_starts[lower..].binary_search(&position) {
        Ok(index) => lower + index,
        // Positions before the first line start still belong to line 0.
        Err(index) => (lower + index).saturating_sub(1),
    }
}

pub fn compute_line_and_character_of_position(
    line_starts: &[TextPos],
    position: TextPos,
) -> LineAndCharacter {
    let line = compute_line_of_position(line_starts, position, None);
    let start = line_starts.get(line).copied().unwrap_or(0);
    LineAndCharacter {
        line: line as u32,
        character: position.saturating_sub(start),
    }
}

/// Map a line/character pair back to an offset.
///
/// With `allow_edits` the line is clamped into range and the result clamped
/// to the start of the next line (or `text_len` on the last line), which is
/// what callers holding stale positions after an edit want. Without it, out
/// of range input is an error.
pub fn compute_position_of_line_and_character(
    line_starts: &[TextPos],
    line: u32,
    character: u32,
    text_len: Option<TextPos>,
    allow_edits: bool,
) -> Result<TextPos, PositionError> {
    let line_count = line_starts.len();
    let mut line_index = line as usize;
    if line_index >= line_count {
        if !allow_edits || line_count == 0 {
            return Err(PositionError::LineOutOfRange { line, line_count });
        }
        line_index = line_count - 1;
    }

    let position = line_starts[line_index] + character;
    let next_line_start = line_starts.get(line_index + 1).copied();
    if allow_edits {
        return Ok(match (next_line_start, text_len) {
            (Some(next), _) if position > next => next,
            (None, Some(len)) if position > len => len,
            _ => position,
        });
    }

    match (next_line_start, text_len) {
        (Some(next), _) if position >= next => Err(PositionError::PastEndOfLine {
            line,
            position,
        }),
        (None, Some(length)) if position > length => {
            Err(PositionError::PastEndOfText { position, length })
        }
        _ => Ok(position),
    }
}

/// A map from offsets to line numbers, built once per source buffer.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<TextPos>,
    text_len: TextPos,
}

impl LineMap {
    /// Build a line map from UTF-16 source text.
    pub fn new(text: &[u16]) -> Self {
        Self {
            line_starts: compute_line_starts(text),
            text_len: text.len() as TextPos,
        }
    }

    /// Build a line map from a Rust string, measuring in UTF-16 code units.
    pub fn from_text(text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        Self::new(&units)
    }

    /// Get the line number (0-based) for an offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        compute_line_of_position(&self.line_starts, pos, None) as u32
    }

    pub fn line_and_character_of(&self, pos: TextPos) -> LineAndCharacter {
        compute_line_and_character_of_position(&self.line_starts, pos)
    }

    /// Offset of a line/character pair; see [`compute_position_of_line_and_character`].
    pub fn position_of(
        &self,
        line: u32,
        character: u32,
        allow_edits: bool,
    ) -> Result<TextPos, PositionError> {
        compute_position_of_line_and_character(
            &self.line_starts,
            line,
            character,
            Some(self.text_len),
            allow_edits,
        )
    }

    /// Signed number of line breaks between two offsets.
    pub fn lines_between(&self, pos1: TextPos, pos2: TextPos) -> i64 {
        if pos1 == pos2 {
            return 0;
        }
        let lower = pos1.min(pos2);
        let is_negative = lower == pos2;
        let upper = if is_negative { pos1 } else { pos2 };
        let lower_line = compute_line_of_position(&self.line_starts, lower, None);
        let upper_line =
            compute_line_of_position(&self.line_starts, upper, Some(lower_line));
        if is_negative {
            lower_line as i64 - upper_line as i64
        } else {
            upper_line as i64 - lower_line as i64
        }
    }

    pub fn line_start(&self, line: u32) -> Option<TextPos> {
        self.line_starts.get(line as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_starts(&self) -> &[TextPos] {
        &self.line_starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
        assert_eq!(TextSpan::from_bounds(5, 15), span);
    }

    #[test]
    fn test_line_starts_all_terminators() {
        let text = units("a\r\nb\rc\nd\u{2028}e\u{2029}f");
        assert_eq!(compute_line_starts(&text), vec![0, 3, 5, 7, 9, 11]);
    }

    #[test]
    fn test_line_starts_empty_and_trailing_break() {
        assert_eq!(compute_line_starts(&[]), vec![0]);
        assert_eq!(compute_line_starts(&units("x\n")), vec![0, 2]);
    }

    #[test]
    fn test_line_map() {
        let map = LineMap::from_text("line1\nline2\nline3");
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.line_of(0), 0);
        assert_eq!(map.line_of(5), 0);
        assert_eq!(map.line_of(6), 1);
        assert_eq!(map.line_of(12), 2);
        assert_eq!(map.line_and_character_of(8), LineAndCharacter::new(1, 2));
    }

    #[test]
    fn test_line_map_counts_utf16_units() {
        // U+1F600 is a surrogate pair, so 'x' sits at offset 2.
        let map = LineMap::from_text("\u{1F600}x\ny");
        assert_eq!(map.line_starts(), &[0, 4]);
        assert_eq!(map.line_and_character_of(2), LineAndCharacter::new(0, 2));
    }

    #[test]
    fn test_position_of_line_and_character() {
        let map = LineMap::from_text("ab\ncd");
        assert_eq!(map.position_of(1, 1, false), Ok(4));
        assert_eq!(
            map.position_of(2, 0, false),
            Err(PositionError::LineOutOfRange {
                line: 2,
                line_count: 2
            })
        );
        assert!(matches!(
            map.position_of(0, 3, false),
            Err(PositionError::PastEndOfLine { line: 0, position: 3 })
        ));
        assert_eq!(map.position_of(0, 10, true), Ok(3));
        assert_eq!(map.position_of(7, 10, true), Ok(5));
    }

    #[test]
    fn test_lines_between() {
        let map = LineMap::from_text("a\nb\nc\nd");
        assert_eq!(map.lines_between(0, 6), 3);
        assert_eq!(map.lines_between(6, 0), -3);
        assert_eq!(map.lines_between(2, 2), 0);
    }
}
