//! Trivia utilities that work on raw text without a scanner: skipping
//! whitespace and comments, shebangs, merge conflict markers and comment
//! range collection.

use std::ops::ControlFlow;

use crate::char_codes::*;
use crate::utf16::from_utf16;
use tslex_syntax::{CommentKind, CommentRange};

/// Length of `<<<<<<<`, `=======`, `|||||||` and `>>>>>>>`.
pub const MERGE_CONFLICT_MARKER_LENGTH: usize = 7;

#[inline]
fn unit(text: &[u16], pos: usize) -> u32 {
    text.get(pos).map_or(EOF, |&u| u as u32)
}

/// Whether the text starts with `#!`.
pub fn is_shebang_trivia(text: &[u16]) -> bool {
    unit(text, 0) == HASH && unit(text, 1) == EXCLAMATION
}

/// End of the shebang line that starts at `pos` (always 0).
pub fn scan_shebang_trivia(text: &[u16], pos: usize) -> usize {
    let mut end = pos + 2;
    while end < text.len() && !is_line_break(text[end] as u32) {
        end += 1;
    }
    end
}

/// The shebang line, without its line terminator.
pub fn get_shebang(text: &[u16]) -> Option<String> {
    if is_shebang_trivia(text) {
        Some(from_utf16(&text[..scan_shebang_trivia(text, 0)]))
    } else {
        None
    }
}

/// Whether a merge conflict marker begins at `pos`.
///
/// Markers must start a line and be followed by a space, except `=======`
/// which may be followed by anything.
pub fn is_conflict_marker_trivia(text: &[u16], pos: usize) -> bool {
    if pos != 0 && !is_line_break(unit(text, pos - 1)) {
        return false;
    }
    if pos + MERGE_CONFLICT_MARKER_LENGTH >= text.len() {
        return false;
    }
    let ch = text[pos];
    if text[pos..pos + MERGE_CONFLICT_MARKER_LENGTH].iter().any(|&u| u != ch) {
        return false;
    }
    ch as u32 == EQUALS || unit(text, pos + MERGE_CONFLICT_MARKER_LENGTH) == SPACE
}

/// End of the conflict region starting at `pos`.
///
/// `<<<<<<<` and `>>>>>>>` cover their own line. `|||||||` and `=======`
/// swallow everything up to the next marker of a different kind.
pub fn scan_conflict_marker_trivia(text: &[u16], mut pos: usize) -> usize {
    let ch = unit(text, pos);
    let len = text.len();
    if ch == LESS_THAN || ch == GREATER_THAN {
        while pos < len && !is_line_break(text[pos] as u32) {
            pos += 1;
        }
    } else {
        debug_assert!(ch == BAR || ch == EQUALS);
        while pos < len {
            let current = text[pos] as u32;
            if (current == EQUALS || current == GREATER_THAN)
                && current != ch
                && is_conflict_marker_trivia(text, pos)
            {
                break;
            }
            pos += 1;
        }
    }
    pos
}

/// Whether `pos` could start whitespace, a comment, a shebang or a
/// conflict marker. Cheap pre-check for [`skip_trivia`].
pub fn could_start_trivia(text: &[u16], pos: usize) -> bool {
    match unit(text, pos) {
        CARRIAGE_RETURN | LINE_FEED | TAB | VERTICAL_TAB | FORM_FEED | SPACE | SLASH
        | LESS_THAN | BAR | EQUALS | GREATER_THAN => true,
        HASH => pos == 0,
        EOF => false,
        ch => ch > MAX_ASCII_CHARACTER,
    }
}

/// Skip whitespace, comments, a leading shebang and conflict markers.
///
/// With `in_jsdoc`, a single `*` right after each line break is skipped too.
pub fn skip_trivia(
    text: &[u16],
    mut pos: usize,
    stop_after_line_break: bool,
    stop_at_comments: bool,
    in_jsdoc: bool,
) -> usize {
    let mut can_consume_star = false;
    loop {
        let ch = unit(text, pos);
        match ch {
            CARRIAGE_RETURN | LINE_FEED => {
                if ch == CARRIAGE_RETURN && unit(text, pos + 1) == LINE_FEED {
                    pos += 1;
                }
                pos += 1;
                if stop_after_line_break {
                    return pos;
                }
                can_consume_star = in_jsdoc;
                continue;
            }
            TAB | VERTICAL_TAB | FORM_FEED | SPACE => {
                pos += 1;
                continue;
            }
            SLASH if !stop_at_comments => {
                if unit(text, pos + 1) == SLASH {
                    pos += 2;
                    while pos < text.len() && !is_line_break(text[pos] as u32) {
                        pos += 1;
                    }
                    can_consume_star = false;
                    continue;
                }
                if unit(text, pos + 1) == ASTERISK {
                    pos += 2;
                    while pos < text.len() {
                        if text[pos] as u32 == ASTERISK && unit(text, pos + 1) == SLASH {
                            pos += 2;
                            break;
                        }
                        pos += 1;
                    }
                    can_consume_star = false;
                    continue;
                }
            }
            LESS_THAN | BAR | EQUALS | GREATER_THAN => {
                if is_conflict_marker_trivia(text, pos) {
                    pos = scan_conflict_marker_trivia(text, pos);
                    can_consume_star = false;
                    continue;
                }
            }
            HASH => {
                if pos == 0 && is_shebang_trivia(text) {
                    pos = scan_shebang_trivia(text, pos);
                    can_consume_star = false;
                    continue;
                }
            }
            ASTERISK => {
                if can_consume_star {
                    pos += 1;
                    can_consume_star = false;
                    continue;
                }
            }
            _ => {
                if ch > MAX_ASCII_CHARACTER && ch != EOF && is_white_space_like(ch) {
                    pos += 1;
                    continue;
                }
            }
        }
        return pos;
    }
}

/// Walk the comments after `pos`, handing each finished range to `visit`.
///
/// Leading collection starts after the first line break (or immediately at
/// position 0, past any shebang). Trailing collection stops at the first
/// line break. A range is only reported once the next one, or the end, is
/// known, so `has_trailing_new_line` is accurate.
fn iterate_comment_ranges<B>(
    text: &[u16],
    mut pos: usize,
    trailing: bool,
    mut visit: impl FnMut(CommentRange) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let mut pending: Option<CommentRange> = None;
    let mut collecting = trailing;
    if pos == 0 {
        collecting = true;
        if is_shebang_trivia(text) {
            pos = scan_shebang_trivia(text, 0);
        }
    }

    while pos < text.len() {
        let ch = text[pos] as u32;
        match ch {
            CARRIAGE_RETURN | LINE_FEED => {
                if ch == CARRIAGE_RETURN && unit(text, pos + 1) == LINE_FEED {
                    pos += 1;
                }
                pos += 1;
                if trailing {
                    break;
                }
                collecting = true;
                if let Some(range) = pending.as_mut() {
                    range.has_trailing_new_line = true;
                }
            }
            TAB | VERTICAL_TAB | FORM_FEED | SPACE => pos += 1,
            SLASH => {
                let next = unit(text, pos + 1);
                if next != SLASH && next != ASTERISK {
                    break;
                }
                let kind = if next == SLASH { CommentKind::SingleLine } else { CommentKind::MultiLine };
                let start = pos;
                let mut has_trailing_new_line = false;
                pos += 2;
                if kind == CommentKind::SingleLine {
                    while pos < text.len() {
                        if is_line_break(text[pos] as u32) {
                            has_trailing_new_line = true;
                            break;
                        }
                        pos += 1;
                    }
                } else {
                    while pos < text.len() {
                        if text[pos] as u32 == ASTERISK && unit(text, pos + 1) == SLASH {
                            pos += 2;
                            break;
                        }
                        pos += 1;
                    }
                }
                if collecting {
                    if let Some(range) = pending.take() {
                        if let ControlFlow::Break(value) = visit(range) {
                            return ControlFlow::Break(value);
                        }
                    }
                    pending = Some(CommentRange {
                        pos: start as u32,
                        end: pos as u32,
                        kind,
                        has_trailing_new_line,
                    });
                }
            }
            _ if ch > MAX_ASCII_CHARACTER && is_white_space_like(ch) => {
                if is_line_break(ch) {
                    if let Some(range) = pending.as_mut() {
                        range.has_trailing_new_line = true;
                    }
                }
                pos += 1;
            }
            _ => break,
        }
    }

    match pending {
        Some(range) => visit(range),
        None => ControlFlow::Continue(()),
    }
}

/// Call `cb` for each leading comment until it returns `Some`.
pub fn for_each_leading_comment_range<U>(
    text: &[u16],
    pos: usize,
    mut cb: impl FnMut(CommentRange) -> Option<U>,
) -> Option<U> {
    match iterate_comment_ranges(text, pos, false, |range| match cb(range) {
        Some(value) => ControlFlow::Break(value),
        None => ControlFlow::Continue(()),
    }) {
        ControlFlow::Break(value) => Some(value),
        ControlFlow::Continue(()) => None,
    }
}

/// Call `cb` for each trailing comment until it returns `Some`.
pub fn for_each_trailing_comment_range<U>(
    text: &[u16],
    pos: usize,
    mut cb: impl FnMut(CommentRange) -> Option<U>,
) -> Option<U> {
    match iterate_comment_ranges(text, pos, true, |range| match cb(range) {
        Some(value) => ControlFlow::Break(value),
        None => ControlFlow::Continue(()),
    }) {
        ControlFlow::Break(value) => Some(value),
        ControlFlow::Continue(()) => None,
    }
}

pub fn reduce_each_leading_comment_range<U>(
    text: &[u16],
    pos: usize,
    mut cb: impl FnMut(CommentRange, U) -> U,
    initial: U,
) -> U {
    let mut ranges = Vec::new();
    let _ = iterate_comment_ranges::<()>(text, pos, false, |range| {
        ranges.push(range);
        ControlFlow::Continue(())
    });
    ranges.into_iter().fold(initial, |acc, range| cb(range, acc))
}

pub fn reduce_each_trailing_comment_range<U>(
    text: &[u16],
    pos: usize,
    mut cb: impl FnMut(CommentRange, U) -> U,
    initial: U,
) -> U {
    let mut ranges = Vec::new();
    let _ = iterate_comment_ranges::<()>(text, pos, true, |range| {
        ranges.push(range);
        ControlFlow::Continue(())
    });
    ranges.into_iter().fold(initial, |acc, range| cb(range, acc))
}

/// Comments before the token at `pos`. `None` when there are none.
pub fn get_leading_comment_ranges(text: &[u16], pos: usize) -> Option<Vec<CommentRange>> {
    let ranges = reduce_each_leading_comment_range(
        text,
        pos,
        |range, mut acc: Vec<CommentRange>| {
            acc.push(range);
            acc
        },
        Vec::new(),
    );
    (!ranges.is_empty()).then_some(ranges)
}

/// Comments after `pos` on the same line. `None` when there are none.
pub fn get_trailing_comment_ranges(text: &[u16], pos: usize) -> Option<Vec<CommentRange>> {
    let ranges = reduce_each_trailing_comment_range(
        text,
        pos,
        |range, mut acc: Vec<CommentRange>| {
            acc.push(range);
            acc
        },
        Vec::new(),
    );
    (!ranges.is_empty()).then_some(ranges)
}
