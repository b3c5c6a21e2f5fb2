//! Trivia helpers over raw text: skipping, shebangs, conflict markers and
//! comment ranges.

use tslex_scanner::{
    could_start_trivia, for_each_leading_comment_range, get_leading_comment_ranges, get_shebang,
    get_trailing_comment_ranges, is_conflict_marker_trivia, reduce_each_trailing_comment_range, skip_trivia,
    to_utf16,
};
use tslex_syntax::CommentKind;

#[test]
fn test_skip_trivia_over_comments() {
    let text = to_utf16("  // c\n  /* d */ x");
    assert_eq!(skip_trivia(&text, 0, false, false, false), 17);
}

#[test]
fn test_skip_trivia_stops_after_line_break() {
    let text = to_utf16("  // c\n  x");
    assert_eq!(skip_trivia(&text, 0, true, false, false), 7);
}

#[test]
fn test_skip_trivia_stops_at_comments() {
    let text = to_utf16("  /* c */ x");
    assert_eq!(skip_trivia(&text, 0, false, true, false), 2);
}

#[test]
fn test_skip_trivia_jsdoc_asterisks() {
    let text = to_utf16("\n * a");
    assert_eq!(skip_trivia(&text, 0, false, false, true), 4);
    assert_eq!(skip_trivia(&text, 0, false, false, false), 2);
}

#[test]
fn test_skip_trivia_unicode_whitespace() {
    let text = to_utf16("\u{00A0}\u{3000}x");
    assert_eq!(skip_trivia(&text, 0, false, false, false), 2);
}

#[test]
fn test_skip_trivia_over_conflict_marker() {
    let text = to_utf16("<<<<<<< HEAD\nx");
    assert_eq!(skip_trivia(&text, 0, false, false, false), 13);
}

#[test]
fn test_skip_trivia_over_shebang() {
    let text = to_utf16("#!node\nx");
    assert_eq!(skip_trivia(&text, 0, false, false, false), 7);
    // Only at the very start.
    let text = to_utf16("x#!node");
    assert_eq!(skip_trivia(&text, 1, false, false, false), 1);
}

#[test]
fn test_get_shebang() {
    let text = to_utf16("#!/usr/bin/env node\nconsole.log(1)");
    assert_eq!(get_shebang(&text).as_deref(), Some("#!/usr/bin/env node"));
    assert_eq!(get_shebang(&to_utf16("// no")), None);
}

#[test]
fn test_conflict_marker_detection() {
    assert!(is_conflict_marker_trivia(&to_utf16("<<<<<<< HEAD\n"), 0));
    assert!(is_conflict_marker_trivia(&to_utf16("x\n=======\n"), 2));
    // Not at a line start.
    assert!(!is_conflict_marker_trivia(&to_utf16("x <<<<<<< HEAD\n"), 2));
    // `<<<<<<<` must be followed by a space.
    assert!(!is_conflict_marker_trivia(&to_utf16("<<<<<<<x\n"), 0));
    // Too short to hold a marker.
    assert!(!is_conflict_marker_trivia(&to_utf16("======="), 0));
}

#[test]
fn test_could_start_trivia() {
    let text = to_utf16("#! /x");
    assert!(could_start_trivia(&text, 0));
    assert!(!could_start_trivia(&text, 1));
    assert!(could_start_trivia(&text, 2));
    assert!(could_start_trivia(&text, 3));
    assert!(!could_start_trivia(&text, 4));
}

#[test]
fn test_leading_comment_ranges_at_file_start() {
    let text = to_utf16("/* a */\n// b\nx");
    let ranges = get_leading_comment_ranges(&text, 0).expect("comments");
    assert_eq!(ranges.len(), 2);
    assert_eq!((ranges[0].pos, ranges[0].end, ranges[0].kind), (0, 7, CommentKind::MultiLine));
    assert!(ranges[0].has_trailing_new_line);
    assert_eq!((ranges[1].pos, ranges[1].end, ranges[1].kind), (8, 12, CommentKind::SingleLine));
    assert!(ranges[1].has_trailing_new_line);
}

#[test]
fn test_leading_comments_start_after_line_break() {
    let text = to_utf16("x; // t\n/* l */ y");
    let ranges = get_leading_comment_ranges(&text, 2).expect("comments");
    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].pos, ranges[0].end), (8, 15));
    assert!(!ranges[0].has_trailing_new_line);
}

#[test]
fn test_trailing_comment_ranges_stop_at_line_break() {
    let text = to_utf16("x; // t\n/* l */ y");
    let ranges = get_trailing_comment_ranges(&text, 2).expect("comments");
    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].pos, ranges[0].end, ranges[0].kind), (3, 7, CommentKind::SingleLine));
    assert!(ranges[0].has_trailing_new_line);
}

#[test]
fn test_no_comment_ranges() {
    let text = to_utf16("x  y");
    assert!(get_leading_comment_ranges(&text, 1).is_none());
    assert!(get_trailing_comment_ranges(&text, 1).is_none());
}

#[test]
fn test_leading_comment_ranges_skip_shebang() {
    let text = to_utf16("#!node\n// a\nx");
    let ranges = get_leading_comment_ranges(&text, 0).expect("comments");
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].pos, 7);
}

#[test]
fn test_for_each_comment_range_stops_early() {
    let text = to_utf16("/* a */ /* b */\nx");
    let mut seen = Vec::new();
    let first = for_each_leading_comment_range(&text, 0, |range| {
        seen.push(range.pos);
        Some(range.end)
    });
    assert_eq!(first, Some(7));
    assert_eq!(seen, vec![0]);
}

#[test]
fn test_reduce_trailing_comment_ranges() {
    let text = to_utf16("x /* a */ /* b */ // c\ny");
    let total = reduce_each_trailing_comment_range(&text, 1, |range, acc: u32| acc + (range.end - range.pos), 0);
    assert_eq!(total, 7 + 7 + 4);
}
