//! Line and character math over source text, for callers that hold a
//! `&str` rather than a [`LineMap`].

use tslex_core::{LineAndCharacter, LineMap, PositionError};

/// Zero-based line and UTF-16 character of `position`.
pub fn get_line_and_character_of_position(text: &str, position: u32) -> LineAndCharacter {
    LineMap::from_text(text).line_and_character_of(position)
}

/// Offset of a line/character pair; errors when either runs past the text.
pub fn get_position_of_line_and_character(text: &str, line: u32, character: u32) -> Result<u32, PositionError> {
    LineMap::from_text(text).position_of(line, character, false)
}

/// Signed count of line breaks from `pos1` to `pos2`.
pub fn get_lines_between_positions(text: &str, pos1: u32, pos2: u32) -> i64 {
    LineMap::from_text(text).lines_between(pos1, pos2)
}
