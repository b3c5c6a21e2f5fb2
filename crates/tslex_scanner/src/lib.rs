//! tslex_scanner: Lexer/tokenizer for TypeScript source code.
//!
//! Produces tokens from UTF-16 source text with support for:
//! - All JavaScript/TypeScript token types, with numeric separators, bigints
//!   and legacy octal literals
//! - Template literals and the parser-driven re-scan family
//! - JSX text and attribute values, JSDoc comment tokens
//! - Regular expression literals, validated against the full pattern grammar
//! - Unicode identifiers for every language target
//!
//! Errors never stop a scan; they go to the callback installed with
//! [`Scanner::set_on_error`], for example a [`DiagnosticSink`].

mod char_class;
mod char_codes;
mod diagnostic_sink;
mod jsx;
mod literals;
mod number_format;
mod positions;
mod regexp;
mod rescan;
mod scanner;
mod token;
mod trivia;
mod unicode;
mod unicode_properties;
mod utf16;

pub use char_class::{is_identifier_part, is_identifier_part_in_variant, is_identifier_start, is_identifier_text};
pub use char_codes::{char_size, is_line_break, is_white_space_like, is_white_space_single_line, EOF};
pub use diagnostic_sink::DiagnosticSink;
pub use number_format::{js_number_to_string, parse_pseudo_big_int};
pub use positions::{get_line_and_character_of_position, get_lines_between_positions, get_position_of_line_and_character};
pub use regexp::RegularExpressionFlags;
pub use scanner::{ErrorCallback, Scanner, ScannerState};
pub use token::{tokenize, TokenInfo};
pub use trivia::{
    could_start_trivia, for_each_leading_comment_range, for_each_trailing_comment_range, get_leading_comment_ranges,
    get_shebang, get_trailing_comment_ranges, is_conflict_marker_trivia, is_shebang_trivia,
    reduce_each_leading_comment_range, reduce_each_trailing_comment_range, scan_conflict_marker_trivia,
    scan_shebang_trivia, skip_trivia, MERGE_CONFLICT_MARKER_LENGTH,
};
pub use utf16::{code_point_at, from_utf16, to_utf16, utf16_encode_as_string};
