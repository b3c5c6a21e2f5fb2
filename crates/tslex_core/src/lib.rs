//! tslex_core: Core utilities shared by the tslex scanner crates.
//!
//! Provides text spans and ranges measured in UTF-16 code units, line-start
//! computation with line/character mapping, and spelling suggestions used
//! by diagnostics.

pub mod spelling;
pub mod text;

// Re-export commonly used types
pub use spelling::get_spelling_suggestion;
pub use text::{LineAndCharacter, LineMap, PositionError, TextPos, TextRange, TextSpan};
