//! tslex_syntax: Token kinds and token metadata.
//!
//! Contains the ordered SyntaxKind enum, the spelling tables that map tokens
//! to and from text, TokenFlags, and the comment range and directive records
//! reported by the scanner.

pub mod syntax_kind;
pub mod types;

pub use syntax_kind::{keywords, string_to_token, token_to_string, SyntaxKind};
pub use types::*;
