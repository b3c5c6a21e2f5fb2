//! tslex_options: Scanner configuration.
//!
//! Language level, variant and file-kind settings that change how source text
//! is tokenized, plus the `ScannerOptions` record that bundles them and can be
//! read from JSON using tsconfig-style spellings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading scanner options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("unknown script target '{0}'")]
    UnknownTarget(String),
    #[error("unknown language variant '{0}'")]
    UnknownLanguageVariant(String),
    #[error("unknown script kind '{0}'")]
    UnknownScriptKind(String),
    #[error("unknown JSDoc parsing mode '{0}'")]
    UnknownJSDocParsingMode(String),
    #[error("malformed scanner options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Script target version. Ordered from oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum ScriptTarget {
    ES3 = 0,
    ES5 = 1,
    ES2015 = 2,
    ES2016 = 3,
    ES2017 = 4,
    ES2018 = 5,
    ES2019 = 6,
    ES2020 = 7,
    ES2021 = 8,
    ES2022 = 9,
    ES2023 = 10,
    ES2024 = 11,
    ESNext = 99,
}

impl ScriptTarget {
    pub const LATEST: ScriptTarget = ScriptTarget::ESNext;

    /// The spelling used in diagnostics, e.g. `ES2018`.
    pub fn name(self) -> &'static str {
        match self {
            ScriptTarget::ES3 => "ES3",
            ScriptTarget::ES5 => "ES5",
            ScriptTarget::ES2015 => "ES2015",
            ScriptTarget::ES2016 => "ES2016",
            ScriptTarget::ES2017 => "ES2017",
            ScriptTarget::ES2018 => "ES2018",
            ScriptTarget::ES2019 => "ES2019",
            ScriptTarget::ES2020 => "ES2020",
            ScriptTarget::ES2021 => "ES2021",
            ScriptTarget::ES2022 => "ES2022",
            ScriptTarget::ES2023 => "ES2023",
            ScriptTarget::ES2024 => "ES2024",
            ScriptTarget::ESNext => "ESNext",
        }
    }
}

impl Default for ScriptTarget {
    fn default() -> Self {
        ScriptTarget::LATEST
    }
}

impl fmt::Display for ScriptTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScriptTarget {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let target = match s.to_ascii_lowercase().as_str() {
            "es3" => ScriptTarget::ES3,
            "es5" => ScriptTarget::ES5,
            "es6" | "es2015" => ScriptTarget::ES2015,
            "es2016" => ScriptTarget::ES2016,
            "es2017" => ScriptTarget::ES2017,
            "es2018" => ScriptTarget::ES2018,
            "es2019" => ScriptTarget::ES2019,
            "es2020" => ScriptTarget::ES2020,
            "es2021" => ScriptTarget::ES2021,
            "es2022" => ScriptTarget::ES2022,
            "es2023" => ScriptTarget::ES2023,
            "es2024" => ScriptTarget::ES2024,
            "esnext" | "latest" => ScriptTarget::ESNext,
            _ => return Err(OptionsError::UnknownTarget(s.to_string())),
        };
        Ok(target)
    }
}

impl TryFrom<String> for ScriptTarget {
    type Error = OptionsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScriptTarget> for String {
    fn from(target: ScriptTarget) -> Self {
        target.name().to_string()
    }
}

/// Whether JSX syntax is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageVariant {
    #[default]
    Standard,
    #[serde(rename = "JSX", alias = "jsx")]
    JSX,
}

impl FromStr for LanguageVariant {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(LanguageVariant::Standard),
            "jsx" => Ok(LanguageVariant::JSX),
            _ => Err(OptionsError::UnknownLanguageVariant(s.to_string())),
        }
    }
}

/// The kind of file being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScriptKind {
    #[default]
    Unknown,
    JS,
    JSX,
    TS,
    TSX,
    External,
    JSON,
    Deferred,
}

impl ScriptKind {
    /// TypeScript sources carry their own type syntax.
    pub fn is_typescript(self) -> bool {
        matches!(self, ScriptKind::TS | ScriptKind::TSX)
    }

    /// Guess the kind from a file extension such as `.tsx`.
    pub fn from_extension(extension: &str) -> ScriptKind {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "js" | "cjs" | "mjs" => ScriptKind::JS,
            "jsx" => ScriptKind::JSX,
            "ts" | "cts" | "mts" => ScriptKind::TS,
            "tsx" => ScriptKind::TSX,
            "json" => ScriptKind::JSON,
            _ => ScriptKind::Unknown,
        }
    }
}

impl FromStr for ScriptKind {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "unknown" => ScriptKind::Unknown,
            "js" => ScriptKind::JS,
            "jsx" => ScriptKind::JSX,
            "ts" => ScriptKind::TS,
            "tsx" => ScriptKind::TSX,
            "external" => ScriptKind::External,
            "json" => ScriptKind::JSON,
            "deferred" => ScriptKind::Deferred,
            _ => return Err(OptionsError::UnknownScriptKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// How much of each `/** ... */` comment should be handed to a JSDoc parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JSDocParsingMode {
    #[default]
    ParseAll,
    ParseNone,
    /// Only comments that mention `@see` or `@link`.
    ParseForTypeErrors,
    /// Skip JSDoc in TypeScript files entirely.
    ParseForTypeInfo,
}

impl FromStr for JSDocParsingMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "parseall" => Ok(JSDocParsingMode::ParseAll),
            "parsenone" => Ok(JSDocParsingMode::ParseNone),
            "parsefortypeerrors" => Ok(JSDocParsingMode::ParseForTypeErrors),
            "parsefortypeinfo" => Ok(JSDocParsingMode::ParseForTypeInfo),
            _ => Err(OptionsError::UnknownJSDocParsingMode(s.to_string())),
        }
    }
}

/// Everything a scanner needs to know before it sees any text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScannerOptions {
    pub target: ScriptTarget,
    pub language_variant: LanguageVariant,
    /// Skip whitespace and comments instead of returning them as tokens.
    pub skip_trivia: bool,
    pub script_kind: ScriptKind,
    pub jsdoc_parsing_mode: JSDocParsingMode,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            target: ScriptTarget::LATEST,
            language_variant: LanguageVariant::Standard,
            skip_trivia: true,
            script_kind: ScriptKind::Unknown,
            jsdoc_parsing_mode: JSDocParsingMode::ParseAll,
        }
    }
}

impl ScannerOptions {
    pub fn with_target(mut self, target: ScriptTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_language_variant(mut self, variant: LanguageVariant) -> Self {
        self.language_variant = variant;
        self
    }

    pub fn with_skip_trivia(mut self, skip_trivia: bool) -> Self {
        self.skip_trivia = skip_trivia;
        self
    }

    pub fn with_script_kind(mut self, script_kind: ScriptKind) -> Self {
        self.script_kind = script_kind;
        self
    }

    pub fn with_jsdoc_parsing_mode(mut self, mode: JSDocParsingMode) -> Self {
        self.jsdoc_parsing_mode = mode;
        self
    }
}

/// Parse scanner options from a JSON string.
pub fn parse_scanner_options(content: &str) -> Result<ScannerOptions, OptionsError> {
    Ok(serde_json::from_str(content)?)
}
