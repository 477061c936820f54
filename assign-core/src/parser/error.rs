use thiserror::Error;

use crate::{lexer::prelude::LexicalError, utils::prelude::SrcSpan};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorType {
    #[error("syntax error")]
    SyntaxError,
    #[error("expected variable")]
    ExpectedVariable,
    #[error("expected assignment")]
    ExpectedAssignment,
    #[error("expected semicolon")]
    ExpectedSemicolon,
    #[error("unknown variable")]
    UnknownVariable { name: String },
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("missing closing brace")]
    MissingClosingBrace,
    #[error("integer overflow")]
    Overflow,
    #[error(transparent)]
    LexError { error: LexicalError },
}

/// First problem hit while running a program. Its `Display` is the recorded
/// diagnostic message, e.g. `expected semicolon at line 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub line: u32,
    pub location: SrcSpan
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            ParseErrorType::LexError { error } => write!(f, "{error}"),
            error => write!(f, "{error} at line {}", self.line),
        }
    }
}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        Self {
            line: error.line,
            location: error.location,
            error: ParseErrorType::LexError { error },
        }
    }
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::SyntaxError => ("Statements must start with a variable", vec![]),
            ParseErrorType::ExpectedVariable => ("Expected variable", vec![]),
            ParseErrorType::ExpectedAssignment => ("Expected `=`", vec![]),
            ParseErrorType::ExpectedSemicolon => ("Expected `;`", vec![]),
            ParseErrorType::UnknownVariable { name } => {
                ("Unknown variable", vec![format!("`{name}` is used before it is assigned")])
            },
            ParseErrorType::UnexpectedToken => {
                ("Not expected this", vec![
                    "Expected one of: ".to_string(),
                    "- a number".to_string(),
                    "- a variable".to_string(),
                    "- `(`".to_string(),
                    "- `+` or `-`".to_string(),
                ])
            },
            ParseErrorType::MissingClosingBrace => ("Expected `)`", vec![]),
            ParseErrorType::Overflow => {
                ("Integer overflow", vec![format!("values must fit in {} ..= {}", i64::MIN, i64::MAX)])
            },
            ParseErrorType::LexError { error } => error.details()
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, line: u32, location: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, line, location })
}
