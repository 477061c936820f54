use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    #[error("invalid number format")]
    InvalidNumberFormat,
    #[error("unexpected character")]
    UnexpectedCharacter { ch: char },
    #[error("number too large")]
    NumberTooLarge,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{error} at line {line}")]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub line: u32,
    pub location: SrcSpan,
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::InvalidNumberFormat => {
                ("Invalid number format", vec![
                    "a run of leading zeros may not be followed by other digits".to_string(),
                    "a zero must be followed by whitespace, an operator, `;` or `)`".to_string()
                ])
            },
            LexicalErrorType::UnexpectedCharacter { ch } => {
                ("Unexpected character", vec![format!("don't know what to do with {ch:?}")])
            },
            LexicalErrorType::NumberTooLarge => {
                ("Number too large", vec![format!("literals must fit in {} ..= {}", i64::MIN, i64::MAX)])
            }
        }
    }
}
