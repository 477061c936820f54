use std::{fmt::Display, rc::Rc};

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Assign, // =
    Plus, // +
    Minus, // -
    Star, // *
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    Semicolon, // ;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // {/ <цифра> /}
    Number(i64),
    // (<буква>|_){<буква>|<цифра>|_}
    Identifier(Rc<str>),
    Operator(Operator),
    Punctuation(Punctuation),
    OpenParen, // (
    CloseParen, // )
}

impl Token {
    pub fn as_literal(&self) -> String {
        match self {
            Token::Number(value) => format!("{}", value),
            Token::Identifier(name) => format!("{}", name),
            Token::Operator(Operator::Assign) => "=".to_string(),
            Token::Operator(Operator::Plus) => "+".to_string(),
            Token::Operator(Operator::Minus) => "-".to_string(),
            Token::Operator(Operator::Star) => "*".to_string(),
            Token::Punctuation(Punctuation::Semicolon) => ";".to_string(),
            Token::OpenParen => "(".to_string(),
            Token::CloseParen => ")".to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(_) => write!(f, "Number({})", self.as_literal()),
            Token::Identifier(_) => write!(f, "Identifier({})", self.as_literal()),
            Token::Operator(_) => write!(f, "Operator({})", self.as_literal()),
            Token::Punctuation(_) => write!(f, "Punctuation({})", self.as_literal()),
            Token::OpenParen | Token::CloseParen => write!(f, "{}", self.as_literal()),
        }
    }
}

/// A token together with the line it began on and its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub line: u32,
    pub location: SrcSpan,
}

impl Spanned {
    pub fn new(token: Token, line: u32, start: u32, end: u32) -> Self {
        Self {
            token,
            line,
            location: SrcSpan::from(start, end),
        }
    }
}
