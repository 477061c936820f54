use crate::{
    environment::prelude::Environment,
    lexer::prelude::{Lexer, Operator, Punctuation, Spanned, Token},
    utils::prelude::SrcSpan
};
use super::error::{parse_error, ParseError, ParseErrorType};

/// Recursive-descent parser that evaluates while it descends. No syntax
/// tree is built: every production returns the value it stands for.
///
/// ```text
/// Statement  := Identifier '=' Expression ';'
/// Expression := Term (('+' | '-') Term)*
/// Term       := Factor ('*' Factor)*
/// Factor     := '(' Expression ')' | ('+' | '-') Factor | Number | Identifier
/// ```
pub struct Parser<T: Iterator<Item = (u32, char)>> {
    lexer: Lexer<T>,
}

impl<T: Iterator<Item = (u32, char)>> Parser<T> {
    pub fn new(lexer: Lexer<T>) -> Self {
        Self { lexer }
    }

    /// Runs the next statement against `env`. Returns `Ok(false)` once the
    /// input is exhausted.
    pub fn next_statement(&mut self, env: &mut Environment) -> Result<bool, ParseError> {
        let next = self.lexer.peek_token()?
            .map(|spanned| (matches!(spanned.token, Token::Identifier(_)), spanned.line, spanned.location));

        match next {
            None => Ok(false),
            Some((true, _, _)) => {
                self.parse_statement(env)?;
                Ok(true)
            },
            Some((false, line, location)) => parse_error(ParseErrorType::SyntaxError, line, location)
        }
    }

    /// `name = expression;` The binding is stored only once the whole
    /// statement has been read.
    pub fn parse_statement(&mut self, env: &mut Environment) -> Result<(), ParseError> {
        let name = match self.lexer.next_token()? {
            Some(Spanned { token: Token::Identifier(name), .. }) => name,
            other => return Err(self.error_at(ParseErrorType::ExpectedVariable, other.as_ref()))
        };

        match self.lexer.next_token()? {
            Some(Spanned { token: Token::Operator(Operator::Assign), .. }) => {},
            other => return Err(self.error_at(ParseErrorType::ExpectedAssignment, other.as_ref()))
        }

        let value = self.parse_expression(env)?;

        match self.lexer.next_token()? {
            Some(Spanned { token: Token::Punctuation(Punctuation::Semicolon), .. }) => {},
            other => return Err(self.error_at(ParseErrorType::ExpectedSemicolon, other.as_ref()))
        }

        env.set(name, value);

        Ok(())
    }

    pub fn parse_expression(&mut self, env: &Environment) -> Result<i64, ParseError> {
        let mut total = self.parse_term(env)?;

        loop {
            let (op, line, location) = match self.lexer.peek_token()? {
                Some(Spanned {
                    token: Token::Operator(op @ (Operator::Plus | Operator::Minus)),
                    line,
                    location
                }) => (*op, *line, *location),
                _ => break
            };

            self.lexer.next_token()?;
            let term = self.parse_term(env)?;

            let folded = match op {
                Operator::Plus => total.checked_add(term),
                _ => total.checked_sub(term),
            };

            total = match folded {
                Some(value) => value,
                None => return parse_error(ParseErrorType::Overflow, line, location)
            };
        }

        Ok(total)
    }

    pub fn parse_term(&mut self, env: &Environment) -> Result<i64, ParseError> {
        let mut product = self.parse_factor(env)?;

        loop {
            let (line, location) = match self.lexer.peek_token()? {
                Some(Spanned { token: Token::Operator(Operator::Star), line, location }) => (*line, *location),
                _ => break
            };

            self.lexer.next_token()?;
            let factor = self.parse_factor(env)?;

            product = match product.checked_mul(factor) {
                Some(value) => value,
                None => return parse_error(ParseErrorType::Overflow, line, location)
            };
        }

        Ok(product)
    }

    pub fn parse_factor(&mut self, env: &Environment) -> Result<i64, ParseError> {
        match self.lexer.next_token()? {
            Some(Spanned { token: Token::OpenParen, .. }) => {
                let value = self.parse_expression(env)?;

                match self.lexer.next_token()? {
                    Some(Spanned { token: Token::CloseParen, .. }) => Ok(value),
                    other => Err(self.error_at(ParseErrorType::MissingClosingBrace, other.as_ref()))
                }
            },
            Some(Spanned {
                token: Token::Operator(op @ (Operator::Plus | Operator::Minus)),
                line,
                location
            }) => {
                let value = self.parse_factor(env)?;

                match op {
                    Operator::Plus => Ok(value),
                    _ => match value.checked_neg() {
                        Some(value) => Ok(value),
                        None => parse_error(ParseErrorType::Overflow, line, location)
                    }
                }
            },
            Some(Spanned { token: Token::Number(value), .. }) => Ok(value),
            Some(Spanned { token: Token::Identifier(name), line, location }) => {
                match env.get(&name) {
                    Some(value) => Ok(value),
                    None => parse_error(
                        ParseErrorType::UnknownVariable { name: name.to_string() },
                        line,
                        location
                    )
                }
            },
            other => Err(self.error_at(ParseErrorType::UnexpectedToken, other.as_ref()))
        }
    }

    /// Builds an error pointing at `spanned`, or at the end of input when
    /// there is no token.
    fn error_at(&self, error: ParseErrorType, spanned: Option<&Spanned>) -> ParseError {
        let (line, location) = match spanned {
            Some(spanned) => (spanned.line, spanned.location),
            None => (self.lexer.line(), SrcSpan::at(self.lexer.position()))
        };

        ParseError { error, line, location }
    }
}
