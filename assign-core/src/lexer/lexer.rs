use super::error::{LexicalError, LexicalErrorType};
use super::interner::Interner;
use super::token::{Operator, Punctuation, Spanned, Token};
use crate::utils::prelude::SrcSpan;

pub type LexResult = std::result::Result<Option<Spanned>, LexicalError>;

/// Characters allowed right after a zero-valued number literal.
fn is_number_terminator(ch: Option<char>) -> bool {
	matches!(ch, None | Some(' ' | '\t' | '\n' | ';' | '+' | '-' | '*' | ')'))
}

/// Pairs every char of the stream with its byte offset.
pub fn char_positions(stream: impl Iterator<Item = char>) -> impl Iterator<Item = (u32, char)> {
	stream.scan(0, |pos, c| {
		*pos += c.len_utf8() as u32;
		Some((*pos - c.len_utf8() as u32, c))
	})
}

pub fn lex(src: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	line: u32,
	ch: Option<char>,
	input: T,

	peeked: Option<Spanned>,
	interner: Interner,
	done: bool,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			line: 1,
			ch: None,
			input,

			peeked: None,
			interner: Interner::new(),
			done: false,
		};

		lexer.next_char();

		lexer
	}

	/// Line the lexer is currently on, 1-based.
	pub fn line(&self) -> u32 {
		self.line
	}

	/// Byte offset of the next unread char.
	pub fn position(&self) -> u32 {
		self.position
	}

	pub fn interner(&self) -> &Interner {
		&self.interner
	}

	/// Returns the next token without consuming it. `Ok(None)` marks the end of input.
	pub fn peek_token(&mut self) -> std::result::Result<Option<&Spanned>, LexicalError> {
		if self.peeked.is_none() {
			self.peeked = self.lex_token()?;
		}

		Ok(self.peeked.as_ref())
	}

	pub fn next_token(&mut self) -> LexResult {
		match self.peeked.take() {
			Some(token) => Ok(Some(token)),
			None => self.lex_token(),
		}
	}

	fn lex_token(&mut self) -> LexResult {
		self.skip_whitespace();

		let token = match self.ch {
			Some(ch) => match ch {
				'=' => self.eat_one_char(Token::Operator(Operator::Assign)),
				'+' => self.eat_one_char(Token::Operator(Operator::Plus)),
				'-' => self.eat_one_char(Token::Operator(Operator::Minus)),
				'*' => self.eat_one_char(Token::Operator(Operator::Star)),
				';' => self.eat_one_char(Token::Punctuation(Punctuation::Semicolon)),
				'(' => self.eat_one_char(Token::OpenParen),
				')' => self.eat_one_char(Token::CloseParen),
				'0'..='9' => {
					return self.lex_number().map(Some);
				},
				c if c.is_alphabetic() || c == '_' => self.lex_ident(),
				c => {
					let location = self.position;
					return Err(LexicalError {
						error: LexicalErrorType::UnexpectedCharacter { ch: c },
						line: self.line,
						location: SrcSpan::from(location, location + c.len_utf8() as u32),
					});
				}
			},
			None => return Ok(None)
		};

		Ok(Some(token))
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		if ch == Some('\n') {
			self.line += 1;
		}

		self.ch = match self.input.next() {
			Some((pos, next)) => {
				self.position = pos;

				Some(next)
			},
			None => {
				if let Some(ch) = ch {
					self.position += ch.len_utf8() as u32;
				}

				None
			}
		};

		ch
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.ch, Some(ch) if ch.is_whitespace()) {
			self.next_char();
		}
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		let line = self.line;
		self.next_char();
		let end_pos = self.position;

		Spanned::new(token, line, start_pos, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
		let start_pos = self.position;
		let line = self.line;
		let mut ident = String::new();

		while let Some(ch) = self.ch {
			if !(ch.is_alphanumeric() || ch == '_') {
				break;
			}

			ident.push(ch);
			self.next_char();
		}

		let end_pos = self.position;
		let name = self.interner.intern(&ident);

		Spanned::new(Token::Identifier(name), line, start_pos, end_pos)
	}

	fn lex_number(&mut self) -> std::result::Result<Spanned, LexicalError> {
		let start_pos = self.position;
		let line = self.line;

		let mut value: Option<i64> = Some(0);
		let mut digits = 0u32;
		let mut zero_prefix = false;

		while let Some(ch) = self.ch {
			let Some(digit) = ch.to_digit(10) else {
				break
			};

			// `007`: a zero-valued run of two or more digits followed by a significant digit
			if value == Some(0) && digits >= 2 && digit != 0 {
				zero_prefix = true;
			}

			value = value
				.and_then(|value| value.checked_mul(10))
				.and_then(|value| value.checked_add(digit as i64));
			digits += 1;

			self.next_char();
		}

		let location = SrcSpan::from(start_pos, self.position);

		let value = match value {
			Some(value) => value,
			None => return Err(LexicalError {
				error: LexicalErrorType::NumberTooLarge,
				line,
				location
			})
		};

		if zero_prefix || (value == 0 && !is_number_terminator(self.ch)) {
			return Err(LexicalError {
				error: LexicalErrorType::InvalidNumberFormat,
				line,
				location
			});
		}

		Ok(Spanned {
			token: Token::Number(value),
			line,
			location,
		})
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = std::result::Result<Spanned, LexicalError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		match self.next_token() {
			Ok(Some(token)) => Some(Ok(token)),
			Ok(None) => {
				self.done = true;
				None
			},
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}
