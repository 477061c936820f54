use std::{io::Write, path::PathBuf};

use assign_core::{
	lexer::prelude::{char_positions, lex, Lexer, LexicalError, Spanned},
	utils::prelude::Error
};

const PROMPT: &str = ">> ";

fn print_token(spanned: &Spanned) {
	println!("{:>4}: {} [{}]", spanned.line, spanned.token, spanned.location);
}

fn print_error(err: &LexicalError) {
	let (message, notes) = err.details();

	println!("[at {}] Lexical error: {} ({err})", err.location.start, message);
	if !notes.is_empty() {
		println!("{}", notes.join("\n"));
	}
}

/// Dumps every token of the file at `path` together with the identifier table.
pub fn dump(path: PathBuf) -> Result<(), Error> {
	let src = std::fs::read_to_string(&path)
		.map_err(|err| Error::StdIo { err: err.kind() })?;

	let mut lexer = Lexer::new(char_positions(src.chars()));

	for res in lexer.by_ref() {
		match res {
			Ok(spanned) => print_token(&spanned),
			Err(err) => {
				print_error(&err);
				break;
			}
		}
	}

	println!("\nIdentifiers:");
	for (idx, name) in lexer.interner().listing() {
		println!("({idx}): {name}");
	}

	Ok(())
}

/// Read Lex Print Loop.
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				for res in lex(&input) {
					match res {
						Ok(spanned) => print_token(&spanned),
						Err(err) => {
							print_error(&err);
							break;
						}
					}
				}
			}
		}
	}
}
