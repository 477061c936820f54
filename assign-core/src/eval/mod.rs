
use std::fmt::Display;

use crate::{
    environment::prelude::Environment,
    lexer::prelude::{char_positions, lex, Lexer},
    parser::prelude::{ParseError, Parser},
};

/// One execution context: a variable store plus the diagnostics recorded
/// while running. Nothing is shared between interpreters.
#[derive(Debug, Default, Clone)]
pub struct Interpreter {
    env: Environment,
    diagnostics: Vec<ParseError>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, src: &str) {
        self.execute(lex(src))
    }

    pub fn run_stream(&mut self, stream: impl Iterator<Item = char>) {
        self.execute(Lexer::new(char_positions(stream)))
    }

    /// Every run starts from an empty store and no diagnostics.
    fn execute<T: Iterator<Item = (u32, char)>>(&mut self, lexer: Lexer<T>) {
        self.env = Environment::new();
        self.diagnostics.clear();

        let mut parser = Parser::new(lexer);

        while self.diagnostics.is_empty() {
            match parser.next_statement(&mut self.env) {
                Ok(true) => {},
                Ok(false) => break,
                Err(err) => self.diagnostics.push(err),
            }
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    /// Recorded diagnostics as plain messages.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn report(&self) -> Report<'_> {
        if self.is_success() {
            Report::Bindings(&self.env)
        } else {
            Report::Error
        }
    }
}

/// What the user gets to see after a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report<'a> {
    Bindings(&'a Environment),
    Error,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Error => writeln!(f, "error"),
            Report::Bindings(env) => {
                for (name, value) in env.iter() {
                    writeln!(f, "{name} = {value}")?;
                }

                Ok(())
            }
        }
    }
}

pub fn run(src: &str) -> Interpreter {
    let mut interpreter = Interpreter::new();
    interpreter.run(src);

    interpreter
}
