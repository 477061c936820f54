use std::path::PathBuf;

use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFiles,
    term::{self, Config},
};
use termcolor::Buffer;
use thiserror::Error;

use crate::parser::prelude::{ParseError, ParseErrorType};
use super::src_span::SrcSpan;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to run program: {error}")]
    Run {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    /// Renders the error with `codespan-reporting`, pointing into the source
    /// when there is one.
    pub fn pretty(&self, buf: &mut Buffer) {
        let mut files = SimpleFiles::new();

        let diagnostic = match self {
            Error::Run { path, src, error } => {
                let file_id = files.add(path.to_string_lossy().into_owned(), src.as_str());
                let (label, notes) = error.details();

                Diagnostic::error()
                    .with_message(format!("{}: {error}", Self::title(&error.error)))
                    .with_labels(vec![
                        Label::primary(file_id, Self::clamp(error.location, src).to_range())
                            .with_message(label)
                    ])
                    .with_notes(notes)
            },
            Error::StdIo { err } => {
                Diagnostic::error()
                    .with_message("Standard IO error")
                    .with_notes(vec![format!("{err}")])
            }
        };

        term::emit(buf, &Config::default(), &files, &diagnostic)
            .expect("write_diagnostic");
    }

    fn title(error: &ParseErrorType) -> &'static str {
        match error {
            ParseErrorType::LexError { .. } => "Lexical error",
            ParseErrorType::UnknownVariable { .. }
            | ParseErrorType::Overflow => "Evaluation error",
            _ => "Syntax error",
        }
    }

    // errors at the end of input may point past the last char
    fn clamp(span: SrcSpan, src: &str) -> SrcSpan {
        let len = src.len() as u32;

        SrcSpan::from(span.start.min(len), span.end.min(len))
    }
}
