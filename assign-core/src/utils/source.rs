use std::path::PathBuf;

use utf8_chars::BufReadCharsExt;

use crate::eval::Interpreter;
use super::error::Error;

/// Runs the program stored at `path`, streaming it char by char.
///
/// The source read so far is kept so a failed run can be rendered against it.
pub fn run_file(path: PathBuf) -> Result<Interpreter, Error> {
    let file = std::fs::File::open(&path)
        .map_err(|err| Error::StdIo { err: err.kind() })?;

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut io_error = None;
    let mut reader = std::io::BufReader::new(file);

    let stream = reader.chars()
        .map_while(|c| match c {
            Ok(c) => {
                src.push(c);
                Some(c)
            },
            Err(err) => {
                io_error = Some(err.kind());
                None
            }
        });

    let mut interpreter = Interpreter::new();
    interpreter.run_stream(stream);

    if let Some(err) = io_error {
        return Err(Error::StdIo { err });
    }

    if !interpreter.is_success() {
        std::io::Read::read_to_string(&mut reader, &mut src)
            .map_err(|err| Error::StdIo { err: err.kind() })?;
    }

    match interpreter.diagnostics().first() {
        Some(error) => Err(Error::Run {
            path,
            src,
            error: error.clone()
        }),
        None => Ok(interpreter)
    }
}

/// Same as [`run_file`] for an in-memory program, e.g. one collected from stdin.
pub fn run_source(path: PathBuf, src: String) -> Result<Interpreter, Error> {
    let interpreter = crate::eval::run(&src);

    match interpreter.diagnostics().first() {
        Some(error) => Err(Error::Run {
            path,
            error: error.clone(),
            src,
        }),
        None => Ok(interpreter)
    }
}
