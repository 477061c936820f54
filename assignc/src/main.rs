mod cli;
mod input;
mod rlpl;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use cli::Status;
use assign_core::utils::prelude::{run_file, run_source, Error};

#[derive(Parser)]
#[command(version, about = "Runs programs made of integer assignment statements")]
enum Command {
    /// Runs a program and prints the final variable bindings
    Run {
        /// Path of source file. The program is read from stdin,
        /// up to the first blank line, when omitted
        path: Option<PathBuf>,
        /// Render the recorded diagnostic to stderr when the run fails
        #[arg(short, long, default_value_t = false)]
        explain: bool,
        /// Do not print status lines to stderr
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },
    /// Prints the tokens of a source file, or runs
    /// Read Lex Print Loop when no path is given
    Lex {
        /// Path of source file
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match Command::parse() {
        Command::Run { path, explain, quiet } => run(path, explain, quiet),
        Command::Lex { path: Some(path) } => {
            Status::new(false).lexing(&path.to_string_lossy());

            match rlpl::dump(path) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    print_error(&err);
                    ExitCode::FAILURE
                }
            }
        },
        Command::Lex { path: None } => match rlpl::start() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                print_error(&Error::StdIo { err: err.kind() });
                ExitCode::FAILURE
            }
        },
    }
}

fn run(path: Option<PathBuf>, explain: bool, quiet: bool) -> ExitCode {
    let status = Status::new(quiet);

    let result = match path {
        Some(path) => {
            status.running(&path.to_string_lossy());

            run_file(path)
        },
        None => match input::collect_program() {
            Ok(src) => {
                status.running("<stdin>");

                run_source(PathBuf::from("<stdin>"), src)
            },
            Err(err) => Err(Error::StdIo { err: err.kind() })
        }
    };

    match result {
        Ok(interpreter) => {
            print!("{}", interpreter.report());

            status.finished();

            ExitCode::SUCCESS
        },
        Err(err @ Error::Run { .. }) => {
            println!("error");

            if explain {
                print_error(&err);
            }
            status.failed();

            ExitCode::FAILURE
        },
        Err(err @ Error::StdIo { .. }) => {
            print_error(&err);

            ExitCode::FAILURE
        }
    }
}

fn print_error(err: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    err.pretty(&mut buf);
    buf_writer
        .print(&buf)
        .expect("Writing error to stderr");
}
