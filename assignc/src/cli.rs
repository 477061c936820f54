use std::{
    io::{IsTerminal, Write},
    time::{Duration, Instant},
};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Status lines on stderr, e.g. `    Running program.txt`.
pub struct Status {
    writer: BufferWriter,
    started: Instant,
    quiet: bool,
}

impl Status {
    pub fn new(quiet: bool) -> Self {
        Self {
            writer: stderr_buffer_writer(),
            started: Instant::now(),
            quiet,
        }
    }

    pub fn running(&self, source: &str) {
        self.line("Running", Color::Green, source)
    }

    pub fn lexing(&self, source: &str) {
        self.line("Lexing", Color::Magenta, source)
    }

    pub fn finished(&self) {
        self.line("Finished", Color::Green, &format!("in {}", seconds(self.started.elapsed())))
    }

    pub fn failed(&self) {
        self.line("Failed", Color::Red, &format!("in {}", seconds(self.started.elapsed())))
    }

    fn line(&self, prefix: &str, color: Color, text: &str) {
        if self.quiet {
            return;
        }

        let mut buffer = self.writer.buffer();
        let mut prefix_spec = ColorSpec::new();
        prefix_spec.set_intense(true).set_bold(true).set_fg(Some(color));

        let _ = buffer.set_color(&prefix_spec)
            .and_then(|_| write!(buffer, "{prefix: >11}"))
            .and_then(|_| buffer.reset())
            .and_then(|_| writeln!(buffer, " {text}"))
            .and_then(|_| self.writer.print(&buffer));
    }
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

fn colour_forced() -> bool {
    std::env::var("FORCE_COLOR")
        .map(|force| !force.is_empty())
        .unwrap_or(false)
}

fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
