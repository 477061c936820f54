use std::io::{BufRead, Write};

const BANNER: &str = "Enter program (blank line to execute):";

/// Collects lines from stdin until a blank line or end of input. Every
/// collected line is terminated with `\n`.
pub fn collect_program() -> std::io::Result<String> {
    ctrlc::set_handler(|| {
        eprintln!();
        std::process::exit(130);
    })
    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    println!("{BANNER}");
    std::io::stdout().flush()?;

    collect_lines(std::io::stdin().lock())
}

pub fn collect_lines(reader: impl BufRead) -> std::io::Result<String> {
    let mut program = String::new();

    for line in reader.lines() {
        let line = line?;

        if line.is_empty() {
            break;
        }

        program.push_str(&line);
        program.push('\n');
    }

    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::collect_lines;

    #[test]
    fn test_stops_at_blank_line() -> std::io::Result<()> {
        let input = "a = 1;\r\nb = a;\n\nc = 3;\n";

        assert_eq!(collect_lines(input.as_bytes())?, "a = 1;\nb = a;\n");

        Ok(())
    }

    #[test]
    fn test_end_of_input() -> std::io::Result<()> {
        assert_eq!(collect_lines("x = 2;".as_bytes())?, "x = 2;\n");
        assert_eq!(collect_lines("".as_bytes())?, "");

        Ok(())
    }
}
