use std::io::{self, BufRead, Write};

/// Line-oriented terminal I/O over any reader/writer pair.
///
/// End of input is not an error: [`Prompter::ask`] returns `None` and the
/// caller winds down.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` without a newline and reads one line, minus the line
    /// terminator.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_strips_line_endings() {
        let mut prompter = Prompter::new(Cursor::new("first\r\nsecond\n"), Vec::new());

        assert_eq!(prompter.ask("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(prompter.ask("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn ask_keeps_inner_whitespace() {
        let mut prompter = Prompter::new(Cursor::new("  John  Doe \n"), Vec::new());
        assert_eq!(prompter.ask("").unwrap().as_deref(), Some("  John  Doe "));
    }

    #[test]
    fn ask_returns_none_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new("last"), Vec::new());

        assert_eq!(prompter.ask("> ").unwrap().as_deref(), Some("last"));
        assert_eq!(prompter.ask("> ").unwrap(), None);
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("> ").unwrap().as_deref(), Some(""));
    }
}
