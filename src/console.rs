//! Line-oriented console prompts
//!
//! Everything the player sees or types goes through a [`Console`], which is
//! generic over its reader and writer so tests can run scripted sessions
//! against in-memory buffers while the binary runs on locked stdin/stdout.

use std::io::{self, BufRead, Write};

/// The player-facing terminal: one reader for input lines, one writer for text
pub struct Console<R, W> {
    pub reader: R,
    pub writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write text verbatim, with or without a trailing line break.
    ///
    /// Prompts suppress the break so the response marker stays on the same
    /// visual line as the cursor.
    pub fn display(&mut self, text: &str, break_line: bool) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        if break_line {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }

    /// Block for one line of input and return it with surrounding whitespace
    /// removed. A closed input stream is an I/O failure, not a retry.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Show a prompt and return the player's trimmed response, unvalidated.
    pub fn prompt_input(&mut self, text: &str) -> io::Result<String> {
        self.display(&format!("\n{}\n> ", text), false)?;
        self.read_line()
    }

    /// Show a prompt plus the allowed values and re-ask until the response is
    /// exactly one of them. Invalid selections never surface to the caller.
    pub fn prompt_select<'a>(&mut self, text: &str, values: &[&'a str]) -> io::Result<&'a str> {
        loop {
            self.display(&format!("\n{}", text), true)?;
            for value in values {
                self.display(&format!("- {}", value), true)?;
            }
            self.display("> ", false)?;

            let input = self.read_line()?;
            if let Some(&value) = values.iter().find(|&&v| v == input) {
                return Ok(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console_over(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn prompt_input_trims_the_response() {
        let mut console = console_over("  3,1,4  \n");
        let response = console.prompt_input("Enter digits").unwrap();
        assert_eq!(response, "3,1,4");
    }

    #[test]
    fn prompt_input_keeps_the_marker_on_the_prompt_line() {
        let mut console = console_over("ok\n");
        console.prompt_input("Enter digits").unwrap();
        let written = String::from_utf8(console.writer).unwrap();
        assert_eq!(written, "\nEnter digits\n> ");
    }

    #[test]
    fn prompt_select_accepts_a_listed_value() {
        let mut console = console_over("hard\n");
        let choice = console.prompt_select("Pick one.", &["normal", "hard"]).unwrap();
        assert_eq!(choice, "hard");
    }

    #[test]
    fn prompt_select_reasks_until_a_listed_value_arrives() {
        let mut console = console_over("extreme\nHard\nhard\n");
        let choice = console.prompt_select("Pick one.", &["normal", "hard"]).unwrap();
        assert_eq!(choice, "hard");

        // The full prompt is re-displayed once per rejected line.
        let written = String::from_utf8(console.writer).unwrap();
        assert_eq!(written.matches("Pick one.").count(), 3);
        assert_eq!(written.matches("- normal\n- hard\n").count(), 3);
    }

    #[test]
    fn closed_input_is_an_io_error() {
        let mut console = console_over("");
        let err = console.prompt_input("Enter digits").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn prompt_select_propagates_eof_instead_of_spinning() {
        let mut console = console_over("bogus\n");
        let err = console.prompt_select("Pick one.", &["normal", "hard"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
