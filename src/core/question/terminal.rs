use std::io::{self, BufRead, Write};

use super::{InputSource, Notifier};
use crate::error::{Error, Result};

/// Stdin-backed input source for [`super::Question::ask`].
///
/// Prompts go to stderr so stdout stays free for the caller's output. A
/// closed stdin is an error instead of a cancellation; otherwise `ask` would
/// spin forever on EOF.
pub struct TerminalPrompt<R = io::StdinLock<'static>> {
    reader: R,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> TerminalPrompt<R> {
    /// Read answers from any buffered reader instead of stdin.
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for TerminalPrompt<R> {
    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        eprint!("{} ", prompt);
        io::stderr().flush().ok();

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read answer".to_string())))?;

        if read == 0 {
            return Err(Error::internal_io(
                "Input closed before a valid answer was given",
                Some(format!("answer '{}'", prompt)),
            ));
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Writes rejection messages to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::question::{Answer, AnswerType, Question};
    use std::io::Cursor;

    #[test]
    fn reads_lines_without_newline() {
        let mut prompt = TerminalPrompt::with_reader(Cursor::new("hello\r\nworld\n"));
        assert_eq!(prompt.read("?").unwrap(), Some("hello".to_string()));
        assert_eq!(prompt.read("?").unwrap(), Some("world".to_string()));
    }

    #[test]
    fn eof_is_an_io_error() {
        let mut prompt = TerminalPrompt::with_reader(Cursor::new(""));
        let err = prompt.read("?").unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }

    #[test]
    fn drives_a_question_from_a_reader() {
        let q = Question::new("Ready?").answer_type(AnswerType::Boolean);
        let mut io = TerminalPrompt::with_reader(Cursor::new("perhaps\nyup\n"));
        let mut messages: Vec<String> = Vec::new();

        let answer = q.ask(&mut io, &mut messages).unwrap();
        assert_eq!(answer, Answer::Bool(true));
        assert_eq!(messages, vec!["Answer needs to be Yes or No."]);
    }
}
