use crate::domain::ports::{InputSource, Question};
use crate::error::{CalculatorError, Result};
use std::io::{BufRead, Write};

/// Asks questions on a writer and reads one-line answers from a reader.
///
/// Works over any `BufRead`/`Write` pair, e.g. locked stdin and stdout, or
/// in-memory buffers in tests.
pub struct ConsolePrompt<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `prompt` without a newline and returns the next line of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CalculatorError::UnexpectedEof);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        Ok(answer.to_string())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> InputSource for ConsolePrompt<R, W> {
    fn answer(&mut self, question: Question) -> Result<String> {
        self.ask(question.prompt())
    }
}

/// Answers questions from values supplied up front, deferring to `inner` for
/// anything left unanswered.
pub struct PresetInput<I: InputSource> {
    inner: I,
    salary: Option<String>,
    work_mode: Option<String>,
}

impl<I: InputSource> PresetInput<I> {
    pub fn new(inner: I, salary: Option<String>, work_mode: Option<String>) -> Self {
        Self {
            inner,
            salary,
            work_mode,
        }
    }
}

impl<I: InputSource> InputSource for PresetInput<I> {
    fn answer(&mut self, question: Question) -> Result<String> {
        let preset = match question {
            Question::Salary => self.salary.take(),
            Question::WorkMode => self.work_mode.take(),
        };
        match preset {
            Some(answer) => Ok(answer),
            None => self.inner.answer(question),
        }
    }
}
