use crate::utils::error::{ReproError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

impl Choice {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Returns `Err(message)` to reject an answer and ask again.
pub type AnswerCheck<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Asks questions. End of input means the user cancelled.
pub trait Prompter {
    fn select(&mut self, message: &str, choices: &[Choice], default: usize) -> Result<String>;
    fn text(&mut self, message: &str, default: &str, check: AnswerCheck<'_>) -> Result<String>;
}

/// Plain line-based prompts over any reader/writer pair.
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ReproError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}

impl LinePrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

fn match_choice<'a>(answer: &str, choices: &'a [Choice]) -> Option<&'a Choice> {
    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| choices.get(i));
    }
    choices.iter().find(|c| {
        c.value.eq_ignore_ascii_case(answer) || c.title.eq_ignore_ascii_case(answer)
    })
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[Choice], default: usize) -> Result<String> {
        let default = default.min(choices.len().saturating_sub(1));
        loop {
            writeln!(self.output, "? {}", message)?;
            for (i, choice) in choices.iter().enumerate() {
                let marker = if i == default { ">" } else { " " };
                writeln!(self.output, "  {} {}) {}", marker, i + 1, choice.title)?;
            }
            write!(self.output, "  Choice [{}]: ", default + 1)?;
            self.output.flush()?;

            let answer = self.read_line()?;
            if answer.is_empty() {
                if let Some(choice) = choices.get(default) {
                    return Ok(choice.value.clone());
                }
            }
            match match_choice(&answer, choices) {
                Some(choice) => return Ok(choice.value.clone()),
                None => writeln!(self.output, "  ✖ Please pick one of the listed options")?,
            }
        }
    }

    fn text(&mut self, message: &str, default: &str, check: AnswerCheck<'_>) -> Result<String> {
        loop {
            if default.is_empty() {
                write!(self.output, "? {} ", message)?;
            } else {
                write!(self.output, "? {} ({}) ", message, default)?;
            }
            self.output.flush()?;

            let answer = self.read_line()?;
            let answer = if answer.is_empty() {
                default.to_string()
            } else {
                answer
            };

            match check(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => writeln!(self.output, "  ✖ {}", reason)?,
            }
        }
    }
}
