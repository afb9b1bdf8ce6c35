//! Interactive prompting.
//!
//! Each wizard field runs the same small state machine:
//!
//! ```text
//! Prompt → Validate → { Accept, Reprompt, Cancel }
//! ```
//!
//! Invalid input reports the validation error and loops back to the prompt;
//! end of input cancels the whole run. Terminal I/O sits behind the
//! [`Prompter`] trait so the machine itself is test-driven with scripted
//! input.

use crate::error::{DropletError, Result};
use crate::model::{Field, FieldValue};
use crate::schema::FieldSpec;
use crate::validate::validate;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Line and secret input for the wizard and for upload-time password entry.
pub trait Prompter {
    /// Ask a question, return one line of input. `None` means the input
    /// source is exhausted (the user cancelled).
    fn prompt(&mut self, question: &str) -> Result<Option<String>>;

    /// Ask for a secret without echoing it.
    fn prompt_secret(&mut self, question: &str) -> Result<String>;

    /// A value was rejected; tell the user before re-prompting.
    fn report_invalid(&mut self, error: &DropletError);

    /// A value was accepted.
    fn report_accepted(&mut self, field: Field, value: &FieldValue);
}

/// Outcome of one turn of the per-field machine.
enum Step {
    Accept(FieldValue),
    Reprompt,
    Cancel,
}

fn step<P: Prompter>(
    prompter: &mut P,
    field: Field,
    question: &str,
    spec: &FieldSpec,
) -> Result<Step> {
    let raw = match prompter.prompt(question)? {
        Some(line) => line,
        None => return Ok(Step::Cancel),
    };

    match validate(field, raw.trim(), spec) {
        Ok(value) => {
            prompter.report_accepted(field, &value);
            Ok(Step::Accept(value))
        }
        Err(error) => {
            prompter.report_invalid(&error);
            Ok(Step::Reprompt)
        }
    }
}

/// Run the machine for one field until the value is accepted or the user
/// cancels. Retries are unbounded; only cancellation breaks the loop.
pub fn prompt_field<P: Prompter>(
    prompter: &mut P,
    field: Field,
    question: &str,
    spec: &FieldSpec,
) -> Result<FieldValue> {
    loop {
        match step(prompter, field, question, spec)? {
            Step::Accept(value) => return Ok(value),
            Step::Reprompt => continue,
            Step::Cancel => return Err(DropletError::Cancelled),
        }
    }
}

/// Terminal-backed prompter: questions on stdout, answers from stdin,
/// secrets via `rpassword`.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl TermPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TermPrompter {
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        print!("{}: ", question);
        io::stdout().flush().map_err(DropletError::Io)?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(DropletError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_secret(&mut self, question: &str) -> Result<String> {
        rpassword::prompt_password(question).map_err(DropletError::Io)
    }

    fn report_invalid(&mut self, error: &DropletError) {
        eprintln!("{}", error.to_string().red().bold());
    }

    fn report_accepted(&mut self, field: Field, value: &FieldValue) {
        println!(
            "{}{}{}{}{}\n",
            "Option `".green().bold(),
            field.to_string().yellow(),
            "` set to value `".green().bold(),
            value.flag_value().yellow(),
            "`".green().bold()
        );
    }
}

/// Scripted prompter for tests: pops canned answers, records what was
/// rejected and accepted.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct ScriptPrompter {
    answers: std::collections::VecDeque<String>,
    secrets: std::collections::VecDeque<String>,
    pub rejected: Vec<String>,
    pub accepted: Vec<(Field, FieldValue)>,
}

#[cfg(any(test, feature = "test_utils"))]
impl ScriptPrompter {
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_secrets<I, S>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secrets = secrets.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Prompter for ScriptPrompter {
    fn prompt(&mut self, _question: &str) -> Result<Option<String>> {
        Ok(self.answers.pop_front())
    }

    fn prompt_secret(&mut self, _question: &str) -> Result<String> {
        self.secrets
            .pop_front()
            .ok_or_else(|| DropletError::Internal("no scripted secret left".to_string()))
    }

    fn report_invalid(&mut self, error: &DropletError) {
        self.rejected.push(error.to_string());
    }

    fn report_accepted(&mut self, field: Field, value: &FieldValue) {
        self.accepted.push((field, value.clone()));
    }
}
