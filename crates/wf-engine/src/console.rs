//! Player-facing input and output.
//!
//! The engine never touches stdin or stdout directly. It asks a [`Console`]
//! for lines and hands it messages to show. [`StreamConsole`] drives a real
//! terminal; [`ScriptedConsole`] replays canned input and records output.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::error::{EngineError, EngineResult};

/// Answers accepted as "yes" (compared lowercase).
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["y", "+", "yes", "да", "ага", "ок", "1"];

/// Answers accepted as "no" (compared lowercase).
pub const NEGATIVE_ANSWERS: &[&str] = &["n", "-", "no", "нет", "неа", "не ок", "0"];

/// The player's side of the game.
pub trait Console {
    /// Show `prompt` and block until a line arrives. The returned line has
    /// no trailing newline. Fails with [`EngineError::InputClosed`] once
    /// input is exhausted.
    fn read_line(&mut self, prompt: &str) -> EngineResult<String>;

    /// Show one message to the player.
    fn announce(&mut self, message: &str) -> EngineResult<()>;

    /// Re-prompt until the player types something other than whitespace.
    /// The answer is trimmed.
    fn read_non_empty_line(&mut self, prompt: &str) -> EngineResult<String> {
        loop {
            let line = self.read_line(prompt)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    /// Re-prompt until the player gives a recognized yes or no answer.
    fn read_yes_no(&mut self, prompt: &str) -> EngineResult<bool> {
        loop {
            let answer = self.read_non_empty_line(prompt)?.to_lowercase();
            if AFFIRMATIVE_ANSWERS.contains(&answer.as_str()) {
                return Ok(true);
            }
            if NEGATIVE_ANSWERS.contains(&answer.as_str()) {
                return Ok(false);
            }
        }
    }

    /// Block until the player presses enter. Any line, even an empty one,
    /// counts.
    fn wait_for_proceed(&mut self, prompt: &str) -> EngineResult<()> {
        self.read_line(prompt).map(|_| ())
    }
}

/// A console over any reader/writer pair, with optional pacing after each
/// announcement.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
    pace: Duration,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Create a console without pacing.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pace: Duration::ZERO,
        }
    }

    /// Pause for `pace` after every announcement.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Consume the console and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> EngineResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    fn announce(&mut self, message: &str) -> EngineResult<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        if !self.pace.is_zero() {
            std::thread::sleep(self.pace);
        }
        Ok(())
    }
}

/// A console that replays scripted input and records everything shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    announcements: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            announcements: Vec::new(),
        }
    }

    /// Every announcement so far, in order.
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// All announcements joined by newlines.
    pub fn transcript(&self) -> String {
        self.announcements.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> EngineResult<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(EngineError::InputClosed)
    }

    fn announce(&mut self, message: &str) -> EngineResult<()> {
        self.announcements.push(message.to_string());
        Ok(())
    }
}
