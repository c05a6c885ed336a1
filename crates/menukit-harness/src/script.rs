//! Scripted console implementing the core's I/O contract.

use std::{collections::VecDeque, time::Duration};

use menukit_core::{Console, ConsoleError};

/// Console fed from a fixed script of input lines.
///
/// Implements [`Console`] with the same validation contract as the real
/// collaborator: lines that fail to parse or fall outside the requested
/// range are consumed and rejected until a valid line appears. A drained
/// script fails the pending prompt with [`ConsoleError::Exhausted`], which
/// is how a scripted session asserts that it consumed exactly the input it
/// was given.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    rejected: Vec<String>,
    pauses: Vec<Duration>,
}

impl ScriptedConsole {
    /// Create a console that will serve the given lines in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            rejected: Vec::new(),
            pauses: Vec::new(),
        }
    }

    /// Append one more input line to the script.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Every prompt text shown, in display order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines the validation loop consumed and rejected.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Requested pauses, in order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt_for_int(
        &mut self,
        prompt: &str,
        min: usize,
        max: usize,
    ) -> Result<usize, ConsoleError> {
        self.prompts.push(prompt.to_string());
        loop {
            let Some(line) = self.inputs.pop_front() else {
                return Err(ConsoleError::Exhausted);
            };
            match line.trim().parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => self.rejected.push(line),
            }
        }
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_until_a_valid_line_appears() {
        let mut console = ScriptedConsole::new(["abc", "9", "-1", "2"]);
        let choice = console.prompt_for_int("pick", 0, 3);
        assert_eq!(choice.ok(), Some(2));
        assert_eq!(console.rejected(), ["abc", "9", "-1"]);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn drained_script_fails_the_prompt() {
        let mut console = ScriptedConsole::new(["nope"]);
        assert!(matches!(console.prompt_for_int("pick", 0, 3), Err(ConsoleError::Exhausted)));
        assert_eq!(console.prompts().len(), 1);
    }

    #[test]
    fn pauses_are_recorded_not_slept() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.pause(Duration::from_secs(1));
        assert_eq!(console.pauses(), [Duration::from_secs(1)]);
    }
}
