//! The production console collaborator.
//!
//! Blocking line I/O over buffered streams with local validation: invalid
//! input is recovered by re-prompting, unbounded, and never surfaces to
//! callers. The only failure modes are broken streams and an exhausted
//! input source.
//!
//! A non-interactive source (piped input, closed stdin) that produces
//! [`EMPTY_READ_LIMIT`] consecutive empty reads triggers a configurable
//! end-of-input action; the default prints a diagnostic and terminates the
//! process. End-of-file counts against the budget even on a terminal, so a
//! Ctrl-D storm cannot spin the retry loop forever.

use std::{
    io::{self, BufRead, IsTerminal, Write},
    process, thread,
    time::Duration,
};

use chrono::{Datelike, Local, NaiveDate};
use menukit_core::{Console, ConsoleError};

/// Consecutive empty or end-of-file reads tolerated before the end-of-input
/// action runs.
pub const EMPTY_READ_LIMIT: u32 = 5;

/// Blocking console over buffered line streams.
///
/// Implements the engine's [`Console`] contract and carries the wider
/// prompt surface (strings, floats, booleans, dates) for application code.
/// Generic over its streams so tests drive it with in-memory buffers.
pub struct StdioConsole<R, W> {
    input: R,
    output: W,
    interactive: bool,
    empty_reads: u32,
    end_action: Box<dyn FnMut()>,
}

impl StdioConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's standard streams.
    pub fn stdio() -> Self {
        let interactive = io::stdin().is_terminal();
        let mut console = Self::new(io::stdin().lock(), io::stdout());
        console.interactive = interactive;
        console
    }
}

impl<R: BufRead, W: Write> StdioConsole<R, W> {
    /// Console over arbitrary buffered streams, treated as non-interactive.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            interactive: false,
            empty_reads: 0,
            end_action: Box::new(default_end_action),
        }
    }

    /// Replace the end-of-input action.
    ///
    /// The action runs once the empty-read budget is spent. If it returns
    /// instead of terminating the process, the pending prompt fails with
    /// [`ConsoleError::Exhausted`].
    #[must_use]
    pub fn with_end_action(mut self, action: impl FnMut() + 'static) -> Self {
        self.end_action = Box::new(action);
        self
    }

    /// Prompt for a non-empty string.
    pub fn prompt_for_string(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        loop {
            let input = self.ask(prompt)?;
            if input.trim().is_empty() {
                self.say("Invalid input. Can't be empty. Try again.")?;
            } else {
                return Ok(input);
            }
        }
    }

    /// Prompt for a float in `min..=max`.
    pub fn prompt_for_float(
        &mut self,
        prompt: &str,
        min: f64,
        max: f64,
    ) -> Result<f64, ConsoleError> {
        loop {
            let input = self.prompt_for_string(prompt)?;
            let Ok(value) = input.trim().parse::<f64>() else {
                self.say("Invalid input. You should enter a number.")?;
                continue;
            };
            if value < min || value > max {
                self.say(&format!("Invalid input. Must be between {min} and {max}"))?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Prompt for an integer drawn from an explicit set of allowed values.
    pub fn prompt_for_int_among(
        &mut self,
        prompt: &str,
        allowed: &[usize],
    ) -> Result<usize, ConsoleError> {
        loop {
            let input = self.prompt_for_string(prompt)?;
            let Ok(value) = input.trim().parse::<usize>() else {
                self.say("Invalid input. You should enter a number.")?;
                continue;
            };
            if allowed.contains(&value) {
                return Ok(value);
            }
            self.say(&format!("Invalid input. Must be in {{{}}}", inline_list(allowed)))?;
        }
    }

    /// Prompt for a yes/no answer.
    ///
    /// `yes` and `no` are the accepted token sets, matched
    /// case-insensitively; any other input is rejected and re-prompted.
    pub fn prompt_for_bool(
        &mut self,
        prompt: &str,
        yes: &[&str],
        no: &[&str],
    ) -> Result<bool, ConsoleError> {
        loop {
            let input = self.prompt_for_string(prompt)?;
            let token = input.trim();
            if yes.iter().any(|t| t.eq_ignore_ascii_case(token)) {
                return Ok(true);
            }
            if no.iter().any(|t| t.eq_ignore_ascii_case(token)) {
                return Ok(false);
            }
            self.say("Did not receive proper input. Try again.")?;
        }
    }

    /// Prompt for a past date in `MM/dd/yyyy` format.
    ///
    /// Two-digit years are promoted to the century that keeps them in the
    /// past: at or below the current two-digit year means 20xx, above it
    /// 19xx. Dates after today are rejected.
    pub fn prompt_for_date(&mut self, prompt: &str) -> Result<NaiveDate, ConsoleError> {
        let today = Local::now().date_naive();
        loop {
            let input = self.prompt_for_string(prompt)?;
            let Some(date) = parse_date(input.trim(), today) else {
                self.say("Invalid format. Try again")?;
                continue;
            };
            if date > today {
                self.say("Date must be before right now.")?;
                continue;
            }
            return Ok(date);
        }
    }

    /// Show the trimmed prompt with a trailing space, then read one line.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{} ", prompt.trim())?;
        self.output.flush()?;
        self.read()
    }

    fn say(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Read one line, stripped of its trailing newline.
    ///
    /// Tracks consecutive unproductive reads: end-of-file always counts,
    /// empty lines count only from a non-interactive source (a person
    /// pressing Enter is not an exhausted pipe).
    fn read(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        if bytes == 0 || (!self.interactive && line.trim().is_empty()) {
            self.empty_reads += 1;
            if self.empty_reads >= EMPTY_READ_LIMIT {
                tracing::error!("input source produced {EMPTY_READ_LIMIT} consecutive empty reads");
                (self.end_action)();
                return Err(ConsoleError::Exhausted);
            }
        } else if !line.trim().is_empty() {
            self.empty_reads = 0;
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Console for StdioConsole<R, W> {
    fn prompt_for_int(
        &mut self,
        prompt: &str,
        min: usize,
        max: usize,
    ) -> Result<usize, ConsoleError> {
        // Blank separator line before each menu display.
        writeln!(self.output)?;
        loop {
            let input = self.prompt_for_string(prompt)?;
            let Ok(value) = input.trim().parse::<usize>() else {
                self.say("Invalid input. You should enter a number.")?;
                continue;
            };
            if value < min || value > max {
                self.say(&format!("Invalid input. Must be between {min} and {max}"))?;
                continue;
            }
            return Ok(value);
        }
    }

    fn pause(&mut self, duration: Duration) {
        let _ = self.output.flush();
        thread::sleep(duration);
    }
}

fn default_end_action() {
    let _ = writeln!(io::stderr(), "Input stream was terminated. Exiting program.");
    process::exit(1);
}

/// Comma-separated rendering of an allowed-value set.
fn inline_list(values: &[usize]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Parse `MM/dd/yyyy`, promoting two-digit years against `today`.
fn parse_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, "%m/%d/%Y").ok()?;
    if date.year() >= 100 {
        return Some(date);
    }
    let century_split = today.year() - 2000;
    let promoted =
        if date.year() <= century_split { date.year() + 2000 } else { date.year() + 1900 };
    date.with_year(promoted)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io::Cursor, rc::Rc};

    use super::*;

    fn console_with(lines: &str) -> StdioConsole<Cursor<Vec<u8>>, Vec<u8>> {
        StdioConsole::new(Cursor::new(lines.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: StdioConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output).unwrap_or_default()
    }

    #[test]
    fn int_prompt_retries_until_valid() {
        let mut console = console_with("abc\n12\n3\n");
        let value = console.prompt_for_int("Pick [0-5]:", 0, 5);
        assert_eq!(value.ok(), Some(3));
        let output = output_of(console);
        assert!(output.contains("Invalid input. You should enter a number."));
        assert!(output.contains("Invalid input. Must be between 0 and 5"));
    }

    #[test]
    fn int_prompt_trims_and_spaces_the_prompt() {
        let mut console = console_with("1\n");
        let value = Console::prompt_for_int(&mut console, "\nChoose:\n", 0, 2);
        assert_eq!(value.ok(), Some(1));
        assert_eq!(output_of(console), "\nChoose: ");
    }

    #[test]
    fn string_prompt_rejects_empty_lines() {
        let mut console = console_with("\n  \nhello\n");
        let value = console.prompt_for_string("Name:");
        assert_eq!(value.ok(), Some("hello".to_string()));
        assert!(output_of(console).contains("Invalid input. Can't be empty. Try again."));
    }

    #[test]
    fn empty_read_budget_triggers_the_end_action_once() {
        let fired = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&fired);
        let mut console =
            console_with("\n\n\n\n\n").with_end_action(move || seen.set(seen.get() + 1));
        let result = console.prompt_for_string("Name:");
        assert!(matches!(result, Err(ConsoleError::Exhausted)));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn productive_reads_reset_the_budget() {
        let fired = Rc::new(Cell::new(false));
        let seen = Rc::clone(&fired);
        let mut console =
            console_with("\n\n\nok\n").with_end_action(move || seen.set(true));
        assert_eq!(console.prompt_for_string("Name:").ok(), Some("ok".to_string()));
        assert_eq!(console.empty_reads, 0);
        assert!(!fired.get());
    }

    #[test]
    fn end_of_file_exhausts_even_with_pending_prompt() {
        let fired = Rc::new(Cell::new(false));
        let seen = Rc::clone(&fired);
        let mut console = console_with("").with_end_action(move || seen.set(true));
        let result = console.prompt_for_string("Name:");
        assert!(matches!(result, Err(ConsoleError::Exhausted)));
        assert!(fired.get());
    }

    #[test]
    fn int_among_prompt_restricts_to_the_set() {
        let mut console = console_with("abc\n2\n7\n");
        let value = console.prompt_for_int_among("Pick:", &[1, 3, 7]);
        assert_eq!(value.ok(), Some(7));
        let output = output_of(console);
        assert!(output.contains("Invalid input. You should enter a number."));
        assert!(output.contains("Invalid input. Must be in {1, 3, 7}"));
    }

    #[test]
    fn bool_prompt_matches_tokens_case_insensitively() {
        let mut console = console_with("maybe\nYES\n");
        let value = console.prompt_for_bool("Continue?", &["y", "yes"], &["n", "no"]);
        assert_eq!(value.ok(), Some(true));
        assert!(output_of(console).contains("Did not receive proper input. Try again."));

        let mut console = console_with("No\n");
        let value = console.prompt_for_bool("Continue?", &["y"], &["n", "no"]);
        assert_eq!(value.ok(), Some(false));
    }

    #[test]
    fn float_prompt_enforces_the_range() {
        let mut console = console_with("9.5\n0.25\n");
        let value = console.prompt_for_float("Volume:", 0.0, 1.0);
        assert_eq!(value.ok(), Some(0.25));
        assert!(output_of(console).contains("Invalid input. Must be between 0 and 1"));
    }

    #[test]
    fn date_prompt_rejects_bad_and_future_dates() {
        let mut console = console_with("13/45/2001\n01/01/2999\n07/04/1776\n");
        let value = console.prompt_for_date("Birthday:");
        assert_eq!(value.ok(), NaiveDate::from_ymd_opt(1776, 7, 4));
        let output = output_of(console);
        assert!(output.contains("Invalid format. Try again"));
        assert!(output.contains("Date must be before right now."));
    }

    #[test]
    fn two_digit_years_promote_against_today() {
        let Some(today) = NaiveDate::from_ymd_opt(2026, 8, 5) else {
            return;
        };
        assert_eq!(parse_date("5/6/99", today), NaiveDate::from_ymd_opt(1999, 5, 6));
        assert_eq!(parse_date("1/2/03", today), NaiveDate::from_ymd_opt(2003, 1, 2));
        assert_eq!(parse_date("12/31/26", today), NaiveDate::from_ymd_opt(2026, 12, 31));
        assert_eq!(parse_date("06/15/1990", today), NaiveDate::from_ymd_opt(1990, 6, 15));
        assert_eq!(parse_date("not a date", today), None);
    }
}
