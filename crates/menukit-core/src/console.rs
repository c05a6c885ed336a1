//! Console abstraction for the navigation engine.
//!
//! The [`Console`] trait decouples the navigator from any concrete I/O.
//! The real stdin/stdout collaborator and the scripted test double both
//! implement it, so the same navigation code runs in production and in
//! deterministic tests.

use std::time::Duration;

use crate::error::ConsoleError;

/// Blocking, validating console I/O as the navigator consumes it.
pub trait Console {
    /// Show `prompt` and block until one integer in `min..=max` is read.
    ///
    /// Invalid input (non-numeric, out of range) is recovered locally by
    /// re-prompting and never surfaces to the caller.
    ///
    /// # Errors
    ///
    /// Fails only when the input source is exhausted or the underlying
    /// streams break.
    fn prompt_for_int(&mut self, prompt: &str, min: usize, max: usize)
    -> Result<usize, ConsoleError>;

    /// Hold for `duration` so freshly printed output can be read.
    ///
    /// Real consoles sleep; test consoles record the request and return.
    fn pause(&mut self, duration: Duration);
}
