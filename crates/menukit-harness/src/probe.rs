//! Probe actions that observe their own invocations.

use std::{cell::Cell, rc::Rc};

use menukit_core::{ActionError, Directive, MenuAction};

/// Cloneable invocation counter.
///
/// Hand its [`recorder`](Tally::recorder) to a menu as an action (or
/// perpetual action), keep the tally, and assert on [`count`](Tally::count)
/// after the session. Clones share one counter.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    hits: Rc<Cell<u32>>,
}

impl Tally {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a recorder built from this tally has run.
    pub fn count(&self) -> u32 {
        self.hits.get()
    }

    /// An action that bumps this tally and stays on the current menu.
    pub fn recorder(&self) -> impl MenuAction + 'static {
        let hits = Rc::clone(&self.hits);
        move || {
            hits.set(hits.get() + 1);
            Ok(Directive::Stay)
        }
    }

    /// An action that bumps this tally, then fails with `message`.
    pub fn failing(&self, message: &str) -> impl MenuAction + 'static {
        let hits = Rc::clone(&self.hits);
        let message = message.to_string();
        move || {
            hits.set(hits.get() + 1);
            Err(ActionError::new(message.clone()))
        }
    }
}
