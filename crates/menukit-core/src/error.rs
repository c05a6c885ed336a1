//! Error types for the menukit engine.
//!
//! Strongly-typed errors per layer: action failures ([`ActionError`]),
//! structural misuse of a menu ([`MenuError`]), console failures
//! ([`ConsoleError`]), and navigation failures ([`NavError`]) which wrap
//! the others at the engine boundary.

use std::io;

use thiserror::Error;

use crate::tree::MenuId;

/// Failure raised by a [`MenuAction`](crate::MenuAction).
///
/// Actions own their recovery; anything they let escape unwinds the whole
/// navigation session. The engine never catches or masks these.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ActionError {
    /// Human-readable description of the failure.
    message: String,
    /// Underlying cause, if any.
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ActionError {
    /// Create an action error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    /// Create an action error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self { message: message.into(), source: Some(source.into()) }
    }
}

/// Structural misuse of a [`Menu`](crate::Menu)'s option list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    /// An insertion or removal index outside the option list.
    #[error("option index {index} out of bounds for {len} options")]
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Number of options in the list at the time.
        len: usize,
    },
}

/// Failure of the console collaborator.
///
/// Invalid user input is never an error: the console recovers it locally by
/// re-prompting. Only a broken or exhausted input source surfaces here.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input source stopped producing lines and the end-of-input budget
    /// ran out.
    #[error("input source exhausted")]
    Exhausted,

    /// I/O failure on the underlying streams.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failure of a navigation session.
#[derive(Debug, Error)]
pub enum NavError {
    /// A menu offers no option and no exit choice; opening it could only
    /// stall on an empty input range.
    #[error("menu {0:?} has no options and no exit choice")]
    DeadEnd(MenuId),

    /// A menu id that does not belong to the tree was reached through a
    /// directive or a parent link.
    #[error("menu {0:?} does not exist in this tree")]
    UnknownMenu(MenuId),

    /// Structural misuse detected while dispatching.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// A dispatched or perpetual action failed.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The console collaborator failed.
    #[error("console failure: {0}")]
    Console(#[from] ConsoleError),
}
