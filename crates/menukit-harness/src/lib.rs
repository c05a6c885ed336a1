//! Deterministic test doubles for the menukit navigation engine.
//!
//! [`ScriptedConsole`] implements the core's `Console` trait over a queue
//! of prepared input lines, so the same navigation code that runs against a
//! real terminal runs in tests, with every prompt, rejected line, and pause
//! captured for assertions. [`Tally`] builds probe actions that count their
//! own invocations.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod probe;
pub mod script;

pub use probe::Tally;
pub use script::ScriptedConsole;
