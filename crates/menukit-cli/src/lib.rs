//! Interactive demonstration client for the menukit navigation engine.
//!
//! Provides the production console collaborator ([`StdioConsole`]), with
//! blocking line I/O, validation, retry, and the end-of-input escape hatch,
//! plus a small demonstration menu tree wired to it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod console;
pub mod demo;

pub use console::StdioConsole;
