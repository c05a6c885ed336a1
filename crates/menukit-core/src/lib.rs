//! Menu model and navigation engine for line-oriented console applications.
//!
//! A caller builds a tree of numbered-choice menus inside a [`MenuTree`],
//! then runs a [`Navigator`] on the root. The navigator alternates between
//! rendering a menu and reading a validated choice through the [`Console`]
//! abstraction, and dispatching the chosen option's action. Actions direct
//! navigation through [`Directive`] values; nesting is an explicit frame
//! stack, so depth and resume points are first-class state rather than
//! call-stack artifacts.
//!
//! # Components
//!
//! - [`Menu`] / [`MenuOption`] / [`MenuAction`]: the menu entity and its
//!   option/action model
//! - [`MenuTree`]: arena owning every menu of a session
//! - [`Navigator`]: the navigation state machine
//! - [`Console`]: I/O abstraction, so the same engine runs against a real
//!   terminal and a scripted test double

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod console;
mod error;
mod menu;
mod navigator;
mod option;
mod render;
mod tree;

pub use action::{Directive, MenuAction, Noop, OpenMenu};
pub use console::Console;
pub use error::{ActionError, ConsoleError, MenuError, NavError};
pub use menu::{Menu, ParentLink};
pub use navigator::Navigator;
pub use option::MenuOption;
pub use render::{Orientation, prompt_text};
pub use tree::{MenuId, MenuTree};
