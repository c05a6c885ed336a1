//! Selectable menu entries.

use std::fmt;

use crate::{
    action::{Directive, MenuAction, Noop, OpenMenu},
    error::ActionError,
    tree::MenuId,
};

/// A labeled, selectable entry bound to one action.
///
/// The action is never absent: label-only constructors substitute [`Noop`],
/// and clearing the action restores it. Converting an option to display
/// text yields exactly its label.
pub struct MenuOption {
    label: String,
    action: Box<dyn MenuAction>,
}

impl MenuOption {
    /// Create an option with an explicit action.
    pub fn new(label: impl Into<String>, action: impl MenuAction + 'static) -> Self {
        Self { label: label.into(), action: Box::new(action) }
    }

    /// Create an option with no behavior beyond its label.
    pub fn inert(label: impl Into<String>) -> Self {
        Self::new(label, Noop)
    }

    /// Create an option that descends into the named submenu.
    pub fn submenu(label: impl Into<String>, target: MenuId) -> Self {
        Self::new(label, OpenMenu(target))
    }

    /// Create an option from a plain behavior with no navigation intent.
    pub fn command<F>(label: impl Into<String>, mut run: F) -> Self
    where
        F: FnMut() -> Result<(), ActionError> + 'static,
    {
        Self::new(label, move || {
            run()?;
            Ok(Directive::Stay)
        })
    }

    /// Display text for this option.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the display text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replace the action.
    pub fn set_action(&mut self, action: impl MenuAction + 'static) {
        self.action = Box::new(action);
    }

    /// Remove the action, restoring the no-op.
    pub fn clear_action(&mut self) {
        self.action = Box::new(Noop);
    }

    /// Mutable access to the action, for dispatch.
    pub(crate) fn action_mut(&mut self) -> &mut dyn MenuAction {
        self.action.as_mut()
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl fmt::Debug for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption").field("label", &self.label).finish_non_exhaustive()
    }
}
