//! Menu actions and navigation directives.
//!
//! A [`MenuAction`] is a unit of behavior invoked with no arguments when its
//! option is selected. Each invocation produces a [`Directive`], the
//! instruction the navigator executes next: stay on the current menu or
//! descend into a named submenu. Actions with no navigation intent return
//! [`Directive::Stay`].

use crate::{error::ActionError, tree::MenuId};

/// What an action asks the navigator to do once it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directive {
    /// No navigation request; the menu proceeds by its looping rules.
    #[default]
    Stay,

    /// Descend into the named menu.
    Open(MenuId),
}

/// A unit of behavior bound to a menu option.
///
/// Invoked with no input; either succeeds with a [`Directive`] or fails with
/// an [`ActionError`] that unwinds the navigation session.
pub trait MenuAction {
    /// Run the action.
    ///
    /// # Errors
    ///
    /// Returns an error when the behavior itself fails; the engine
    /// propagates it without recovery.
    fn invoke(&mut self) -> Result<Directive, ActionError>;
}

impl<F> MenuAction for F
where
    F: FnMut() -> Result<Directive, ActionError>,
{
    fn invoke(&mut self) -> Result<Directive, ActionError> {
        self()
    }
}

/// Action that does nothing and stays on the current menu.
///
/// Substituted wherever an option would otherwise have no action, so an
/// absent action is unrepresentable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl MenuAction for Noop {
    fn invoke(&mut self) -> Result<Directive, ActionError> {
        Ok(Directive::Stay)
    }
}

/// Action that descends into a fixed submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMenu(
    /// Menu to open.
    pub MenuId,
);

impl MenuAction for OpenMenu {
    fn invoke(&mut self) -> Result<Directive, ActionError> {
        Ok(Directive::Open(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MenuTree;

    #[test]
    fn closures_are_actions() {
        let mut hits = 0;
        {
            let mut bump = || {
                hits += 1;
                Ok(Directive::Stay)
            };
            assert_eq!(bump.invoke().ok(), Some(Directive::Stay));
            assert_eq!(bump.invoke().ok(), Some(Directive::Stay));
        }
        assert_eq!(hits, 2);
    }

    #[test]
    fn noop_stays() {
        assert_eq!(Noop.invoke().ok(), Some(Directive::Stay));
    }

    #[test]
    fn open_menu_requests_descent() {
        let mut tree = MenuTree::new();
        let id = tree.insert(crate::Menu::new());
        assert_eq!(OpenMenu(id).invoke().ok(), Some(Directive::Open(id)));
    }
}
