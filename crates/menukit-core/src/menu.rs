//! The menu entity.
//!
//! A [`Menu`] owns an ordered list of [`MenuOption`]s, display metadata, a
//! [`ParentLink`] for upward navigation, and the flags that drive the
//! navigation algorithm (looping, allow-exit, perpetual action). Insertion
//! order is display order; the rendered numbering `1..=N` derives from it.

use std::fmt;

use crate::{
    action::MenuAction,
    error::MenuError,
    option::MenuOption,
    render::Orientation,
    tree::MenuId,
};

/// Upward navigation link of a menu.
///
/// Root status is an explicit variant, never encoded through the link
/// pointing back at the menu itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentLink {
    /// Explicitly marked top of the tree; a back/exit choice here ends the
    /// session.
    Root,

    /// No parent assigned. Behaves like a root for navigation, but is not
    /// marked as the main menu.
    #[default]
    Detached,

    /// Child of the named menu; a back choice hands control to it.
    Child(MenuId),
}

/// A named, ordered set of selectable options with display metadata and
/// navigation linkage to a parent.
pub struct Menu {
    options: Vec<MenuOption>,
    parent: ParentLink,
    header: Option<String>,
    prompt: Option<String>,
    footer: Option<String>,
    orientation: Orientation,
    perpetual: Option<Box<dyn MenuAction>>,
    allow_exit: bool,
    looping: bool,
}

impl Menu {
    /// Footer preset by [`Menu::titled`], asking for a selection.
    pub const DEFAULT_FOOTER: &'static str = "Enter your selection:";

    /// Create an empty menu: vertical, exit allowed, not looping, detached.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            parent: ParentLink::Detached,
            header: None,
            prompt: None,
            footer: None,
            orientation: Orientation::Vertical,
            perpetual: None,
            allow_exit: true,
            looping: false,
        }
    }

    /// Create a menu with a prompt and the standard selection footer.
    pub fn titled(prompt: impl Into<String>) -> Self {
        let mut menu = Self::new();
        menu.prompt = Some(prompt.into());
        menu.footer = Some(Self::DEFAULT_FOOTER.to_string());
        menu
    }

    /// Attach options at construction time.
    #[must_use]
    pub fn with_options(mut self, options: Vec<MenuOption>) -> Self {
        self.options = options;
        self
    }

    /// Ordered options; display order and numbering derive from this.
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Option at `index`, if present.
    pub fn option(&self, index: usize) -> Option<&MenuOption> {
        self.options.get(index)
    }

    /// Mutable option at `index`, for dispatch.
    pub(crate) fn option_mut(&mut self, index: usize) -> Option<&mut MenuOption> {
        self.options.get_mut(index)
    }

    /// Append an option.
    pub fn add_option(&mut self, option: MenuOption) {
        self.options.push(option);
    }

    /// Insert an option at `index`, shifting subsequent entries right.
    ///
    /// # Errors
    ///
    /// Fails when `index` is past the end of the list.
    pub fn insert_option(&mut self, index: usize, option: MenuOption) -> Result<(), MenuError> {
        if index > self.options.len() {
            return Err(MenuError::IndexOutOfBounds { index, len: self.options.len() });
        }
        self.options.insert(index, option);
        Ok(())
    }

    /// Remove and return the option at `index`.
    ///
    /// # Errors
    ///
    /// Fails when `index` does not name an option.
    pub fn remove_option(&mut self, index: usize) -> Result<MenuOption, MenuError> {
        if index >= self.options.len() {
            return Err(MenuError::IndexOutOfBounds { index, len: self.options.len() });
        }
        Ok(self.options.remove(index))
    }

    /// Remove and return the first option with the given label.
    pub fn remove_labeled(&mut self, label: &str) -> Option<MenuOption> {
        let index = self.options.iter().position(|option| option.label() == label)?;
        Some(self.options.remove(index))
    }

    /// Upward navigation link.
    pub fn parent(&self) -> ParentLink {
        self.parent
    }

    /// Set the upward navigation link.
    pub fn set_parent(&mut self, parent: ParentLink) {
        self.parent = parent;
    }

    /// Mark this menu as the main menu (`true`) or detach it (`false`).
    pub fn set_main(&mut self, main: bool) {
        self.parent = if main { ParentLink::Root } else { ParentLink::Detached };
    }

    /// Whether this menu is explicitly marked as the main menu.
    pub fn is_root(&self) -> bool {
        matches!(self.parent, ParentLink::Root)
    }

    /// Header text displayed before the prompt.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Set the header text.
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    /// Remove the header text.
    pub fn clear_header(&mut self) {
        self.header = None;
    }

    /// Prompt text displayed before the options.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Set the prompt text.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = Some(prompt.into());
    }

    /// Remove the prompt text.
    pub fn clear_prompt(&mut self) {
        self.prompt = None;
    }

    /// Footer text displayed when asking for input.
    ///
    /// Typically ends in `:`; the renderer appends a single space after it.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Set the footer text.
    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = Some(footer.into());
    }

    /// Remove the footer text.
    pub fn clear_footer(&mut self) {
        self.footer = None;
    }

    /// Direction options are laid out in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the layout direction.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Action run after every dispatched choice at the outermost frame.
    pub fn perpetual(&self) -> Option<&dyn MenuAction> {
        self.perpetual.as_deref()
    }

    /// Mutable access to the perpetual action, for dispatch.
    pub(crate) fn perpetual_mut(&mut self) -> Option<&mut (dyn MenuAction + 'static)> {
        self.perpetual.as_deref_mut()
    }

    /// Install a perpetual action.
    pub fn set_perpetual(&mut self, action: impl MenuAction + 'static) {
        self.perpetual = Some(Box::new(action));
    }

    /// Remove the perpetual action.
    pub fn clear_perpetual(&mut self) {
        self.perpetual = None;
    }

    /// Whether the 0-valued back/exit choice is offered.
    pub fn allows_exit(&self) -> bool {
        self.allow_exit
    }

    /// Offer or withhold the 0-valued back/exit choice.
    pub fn set_allow_exit(&mut self, allow: bool) {
        self.allow_exit = allow;
    }

    /// Whether this menu redisplays after a dispatched action.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Set whether this menu redisplays after a dispatched action.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("options", &self.options)
            .field("parent", &self.parent)
            .field("header", &self.header)
            .field("prompt", &self.prompt)
            .field("footer", &self.footer)
            .field("orientation", &self.orientation)
            .field("has_perpetual", &self.perpetual.is_some())
            .field("allow_exit", &self.allow_exit)
            .field("looping", &self.looping)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(menu: &Menu) -> Vec<&str> {
        menu.options().iter().map(MenuOption::label).collect()
    }

    #[test]
    fn titled_presets_the_selection_footer() {
        let menu = Menu::titled("Main Menu");
        assert_eq!(menu.prompt(), Some("Main Menu"));
        assert_eq!(menu.footer(), Some(Menu::DEFAULT_FOOTER));
    }

    #[test]
    fn insertion_shifts_subsequent_entries() {
        let mut menu = Menu::new()
            .with_options(vec![MenuOption::inert("a"), MenuOption::inert("c")]);
        let _ = menu.insert_option(1, MenuOption::inert("b"));
        assert_eq!(labels(&menu), ["a", "b", "c"]);
    }

    #[test]
    fn insertion_past_the_end_fails() {
        let mut menu = Menu::new();
        let err = menu.insert_option(1, MenuOption::inert("x"));
        assert_eq!(err, Err(MenuError::IndexOutOfBounds { index: 1, len: 0 }));
    }

    #[test]
    fn removal_by_index_and_label() {
        let mut menu = Menu::new().with_options(vec![
            MenuOption::inert("a"),
            MenuOption::inert("b"),
            MenuOption::inert("c"),
        ]);
        assert_eq!(menu.remove_option(0).map(|o| o.label().to_string()).ok().as_deref(), Some("a"));
        assert!(menu.remove_labeled("c").is_some());
        assert!(menu.remove_labeled("c").is_none());
        assert_eq!(labels(&menu), ["b"]);
        assert!(menu.remove_option(1).is_err());
    }

    #[test]
    fn main_marker_round_trips() {
        let mut menu = Menu::new();
        assert_eq!(menu.parent(), ParentLink::Detached);
        menu.set_main(true);
        assert!(menu.is_root());
        menu.set_main(false);
        assert_eq!(menu.parent(), ParentLink::Detached);
        assert!(!menu.is_root());
    }
}
