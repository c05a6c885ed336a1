//! Prompt composition.
//!
//! Builds the exact text a console shows for one display cycle: header,
//! prompt, numbered options, the back/exit line, and footer. The format is
//! byte-exact and covered by fixtures, since scripted sessions assert
//! against it.

use std::fmt::Write as _;

use crate::menu::{Menu, ParentLink};

/// Direction a menu's options are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// One option per line.
    #[default]
    Vertical,

    /// Options on one line, tab-separated.
    Horizontal,
}

impl Orientation {
    /// Separator placed before each rendered option.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Vertical => "\n",
            Self::Horizontal => "\t",
        }
    }
}

/// Compose the full prompt text for one display cycle of `menu`.
///
/// Layout: `<header>\n\n` (if set), `<prompt>` (if set), then each option
/// as `<sep><n>) <label>` with 1-based numbering, then the back/exit line
/// `<sep><sep>0) Exit\n` (root or detached menu) or `<sep><sep>0) Back\n`
/// (child menu), replaced by a bare newline when exit is not allowed, then
/// `<footer> ` with a single trailing space (if set). Strings that are
/// empty after trimming count as unset.
pub fn prompt_text(menu: &Menu) -> String {
    let mut out = String::new();
    if let Some(header) = visible(menu.header()) {
        out.push_str(header);
        out.push_str("\n\n");
    }
    if let Some(prompt) = visible(menu.prompt()) {
        out.push_str(prompt);
    }
    let sep = menu.orientation().separator();
    for (index, option) in menu.options().iter().enumerate() {
        let _ = write!(out, "{sep}{}) {option}", index + 1);
    }
    if menu.allows_exit() {
        out.push_str(sep);
        out.push_str(sep);
        out.push_str(match menu.parent() {
            ParentLink::Child(_) => "0) Back\n",
            ParentLink::Root | ParentLink::Detached => "0) Exit\n",
        });
    } else {
        out.push('\n');
    }
    if let Some(footer) = visible(menu.footer()) {
        out.push_str(footer);
        out.push(' ');
    }
    out
}

fn visible(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{option::MenuOption, tree::MenuTree};

    fn sample() -> Menu {
        let mut menu = Menu::titled("Pick one:");
        menu.set_header("Game");
        menu.set_footer("Choose:");
        menu.with_options(vec![MenuOption::inert("Play"), MenuOption::inert("Quit")])
    }

    #[test]
    fn vertical_root_layout() {
        let menu = sample();
        assert_eq!(prompt_text(&menu), "Game\n\nPick one:\n1) Play\n2) Quit\n\n0) Exit\nChoose: ");
    }

    #[test]
    fn horizontal_layout_uses_tabs() {
        let mut menu = sample();
        menu.set_orientation(Orientation::Horizontal);
        menu.clear_header();
        assert_eq!(prompt_text(&menu), "Pick one:\t1) Play\t2) Quit\t\t0) Exit\nChoose: ");
    }

    #[test]
    fn child_menus_offer_back() {
        let mut tree = MenuTree::new();
        let root = tree.insert(Menu::new());
        let child = tree.insert_child(root, sample());
        let text = tree.get(child).map(prompt_text).unwrap_or_default();
        assert!(text.ends_with("\n\n0) Back\nChoose: "));
        assert!(!text.contains("Exit"));
    }

    #[test]
    fn exit_suppression_leaves_a_bare_newline() {
        let mut menu = sample();
        menu.set_allow_exit(false);
        assert_eq!(prompt_text(&menu), "Game\n\nPick one:\n1) Play\n2) Quit\nChoose: ");
        assert!(!prompt_text(&menu).contains("0)"));
    }

    #[test]
    fn blank_metadata_renders_as_absent() {
        let mut menu = sample();
        menu.set_header("   ");
        menu.clear_footer();
        assert_eq!(prompt_text(&menu), "Pick one:\n1) Play\n2) Quit\n\n0) Exit\n");
    }

    #[test]
    fn empty_menu_still_offers_exit() {
        let menu = Menu::titled("Nothing here");
        assert_eq!(prompt_text(&menu), "Nothing here\n\n0) Exit\nEnter your selection: ");
    }
}
