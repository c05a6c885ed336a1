//! The navigation state machine.
//!
//! A [`Navigator`] drives one interactive session over a [`MenuTree`]: it
//! renders the top frame's menu, reads a validated choice through the
//! [`Console`], dispatches the chosen option's action, and decides from the
//! resulting `Outcome` whether to redisplay, descend, return, or reopen a
//! parent.
//!
//! Nesting is an explicit stack of frames rather than recursion through
//! the action layer. A back choice past a non-looping parent pushes a fresh
//! frame for that parent (the multi-level "drop-through"), while a looping
//! parent simply resumes its own suspended frame. Both are explicit outcome
//! values, so a single back choice can never reopen twice.

use std::time::Duration;

use crate::{
    action::Directive,
    console::Console,
    error::{MenuError, NavError},
    menu::{Menu, ParentLink},
    render,
    tree::{MenuId, MenuTree},
};

/// Delay after a completed dispatch at an outermost frame, so output the
/// action printed can be read before the next render.
const POST_DISPATCH_DELAY: Duration = Duration::from_secs(1);

/// One active invocation of a menu.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Menu this frame displays.
    menu: MenuId,
    /// Looping flag captured at entry.
    looping: bool,
    /// True iff no other frame for the same menu was on the stack at entry.
    /// Gates the perpetual action and the post-dispatch pause.
    outermost: bool,
    /// True while a child frame pushed by this frame's dispatch is alive.
    suspended: bool,
}

/// Result of one display/dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Stay on this menu and run another cycle.
    Redisplay,
    /// Push a fresh frame for the chosen submenu.
    Descend(MenuId),
    /// Pop this frame; the frame below resumes.
    ReturnToParent,
    /// Pop this frame and push a fresh frame for its non-looping parent.
    FellThrough(MenuId),
    /// Pop this frame with no upward reopen.
    Terminate,
}

/// Frame-stack navigation engine over a [`MenuTree`].
pub struct Navigator<'a, C: Console> {
    tree: &'a mut MenuTree,
    console: &'a mut C,
    stack: Vec<Frame>,
}

impl<'a, C: Console> Navigator<'a, C> {
    /// Create a navigator over `tree`, reading and pausing through
    /// `console`.
    pub fn new(tree: &'a mut MenuTree, console: &'a mut C) -> Self {
        Self { tree, console, stack: Vec::new() }
    }

    /// Current nesting depth. Zero outside [`Navigator::run`].
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Run an interactive session starting at `root`, until upward
    /// navigation leaves the tree.
    ///
    /// Each frame is governed by its menu's own looping flag, captured on
    /// entry.
    ///
    /// # Errors
    ///
    /// Fails fast on a menu with no options and no exit choice
    /// ([`NavError::DeadEnd`]), on ids foreign to the tree, and on console
    /// failure. A failed action unwinds the whole session as
    /// [`NavError::Action`]. The stack is cleared either way, so depth
    /// always returns to zero.
    pub fn run(&mut self, root: MenuId) -> Result<(), NavError> {
        let result = self.drive(root);
        self.stack.clear();
        result
    }

    fn drive(&mut self, root: MenuId) -> Result<(), NavError> {
        self.enter(root)?;
        while let Some(frame) = self.stack.last().copied() {
            if frame.suspended {
                // A child frame just popped; this frame's dispatch is now
                // complete.
                if let Some(top) = self.stack.last_mut() {
                    top.suspended = false;
                }
                self.post_dispatch(frame)?;
                if !frame.looping {
                    // Its own choice was non-zero, so no upward reopen.
                    self.stack.pop();
                    continue;
                }
            }
            let outcome = self.cycle(frame)?;
            tracing::debug!(menu = ?frame.menu, ?outcome, "cycle complete");
            match outcome {
                Outcome::Redisplay => {},
                Outcome::Descend(child) => {
                    if let Some(top) = self.stack.last_mut() {
                        top.suspended = true;
                    }
                    self.enter(child)?;
                },
                Outcome::ReturnToParent | Outcome::Terminate => {
                    self.stack.pop();
                },
                Outcome::FellThrough(parent) => {
                    self.stack.pop();
                    self.enter(parent)?;
                },
            }
        }
        Ok(())
    }

    /// Push a frame for `id`, validating that the menu can be navigated.
    fn enter(&mut self, id: MenuId) -> Result<(), NavError> {
        let menu = self.menu(id)?;
        if menu.options().is_empty() && !menu.allows_exit() {
            return Err(NavError::DeadEnd(id));
        }
        let looping = menu.is_looping();
        let outermost = !self.stack.iter().any(|frame| frame.menu == id);
        tracing::debug!(menu = ?id, looping, outermost, depth = self.stack.len(), "entering menu");
        self.stack.push(Frame { menu: id, looping, outermost, suspended: false });
        Ok(())
    }

    /// One display/dispatch cycle for the top frame.
    fn cycle(&mut self, frame: Frame) -> Result<Outcome, NavError> {
        let menu = self.menu(frame.menu)?;
        let text = render::prompt_text(menu);
        let min = usize::from(!menu.allows_exit());
        let max = menu.options().len();
        let parent = menu.parent();
        let choice = self.console.prompt_for_int(&text, min, max)?;
        if choice == 0 {
            return self.backward(parent);
        }
        let directive = self.dispatch(frame, choice)?;
        Ok(match directive {
            Directive::Open(child) => Outcome::Descend(child),
            Directive::Stay if frame.looping => Outcome::Redisplay,
            Directive::Stay => Outcome::ReturnToParent,
        })
    }

    /// Decide where a back/exit choice leads.
    fn backward(&self, parent: ParentLink) -> Result<Outcome, NavError> {
        match parent {
            ParentLink::Child(parent_id) => {
                if self.menu(parent_id)?.is_looping() {
                    // The parent's own active loop takes over.
                    Ok(Outcome::ReturnToParent)
                } else {
                    Ok(Outcome::FellThrough(parent_id))
                }
            },
            ParentLink::Root | ParentLink::Detached => Ok(Outcome::Terminate),
        }
    }

    /// Invoke the chosen option's action.
    ///
    /// For a [`Directive::Stay`] the dispatch is already complete and the
    /// perpetual action and pause run here; for a descend they are deferred
    /// until the child frame pops.
    fn dispatch(&mut self, frame: Frame, choice: usize) -> Result<Directive, NavError> {
        let index = choice - 1;
        tracing::debug!(menu = ?frame.menu, choice, "dispatching option");
        let directive = {
            let menu = self.menu_mut(frame.menu)?;
            let len = menu.options().len();
            let option =
                menu.option_mut(index).ok_or(MenuError::IndexOutOfBounds { index, len })?;
            option.action_mut().invoke()?
        };
        if matches!(directive, Directive::Stay) {
            self.post_dispatch(frame)?;
        }
        Ok(directive)
    }

    /// Perpetual action and pause, once a dispatch has fully completed.
    fn post_dispatch(&mut self, frame: Frame) -> Result<(), NavError> {
        if !frame.outermost {
            return Ok(());
        }
        let menu = self.menu_mut(frame.menu)?;
        if let Some(action) = menu.perpetual_mut() {
            let directive = action.invoke()?;
            if let Directive::Open(target) = directive {
                tracing::warn!(menu = ?frame.menu, ?target, "perpetual action requested navigation; ignored");
            }
        }
        self.console.pause(POST_DISPATCH_DELAY);
        Ok(())
    }

    fn menu(&self, id: MenuId) -> Result<&Menu, NavError> {
        self.tree.get(id).ok_or(NavError::UnknownMenu(id))
    }

    fn menu_mut(&mut self, id: MenuId) -> Result<&mut Menu, NavError> {
        self.tree.get_mut(id).ok_or(NavError::UnknownMenu(id))
    }
}

#[cfg(test)]
mod tests {
    use menukit_harness::ScriptedConsole;

    use super::*;
    use crate::option::MenuOption;

    #[test]
    fn dead_end_menu_fails_before_prompting() {
        let mut tree = MenuTree::new();
        let id = {
            let mut menu = Menu::new();
            menu.set_allow_exit(false);
            tree.insert(menu)
        };
        let mut console = ScriptedConsole::new(["0"]);
        {
            let mut navigator = Navigator::new(&mut tree, &mut console);
            assert!(matches!(navigator.run(id), Err(NavError::DeadEnd(_))));
            assert_eq!(navigator.depth(), 0);
        }
        assert!(console.prompts().is_empty());
    }

    #[test]
    fn empty_menu_with_exit_terminates_cleanly() {
        let mut tree = MenuTree::new();
        let id = tree.insert(Menu::titled("Nothing here"));
        let mut console = ScriptedConsole::new(["0"]);
        assert!(Navigator::new(&mut tree, &mut console).run(id).is_ok());
        assert_eq!(console.prompts().len(), 1);
    }

    #[test]
    fn submenu_directive_to_a_foreign_id_fails() {
        let mut bogus_tree = MenuTree::new();
        for _ in 0..3 {
            bogus_tree.insert(Menu::new());
        }
        let foreign = bogus_tree.insert(Menu::new());

        let mut tree = MenuTree::new();
        let root =
            tree.insert(Menu::new().with_options(vec![MenuOption::submenu("broken", foreign)]));
        let mut console = ScriptedConsole::new(["1"]);
        let mut navigator = Navigator::new(&mut tree, &mut console);
        assert!(matches!(navigator.run(root), Err(NavError::UnknownMenu(_))));
        assert_eq!(navigator.depth(), 0);
    }
}
