//! Demonstration menu tree for the interactive client.
//!
//! Three levels deep on purpose: a looping main menu, a looping settings
//! menu, and a non-looping audio leaf, so redisplay, descent, back-resume,
//! and drop-through are all reachable from the keyboard.

use std::{
    cell::Cell,
    io::{self, Write},
    rc::Rc,
};

use chrono::NaiveDate;
use menukit_core::{
    ActionError, ConsoleError, Directive, Menu, MenuId, MenuOption, MenuTree, NavError, Navigator,
    Orientation,
};
use thiserror::Error;

use crate::console::StdioConsole;

/// Failures of the demonstration session.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A navigation session failed or an action escaped.
    #[error("navigation failed: {0}")]
    Nav(#[from] NavError),

    /// The console failed outside a navigation session.
    #[error("console failed: {0}")]
    Console(#[from] ConsoleError),
}

/// Run the demonstration session over the process's standard streams.
///
/// # Errors
///
/// Fails when the input source is exhausted, the streams break, or a menu
/// action fails.
pub fn run(orientation: Orientation) -> Result<(), DemoError> {
    let mut console = StdioConsole::stdio();
    let player = console.prompt_for_string("What should we call you?")?;
    let birthday = console.prompt_for_date("Your birthday (MM/dd/yyyy):")?;

    let rounds = Rc::new(Cell::new(0u32));
    let volume = Rc::new(Cell::new(5i32));

    let mut tree = MenuTree::new();
    let root = build_tree(&mut tree, orientation, &player, birthday, &rounds, &volume);

    loop {
        Navigator::new(&mut tree, &mut console).run(root)?;
        if !console.prompt_for_bool("Play again? (y/n)", &["y", "yes"], &["n", "no"])? {
            break;
        }
    }
    tracing::info!(rounds = rounds.get(), "session over");
    Ok(())
}

/// Build the demo tree bottom-up and return the root id.
fn build_tree(
    tree: &mut MenuTree,
    orientation: Orientation,
    player: &str,
    birthday: NaiveDate,
    rounds: &Rc<Cell<u32>>,
    volume: &Rc<Cell<i32>>,
) -> MenuId {
    let mut audio = Menu::titled("Audio").with_options(vec![
        volume_option("Volume up", volume, 1),
        volume_option("Volume down", volume, -1),
    ]);
    audio.set_orientation(orientation);
    let audio = tree.insert(audio);

    let reset_volume = Rc::clone(volume);
    let mut settings = Menu::titled("Settings").with_options(vec![
        MenuOption::submenu("Audio levels", audio),
        MenuOption::command("Reset volume", move || {
            reset_volume.set(5);
            emit("Volume reset to 5.")
        }),
    ]);
    settings.set_looping(true);
    settings.set_orientation(orientation);
    let settings = tree.insert(settings);

    let play_rounds = Rc::clone(rounds);
    let stats_rounds = Rc::clone(rounds);
    let mut root = Menu::titled("Main Menu").with_options(vec![
        MenuOption::command("Play a round", move || {
            play_rounds.set(play_rounds.get() + 1);
            emit(&format!("You dodge the falling crates. Round {} complete!", play_rounds.get()))
        }),
        MenuOption::command("Show statistics", move || {
            emit(&format!("Rounds played so far: {}", stats_rounds.get()))
        }),
        MenuOption::submenu("Settings", settings),
    ]);
    root.set_header(format!("menukit arcade - {player} (born {})", birthday.format("%m/%d/%Y")));
    root.set_looping(true);
    root.set_main(true);
    root.set_orientation(orientation);
    root.set_perpetual(|| {
        emit("(choose 0 to leave)")?;
        Ok(Directive::Stay)
    });
    let root = tree.insert(root);

    tree.adopt(root, settings);
    tree.adopt(settings, audio);
    root
}

/// Option that nudges the shared volume and reports the new level.
fn volume_option(label: &str, volume: &Rc<Cell<i32>>, step: i32) -> MenuOption {
    let volume = Rc::clone(volume);
    MenuOption::command(label.to_string(), move || {
        volume.set((volume.get() + step).clamp(0, 10));
        emit(&format!("Volume is now {}.", volume.get()))
    })
}

/// Print one line of action output to stdout.
fn emit(message: &str) -> Result<(), ActionError> {
    let mut out = io::stdout();
    writeln!(out, "{message}")
        .map_err(|e| ActionError::with_source("failed to write action output", e))
}
