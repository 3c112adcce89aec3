//! Terminal 2048.
//!
//! Wires the pure game session to the crossterm renderer: draw a frame,
//! block on the next event, feed it to the session, repeat.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_2048_core::{GameSession, GameSnapshot};
use tui_2048_input::{direction_for_key, is_restart, should_quit};
use tui_2048_store::JsonFileStore;
use tui_2048_term::{FrameBuffer, GameView, TerminalRenderer};
use tui_2048_types::SessionStatus;

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(0x2048)
}

fn best_score_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".tui-2048.json"),
        None => std::env::temp_dir().join("tui-2048.json"),
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term);
    // restore the terminal before reporting any error
    term.exit()?;
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = JsonFileStore::new(best_score_path());
    let mut session = GameSession::with_store(clock_seed(), Box::new(store));

    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = GameSnapshot::default();

    loop {
        let (width, height) = term.size()?;
        session.snapshot_into(&mut snapshot);
        view.render(&snapshot, width, height, &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if is_restart(key) {
                    session.reset(clock_seed());
                    continue;
                }
                if session.status() == SessionStatus::Playing {
                    if let Some(direction) = direction_for_key(key) {
                        session.apply(direction);
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
