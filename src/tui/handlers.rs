//! Key handling for the settings panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::Panel;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

pub fn handle_key(key: KeyEvent, panel: &mut Panel) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return HandleResult::Break,
        KeyCode::Up => panel.select_previous(),
        KeyCode::Down => panel.select_next(),
        KeyCode::Enter | KeyCode::Right => panel.enter_selected(),
        KeyCode::Backspace | KeyCode::Left => panel.go_parent(),
        KeyCode::Char('s') | KeyCode::Char(' ') => panel.choose_browse_dir(),
        _ => {}
    }

    HandleResult::Continue
}
