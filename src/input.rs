//! Key mapping. Pure functions only; nothing here touches the engine.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    Quit,
}

/// Browser arrow-key codes: 37 left, 38 up, 39 right, 40 down.
///
/// The terminal front end uses [`command_from_key`]; this mapping is for
/// embedders that receive raw DOM key codes.
pub fn direction_from_key_code(code: u32) -> Option<Direction> {
    match code {
        37 => Some(Direction::Left),
        38 => Some(Direction::Up),
        39 => Some(Direction::Right),
        40 => Some(Direction::Down),
        _ => None,
    }
}

/// Map a terminal key press to a command. Releases and unknown keys map to `None`.
pub fn command_from_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_ctrl_c(&key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Turn(Direction::Up)),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Turn(Direction::Left)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Turn(Direction::Down)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Turn(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
