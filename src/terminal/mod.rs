/// Terminal module - the I/O boundary every component writes through

pub mod console;
pub mod memory;

pub use console::ConsoleTerminal;
pub use memory::{MemoryTerminal, TerminalEvent};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::io;

/// A single key press, reduced to what the selection menu cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Up,
    Down,
    Confirm,
    Other,
}

impl KeyPress {
    /// Classify a crossterm key event. Returns `None` for release/repeat events.
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        Some(match event.code {
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Enter => KeyPress::Confirm,
            _ => KeyPress::Other,
        })
    }
}

/// Ctrl-C, which raw mode no longer turns into SIGINT
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
        && event.code == KeyCode::Char('c')
        && event.modifiers.contains(KeyModifiers::CONTROL)
}

/// Foreground colors a menu can highlight with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightColor {
    Black,
    DarkGrey,
    Grey,
    White,
    #[default]
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
}

impl From<HighlightColor> for Color {
    fn from(color: HighlightColor) -> Self {
        match color {
            HighlightColor::Black => Color::Black,
            HighlightColor::DarkGrey => Color::DarkGrey,
            HighlightColor::Grey => Color::Grey,
            HighlightColor::White => Color::White,
            HighlightColor::Red => Color::Red,
            HighlightColor::DarkRed => Color::DarkRed,
            HighlightColor::Green => Color::Green,
            HighlightColor::DarkGreen => Color::DarkGreen,
            HighlightColor::Yellow => Color::Yellow,
            HighlightColor::DarkYellow => Color::DarkYellow,
            HighlightColor::Blue => Color::Blue,
            HighlightColor::DarkBlue => Color::DarkBlue,
            HighlightColor::Magenta => Color::Magenta,
            HighlightColor::DarkMagenta => Color::DarkMagenta,
            HighlightColor::Cyan => Color::Cyan,
            HighlightColor::DarkCyan => Color::DarkCyan,
        }
    }
}

/// Primitive terminal operations the toolkit is written against.
///
/// `ConsoleTerminal` drives the real terminal through crossterm; `MemoryTerminal`
/// replays scripted input and records everything written.
pub trait Terminal {
    /// Write text without a trailing newline
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text followed by a newline
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Blocking read of one line, without its line terminator
    fn read_line(&mut self) -> io::Result<String>;

    /// Blocking read of a single key press
    fn read_key(&mut self) -> io::Result<KeyPress>;

    fn set_foreground_color(&mut self, color: HighlightColor) -> io::Result<()>;

    fn reset_color(&mut self) -> io::Result<()>;

    /// Clear visible content and move the cursor home
    fn clear_screen(&mut self) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_keys_navigate() {
        assert_eq!(KeyPress::from_event(key(KeyCode::Up, KeyEventKind::Press)), Some(KeyPress::Up));
        assert_eq!(KeyPress::from_event(key(KeyCode::Down, KeyEventKind::Press)), Some(KeyPress::Down));
    }

    #[test]
    fn test_enter_confirms_and_others_are_ignored() {
        assert_eq!(KeyPress::from_event(key(KeyCode::Enter, KeyEventKind::Press)), Some(KeyPress::Confirm));
        assert_eq!(KeyPress::from_event(key(KeyCode::Char('j'), KeyEventKind::Press)), Some(KeyPress::Other));
        assert_eq!(KeyPress::from_event(key(KeyCode::Esc, KeyEventKind::Press)), Some(KeyPress::Other));
    }

    #[test]
    fn test_ctrl_c_is_an_interrupt() {
        let mut ctrl_c = key(KeyCode::Char('c'), KeyEventKind::Press);
        ctrl_c.modifiers = KeyModifiers::CONTROL;

        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&key(KeyCode::Char('c'), KeyEventKind::Press)));
        assert!(!is_interrupt(&key(KeyCode::Enter, KeyEventKind::Press)));
    }

    #[test]
    fn test_release_events_are_skipped() {
        assert_eq!(KeyPress::from_event(key(KeyCode::Enter, KeyEventKind::Release)), None);
    }

    #[test]
    fn test_highlight_color_parses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: HighlightColor,
        }

        let parsed: Wrapper = toml::from_str("color = \"dark_green\"").unwrap();
        assert_eq!(parsed.color, HighlightColor::DarkGreen);
        assert_eq!(Color::from(parsed.color), Color::DarkGreen);
    }
}
