/// Scripted in-memory terminal for driving the toolkit without a TTY

use super::{HighlightColor, KeyPress, Terminal};
use std::collections::VecDeque;
use std::io;

/// Everything a `MemoryTerminal` observed, in order
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    Text(String),
    Color(HighlightColor),
    ResetColor,
    Clear,
}

#[derive(Debug, Default)]
pub struct MemoryTerminal {
    keys: VecDeque<KeyPress>,
    lines: VecDeque<String>,
    events: Vec<TerminalEvent>,
}

impl MemoryTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue key presses returned by `read_key`
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = KeyPress>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Queue lines returned by `read_line`
    pub fn with_lines<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn events(&self) -> &[TerminalEvent] {
        &self.events
    }

    /// All text written so far, concatenated
    pub fn output(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                TerminalEvent::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Output written since the most recent `clear_screen`
    pub fn screen(&self) -> String {
        let start = self
            .events
            .iter()
            .rposition(|event| *event == TerminalEvent::Clear)
            .map_or(0, |idx| idx + 1);

        self.events[start..]
            .iter()
            .filter_map(|event| match event {
                TerminalEvent::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == TerminalEvent::Clear)
            .count()
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn pending_lines(&self) -> usize {
        self.lines.len()
    }

    fn exhausted(what: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no scripted {} left", what),
        )
    }
}

impl Terminal for MemoryTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.events.push(TerminalEvent::Text(text.to_string()));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.events.push(TerminalEvent::Text(format!("{}\n", text)));
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.lines.pop_front().ok_or_else(|| Self::exhausted("lines"))
    }

    fn read_key(&mut self) -> io::Result<KeyPress> {
        self.keys.pop_front().ok_or_else(|| Self::exhausted("keys"))
    }

    fn set_foreground_color(&mut self, color: HighlightColor) -> io::Result<()> {
        self.events.push(TerminalEvent::Color(color));
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.events.push(TerminalEvent::ResetColor);
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.events.push(TerminalEvent::Clear);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_is_consumed_in_order() {
        let mut term = MemoryTerminal::new()
            .with_keys([KeyPress::Down, KeyPress::Confirm])
            .with_lines(["first", "second"]);

        assert_eq!(term.read_key().unwrap(), KeyPress::Down);
        assert_eq!(term.read_line().unwrap(), "first");
        assert_eq!(term.pending_keys(), 1);
        assert_eq!(term.pending_lines(), 1);
    }

    #[test]
    fn test_exhausted_script_reports_eof() {
        let mut term = MemoryTerminal::new();
        let err = term.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_screen_only_shows_text_after_last_clear() {
        let mut term = MemoryTerminal::new();
        term.write_line("old").unwrap();
        term.clear_screen().unwrap();
        term.write("new").unwrap();

        assert_eq!(term.output(), "old\nnew");
        assert_eq!(term.screen(), "new");
        assert_eq!(term.clear_count(), 1);
    }
}
