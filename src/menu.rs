/// Keyboard-navigable selection menu

use crate::error::{KitError, Result};
use crate::terminal::{HighlightColor, KeyPress, Terminal};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Menu {
    options: Vec<String>,
    highlight: HighlightColor,
    banner: Option<String>,
}

impl Menu {
    /// Build a menu. At least one option is required.
    pub fn new<S: Into<String>>(
        options: impl IntoIterator<Item = S>,
        highlight: HighlightColor,
    ) -> Result<Self> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if options.is_empty() {
            return Err(KitError::invalid_config("a menu needs at least one option"));
        }

        Ok(Menu {
            options,
            highlight,
            banner: None,
        })
    }

    /// Text shown above the options, followed by a blank line
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Show the menu and block until an option is committed with Enter.
    ///
    /// `initial` is the option highlighted on the first draw. The screen is
    /// cleared after every key press, including the committing one.
    pub fn await_input<T: Terminal>(&self, term: &mut T, initial: usize) -> Result<usize> {
        if initial >= self.options.len() {
            return Err(KitError::invalid_config(format!(
                "initial index {} is outside a menu of {} options",
                initial,
                self.options.len()
            )));
        }

        let mut selected = initial;

        loop {
            self.draw(term, selected)?;

            let key = term.read_key()?;
            term.clear_screen()?;

            match next_index(selected, self.options.len(), key) {
                Some(index) => {
                    debug!(?key, from = selected, to = index, "menu navigation");
                    selected = index;
                }
                None => {
                    debug!(selected, "menu selection committed");
                    return Ok(selected);
                }
            }
        }
    }

    fn draw<T: Terminal>(&self, term: &mut T, selected: usize) -> Result<()> {
        if let Some(banner) = &self.banner {
            term.write_line(banner)?;
            term.write_line("")?;
        }

        for (i, option) in self.options.iter().enumerate() {
            if i == selected {
                term.set_foreground_color(self.highlight)?;
            }

            term.write_line(&format!("{}.\t{}", i + 1, option))?;
            term.reset_color()?;
        }

        Ok(())
    }
}

/// Index highlighted after `key` is pressed on a menu of `len` options.
///
/// Up and Down wrap around; `None` means the current index was committed.
pub fn next_index(current: usize, len: usize, key: KeyPress) -> Option<usize> {
    let last = len.saturating_sub(1);

    match key {
        KeyPress::Up => Some(if current == 0 { last } else { current - 1 }),
        KeyPress::Down => Some(if current >= last { 0 } else { current + 1 }),
        KeyPress::Confirm => None,
        KeyPress::Other => Some(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{MemoryTerminal, TerminalEvent};

    fn abc_menu() -> Menu {
        Menu::new(["A", "B", "C"], HighlightColor::Red).unwrap()
    }

    #[test]
    fn test_empty_menu_is_rejected() {
        let result = Menu::new(Vec::<String>::new(), HighlightColor::Red);
        assert!(matches!(result, Err(KitError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_up_and_down_cycle_back_to_start() {
        for len in 2..7 {
            for start in 0..len {
                let mut up = start;
                let mut down = start;
                for _ in 0..len {
                    up = next_index(up, len, KeyPress::Up).unwrap();
                    down = next_index(down, len, KeyPress::Down).unwrap();
                }
                assert_eq!(up, start, "up cycle for len {}", len);
                assert_eq!(down, start, "down cycle for len {}", len);
            }
        }
    }

    #[test]
    fn test_navigation_wraps_at_edges() {
        assert_eq!(next_index(0, 3, KeyPress::Up), Some(2));
        assert_eq!(next_index(2, 3, KeyPress::Down), Some(0));
    }

    #[test]
    fn test_single_option_never_moves() {
        assert_eq!(next_index(0, 1, KeyPress::Up), Some(0));
        assert_eq!(next_index(0, 1, KeyPress::Down), Some(0));
    }

    #[test]
    fn test_other_keys_keep_index_and_confirm_commits() {
        assert_eq!(next_index(1, 3, KeyPress::Other), Some(1));
        assert_eq!(next_index(1, 3, KeyPress::Confirm), None);
    }

    #[test]
    fn test_down_down_enter_selects_third_option() {
        let mut term = MemoryTerminal::new().with_keys([
            KeyPress::Down,
            KeyPress::Down,
            KeyPress::Confirm,
        ]);

        assert_eq!(abc_menu().await_input(&mut term, 0).unwrap(), 2);
        assert_eq!(term.pending_keys(), 0);
        assert_eq!(term.clear_count(), 3);
        assert!(term.screen().is_empty());
    }

    #[test]
    fn test_confirm_returns_without_redraw() {
        let mut term = MemoryTerminal::new().with_keys([KeyPress::Confirm]);

        assert_eq!(abc_menu().await_input(&mut term, 1).unwrap(), 1);
        // one draw, then the clear that precedes returning
        assert_eq!(term.output(), "1.\tA\n2.\tB\n3.\tC\n");
        assert_eq!(term.events().last(), Some(&TerminalEvent::Clear));
    }

    #[test]
    fn test_highlight_wraps_only_the_selected_line() {
        let mut term = MemoryTerminal::new().with_keys([KeyPress::Confirm]);
        abc_menu().await_input(&mut term, 1).unwrap();

        let events = term.events();
        let color_at = events
            .iter()
            .position(|e| *e == TerminalEvent::Color(HighlightColor::Red))
            .unwrap();
        assert_eq!(events[color_at + 1], TerminalEvent::Text("2.\tB\n".to_string()));
        assert_eq!(events[color_at + 2], TerminalEvent::ResetColor);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, TerminalEvent::Color(_)))
                .count(),
            1
        );
    }

    #[test]
    fn test_banner_is_printed_above_options() {
        let menu = abc_menu().with_banner("Pick one");
        let mut term = MemoryTerminal::new().with_keys([KeyPress::Other, KeyPress::Confirm]);

        assert_eq!(menu.await_input(&mut term, 0).unwrap(), 0);
        assert!(term.output().starts_with("Pick one\n\n1.\tA\n"));
        assert!(term.screen().is_empty());
    }

    #[test]
    fn test_initial_index_out_of_range_is_rejected() {
        let mut term = MemoryTerminal::new().with_keys([KeyPress::Confirm]);
        let result = abc_menu().await_input(&mut term, 3);

        assert!(matches!(result, Err(KitError::InvalidConfiguration(_))));
        assert_eq!(term.pending_keys(), 1);
    }

    #[test]
    fn test_exhausted_input_surfaces_io_error() {
        let mut term = MemoryTerminal::new().with_keys([KeyPress::Down]);
        assert!(matches!(abc_menu().await_input(&mut term, 0), Err(KitError::Io(_))));
    }
}
