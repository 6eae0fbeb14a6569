/// Crossterm-backed terminal

use super::{is_interrupt, HighlightColor, KeyPress, Terminal};
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, BufRead, Stdout, Write};
use tracing::trace;

pub struct ConsoleTerminal {
    stdout: Stdout,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        ConsoleTerminal {
            stdout: io::stdout(),
        }
    }

    /// Wait for the next key press. Raw mode is held only for the duration of the read.
    fn next_key_press() -> io::Result<KeyPress> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if is_interrupt(&key_event) {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted by Ctrl-C"));
                }

                if let Some(key) = KeyPress::from_event(key_event) {
                    trace!(?key_event, ?key, "key press");
                    return Ok(key);
                }
            }
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.stdout, Print(text))?;
        self.stdout.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        queue!(self.stdout, Print(text), Print("\n"))?;
        self.stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed while waiting for a line",
            ));
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn read_key(&mut self) -> io::Result<KeyPress> {
        self.stdout.flush()?;

        terminal::enable_raw_mode()?;
        let result = Self::next_key_press();
        terminal::disable_raw_mode()?;

        result
    }

    fn set_foreground_color(&mut self, color: HighlightColor) -> io::Result<()> {
        queue!(self.stdout, SetForegroundColor(color.into()))
    }

    fn reset_color(&mut self) -> io::Result<()> {
        queue!(self.stdout, ResetColor)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        execute!(self.stdout, cursor::MoveTo(0, 0))?;
        Ok(())
    }
}
