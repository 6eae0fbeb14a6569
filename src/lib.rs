//! Terminal building blocks for small console programs: a keyboard-driven
//! selection menu, a fixed-width table printer and a validating input prompt.

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod table;
pub mod terminal;
pub mod validator;

pub use error::{KitError, Result};
pub use menu::Menu;
pub use table::{Table, TableRecord};
pub use terminal::{ConsoleTerminal, HighlightColor, KeyPress, MemoryTerminal, Terminal};
pub use validator::{get_input, read_input, InputValue};
