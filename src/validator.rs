/// Prompt-and-retry input validation

use crate::error::Result;
use crate::terminal::Terminal;
use std::borrow::Cow;
use std::io;
use thiserror::Error;
use tracing::debug;

mod sealed {
    pub trait Sealed {}
}

/// Types a line of input can be converted into
pub trait InputValue: Sized + sealed::Sealed {
    fn parse_input(text: &str) -> std::result::Result<Self, String>;
}

macro_rules! impl_input_value_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl InputValue for $ty {
                fn parse_input(text: &str) -> std::result::Result<Self, String> {
                    text.trim().parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_input_value_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

impl sealed::Sealed for String {}

impl InputValue for String {
    fn parse_input(text: &str) -> std::result::Result<Self, String> {
        Ok(text.to_string())
    }
}

impl sealed::Sealed for bool {}

impl InputValue for bool {
    fn parse_input(text: &str) -> std::result::Result<Self, String> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(format!("'{}' is neither true nor false", text))
        }
    }
}

/// Why a single prompt attempt did not produce a value
#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not parse input: {0}")]
    Parse(String),

    #[error("input was rejected by the validator")]
    ValidationFailed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Prompt until a line parses as `T` and satisfies `predicate`.
///
/// A parse failure prints `retry` and a blank line; a rejected value prints
/// `retry`. Either way the prompt is shown again. Only terminal I/O errors
/// are returned.
pub fn get_input<T, V, P>(term: &mut T, prompt: &str, retry: &str, predicate: P) -> Result<V>
where
    T: Terminal,
    V: InputValue,
    P: Fn(&V) -> bool,
{
    loop {
        match attempt(term, prompt, &predicate) {
            Ok(value) => return Ok(value),
            Err(InputError::Parse(reason)) => {
                debug!(%reason, "input did not parse");
                term.write_line(retry)?;
                term.write_line("")?;
            }
            Err(InputError::ValidationFailed) => {
                debug!("input failed validation");
                term.write_line(retry)?;
            }
            Err(InputError::Io(e)) => return Err(e.into()),
        }
    }
}

/// `get_input` that accepts any value that parses
pub fn read_input<T: Terminal, V: InputValue>(term: &mut T, prompt: &str, retry: &str) -> Result<V> {
    get_input(term, prompt, retry, |_| true)
}

/// One prompt, read and conversion cycle
pub fn attempt<T, V, P>(term: &mut T, prompt: &str, predicate: P) -> std::result::Result<V, InputError>
where
    T: Terminal,
    V: InputValue,
    P: Fn(&V) -> bool,
{
    term.write(&prompt_text(prompt))?;
    let line = term.read_line()?;

    let value = V::parse_input(&line).map_err(InputError::Parse)?;
    if !predicate(&value) {
        return Err(InputError::ValidationFailed);
    }

    Ok(value)
}

/// The prompt with a single separating space after it
pub fn prompt_text(prompt: &str) -> Cow<'_, str> {
    if prompt.ends_with(' ') {
        Cow::Borrowed(prompt)
    } else {
        Cow::Owned(format!("{} ", prompt))
    }
}
