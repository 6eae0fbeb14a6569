/// Error types shared by the toolkit components

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    /// A component was constructed or invoked with arguments it can never render
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A table row with no cells
    #[error("Cannot print a row with no cells")]
    EmptyRow,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl KitError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        KitError::InvalidConfiguration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, KitError>;
