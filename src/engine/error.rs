use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbacusError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Not a digit: {0:?}")]
    InvalidDigit(char),
}
