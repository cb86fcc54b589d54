// error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures a single calculation can hit. None of these is fatal to the
/// process; the interactive loop reports them and moves on.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),
    #[error("division by zero is not allowed")]
    DivisionByZero,
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

/// Non-fatal persistence failures. The in-memory log has already been
/// updated when one of these is returned; only the backing file lagged.
#[derive(Error, Debug)]
pub enum HistoryWarning {
    #[error("could not load history from {path}: {source}")]
    Load { path: PathBuf, source: io::Error },
    #[error("could not save history entry to {path}: {source}")]
    Save { path: PathBuf, source: io::Error },
    #[error("could not clear history file {path}: {source}")]
    Clear { path: PathBuf, source: io::Error },
}
