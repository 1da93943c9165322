use std::{io::ErrorKind, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// System clock could not be read when opening a [Session](crate::prelude::Session).
    /// Every requested log category is then left absent.
    #[error("failed to read system time")]
    SystemTime,

    /// Log file could not be created. The associated category
    /// remains absent for the rest of the session.
    #[error("failed to create \"{0}\": {1}")]
    FileCreation(PathBuf, ErrorKind),

    /// Not a known ranging code
    #[error("unknown ranging code \"{0}\"")]
    UnknownCode(String),
}
