/*
    The error vocabulary the commander reports to the host, and the
    one place Bitcoin application results are translated into it.
*/

use thiserror::Error;
use tracing::debug;

use crate::app;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// The coin is switched off; retrying needs reconfiguration
    #[error("coin disabled")]
    Disabled,
    /// Unsupported or malformed request
    #[error("invalid input")]
    InvalidInput,
    /// The registration already exists
    #[error("duplicate entry")]
    Duplicate,
    #[error("invalid state")]
    InvalidState,
    /// The user declined; safe to retry
    #[error("aborted by the user")]
    UserAbort,
    #[error("generic error")]
    Generic
}

impl Error {
    /**
        Numeric code sent to the host.
    */
    pub fn code(&self) -> u16 {
        match self {
            Error::InvalidInput => 101,
            Error::Generic => 103,
            Error::UserAbort => 104,
            Error::InvalidState => 105,
            Error::Disabled => 106,
            Error::Duplicate => 107
        }
    }
}

impl From<app::Error> for Error {
    fn from(err: app::Error) -> Self {
        let translated = match err {
            app::Error::UserAbort => Error::UserAbort,
            app::Error::InvalidInput => Error::InvalidInput,
            app::Error::Duplicate => Error::Duplicate,
            app::Error::State => Error::InvalidState,
            app::Error::Unknown => Error::Generic
        };
        debug!(app_error = %err, code = translated.code(), "translated application error");
        translated
    }
}
