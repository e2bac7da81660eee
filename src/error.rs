use std::fmt::{self, Display, Formatter};

/// Errors that end the dashboard. Per-restaurant fetch and parse problems never get here.
#[derive(Debug)]
pub enum Error {
    Terminal(std::io::Error),
    Request(reqwest::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Terminal(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Terminal(e) => write!(f, "Terminal error: {}", e),
            Error::Request(e) => write!(f, "Request error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
