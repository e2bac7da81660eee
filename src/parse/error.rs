use std::fmt::Display;

/// Why one piece of a page could not be extracted. Sources recover from these locally by
/// skipping the affected dish; they never abort a scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingMarker(String),
    EmptyText(String),
}

impl Error {
    pub fn missing_marker(msg: &str) -> Self {
        Self::MissingMarker(msg.to_string())
    }
    pub fn empty_text(msg: &str) -> Self {
        Self::EmptyText(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMarker(msg) => write!(f, "Missing marker: {msg}"),
            Self::EmptyText(msg) => write!(f, "Empty text: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
