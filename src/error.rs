use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

/// Failure of a single product fetch attempt.
///
/// `Display` yields the fixed message shown to the user; the detail is only
/// meant for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    Network(String),
    /// Body matched neither accepted response shape.
    Format(String),
}

impl FetchError {
    pub const NETWORK_MESSAGE: &'static str = "Failed to fetch products";
    pub const FORMAT_MESSAGE: &'static str = "Invalid data format received from API";

    pub fn detail(&self) -> &str {
        match self {
            Self::Network(detail) | Self::Format(detail) => detail,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(_) => f.write_str(Self::NETWORK_MESSAGE),
            Self::Format(_) => f.write_str(Self::FORMAT_MESSAGE),
        }
    }
}

impl StdError for FetchError {}

/// Requested theme identifier is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidThemeError(pub String);

impl fmt::Display for InvalidThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid theme: {}", self.0)
    }
}

impl StdError for InvalidThemeError {}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Fetch(FetchError),
    Theme(InvalidThemeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Fetch(e) => write!(f, "{e}"),
            Self::Theme(e) => write!(f, "{e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Fetch(e) => Some(e),
            Self::Theme(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<InvalidThemeError> for Error {
    fn from(e: InvalidThemeError) -> Self {
        Self::Theme(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
