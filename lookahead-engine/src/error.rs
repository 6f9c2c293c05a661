//! Lookahead Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Result of any fallible Lookahead operation.
pub type Result<T> = result::Result<T, Error>;

/// Category of a Lookahead error, usable for matching without inspecting messages.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Piece letter is not one of PNBRQK in either case.
    ParsePieceMalformed,

    /// Piece placement field does not describe exactly 8 ranks of 8 squares.
    PlacementMalformed,
    /// Piece placement holds more pieces than a board may carry.
    PlacementTooManyPieces,

    /// Engine search depth is zero or greater than the supported maximum.
    EngineDepthOutOfRange,
    /// Evaluation parameters must be finite and non-negative.
    EvalConfigInvalid,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParsePieceMalformed => "parse piece malformed",

            ErrorKind::PlacementMalformed => "placement malformed",
            ErrorKind::PlacementTooManyPieces => "placement too many pieces",

            ErrorKind::EngineDepthOutOfRange => "engine depth out of range",
            ErrorKind::EvalConfigInvalid => "eval config invalid",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by fallible Lookahead operations.
/// Every variant carries an [`ErrorKind`], optionally with context.
#[derive(Debug)]
pub enum Error {
    /// Just the kind.
    Simple(ErrorKind),
    /// Kind with a description of what was wrong.
    Message(ErrorKind, String),
    /// Kind wrapping a lower level error.
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    /// Wrap `source` as the cause of an error of `kind`.
    pub fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error::Custom(kind, source.into())
    }

    /// Returns the kind of this error, regardless of any attached context.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::Simple(kind) | Error::Message(kind, _) | Error::Custom(kind, _) => kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.kind().as_str())?;
        match self {
            Error::Simple(_) => Ok(()),
            Error::Message(_, message) => write!(f, ": {message}"),
            Error::Custom(_, source) => write!(f, ", error: {source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Custom(_, source) => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::Simple(kind)
    }
}

/// Attach a message to a kind, as in `(ErrorKind::PlacementMalformed, "too short").into()`.
impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((kind, message): (ErrorKind, S)) -> Self {
        Error::Message(kind, message.to_string())
    }
}
