use std::error;
use std::fmt::{Display, Formatter};

/// Failure of a color or colormap lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No single color has this name.
    UnknownColor(String),
    /// No colormap name is a prefix of this name.
    UnknownColormap(String),
    /// A channel value outside `0 ..= 255`.
    ChannelOutOfRange(i64),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownColor(name) => write!(f, "unknown color name {name:?}"),
            Error::UnknownColormap(name) => {
                write!(f, "unknown colormap name {name:?}")
            }
            Error::ChannelOutOfRange(v) => {
                write!(f, "channel value {v} out of range 0..=255")
            }
        }
    }
}

impl error::Error for Error {}
