use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the streaming digest API.
#[derive(Debug)]
pub enum Error {
    /// An offset/length pair does not fit inside the source buffer.
    Range {
        offset: usize,
        len: usize,
        size: usize,
    },
    /// The state already produced a digest and has not been reset since.
    Finished,
    /// A pull-style source failed while being drained.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Range { offset, len, size } => write!(
                f,
                "range {}..{} is out of bounds for a buffer of {} bytes",
                offset,
                offset.wrapping_add(*len),
                size
            ),
            Error::Finished => {
                write!(f, "digest already finalized; reset before further use")
            }
            Error::Io(err) => write!(f, "read from source failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
