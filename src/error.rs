use std::fmt;
use std::io;
use std::path::PathBuf;

///
/// Problems that can arise while extracting payloads from a trace stream.
///
/// Malformed or non-matching trace lines are not errors; they are skipped.
/// Everything here is an I/O failure, carrying enough context to name the
/// failing operation and file.
///
#[derive(Debug)]
pub enum Error {
    /// Reading the next line of the input stream failed
    ReadInput(io::Error),
    /// Creating an output file failed
    OpenOutput(PathBuf, io::Error),
    /// Writing to (or flushing) an output file failed
    WriteOutput(PathBuf, io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadInput(err) => Some(err),
            Error::OpenOutput(_, err) => Some(err),
            Error::WriteOutput(_, err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ReadInput(err) => write!(f, "could not read input line: {}", err),
            Error::OpenOutput(path, err) => {
                write!(f, "could not open {}: {}", path.display(), err)
            }
            Error::WriteOutput(path, err) => {
                write!(f, "could not write to {}: {}", path.display(), err)
            }
        }
    }
}
