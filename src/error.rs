use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("could not open log file `{}`: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid log level `{0}`")]
    LogLevel(String),
    #[error(transparent)]
    Photo(#[from] PhotoError),
}

/// Why an upload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("empty path")]
    EmptyPath,
    #[error("`{}` is not an image file", .0.display())]
    NotAnImage(PathBuf),
    #[error("could not read dropped paths: {0}")]
    Unparsable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_path() {
        let err = PhotoError::NotAnImage(PathBuf::from("/tmp/notes.txt"));
        assert_eq!(err.to_string(), "`/tmp/notes.txt` is not an image file");
        let app: AppError = err.into();
        assert_eq!(app.to_string(), "`/tmp/notes.txt` is not an image file");
    }

    #[test]
    fn io_errors_convert() {
        let app: AppError = io::Error::other("boom").into();
        assert!(app.to_string().contains("boom"));
    }
}
