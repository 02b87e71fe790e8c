use std::io;
use std::path::PathBuf;

/// An error that occurred while reading a corpus or writing a report
#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    /// The character source could not be opened
    #[error("Cannot open '{}': {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to write output: {0}")]
    Output(#[from] io::Error),
    #[error("Unable to serialize output to json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, AnagramError>;

impl AnagramError {
    /// Only a source that can not be opened ends the run as a failure,
    /// output that can not be written (e.g. a closed pipe) does not.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnagramError::Open { .. })
    }
}

/// The process exit status for the outcome of a run
pub fn exit_status<T>(result: &Result<T>) -> i32 {
    match result {
        Err(e) if e.is_fatal() => 1,
        _ => 0,
    }
}
