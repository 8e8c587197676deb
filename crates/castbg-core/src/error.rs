//! Error taxonomy for the fetch → persist → download pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to a remote server (page fetch or image download).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, TLS, write callback abort, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// Page body was not valid UTF-8.
    #[error("response body is not UTF-8: {0}")]
    InvalidBody(#[from] std::str::Utf8Error),
}

/// The home page did not contain the markup the extractor expects.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON.parse('...') initializer found in any <script>")]
    MarkupMissing,
    #[error("background payload: {0}")]
    Payload(String),
}

/// Top-level error for library operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: invalid backgrounds JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Entries could not be rendered as JSON for output other than a file.
    #[error("serializing backgrounds: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Raised after the download barrier when at least one entry failed.
    #[error("{failed} of {total} downloads failed")]
    Download { failed: usize, total: usize },
    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_error_names_no_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let msg = Error::Serialize(source).to_string();
        assert!(msg.starts_with("serializing backgrounds: "), "{msg}");
        assert!(!msg.contains("<stdout>"));
    }

    #[test]
    fn io_error_names_path() {
        let e = Error::io("/tmp/bg.json", std::io::ErrorKind::NotFound.into());
        assert!(e.to_string().starts_with("/tmp/bg.json: "));
    }
}
