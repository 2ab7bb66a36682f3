use std::path::PathBuf;

use thiserror::Error;

/// Failures while talking to the QRNG service.
/// These never leave the remote source: they switch it to the local fallback.
#[derive(Debug, Error)]
pub enum QrngError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("service reported failure")]
    Rejected,
    #[error("service returned no data")]
    Empty,
    #[error("value {0} does not fit in uint16")]
    OutOfRange(u64),
}

/// Word list loading errors. Always fatal.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("word list is empty: {}", path.display())]
    Empty { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings file problems. Never fatal: callers fall back to defaults.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
