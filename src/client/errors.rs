use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Invalid service URL: {0}")]
    ServiceUrl(#[from] url::ParseError),
    #[error("Failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("`{0}` has no file name")]
    NoFileName(PathBuf),
}
