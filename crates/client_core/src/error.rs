use reqwest::StatusCode;
use shared::domain::UserId;
use thiserror::Error;

/// Everything a controller operation can fail with. Network failures are
/// reported, never retried; recovery policy belongs to the caller.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("directory returned status {status}")]
    Status { status: StatusCode },
    #[error("directory response did not match the expected shape: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("no user with id {} in the loaded list", id.0)]
    UnknownRecord { id: UserId },
    #[error("operation is not valid in the current editing mode")]
    WrongMode,
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status { status }
        } else if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}
