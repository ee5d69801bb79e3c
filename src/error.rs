use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZooplaError>;

/// Failure of a single API call.
///
/// The service reports problems (bad key, malformed area, rate limit,
/// server fault) purely through the HTTP status line, so `Api` keeps the
/// status code, the reason phrase and the raw body for the caller to
/// inspect. Transport failures pass through untouched.
#[derive(Debug, Error)]
pub enum ZooplaError {
    #[error("zoopla api responded with {status} {reason}: {body}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ZooplaError {
    /// Status code of a non-200 response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ZooplaError::Api { status, .. } => Some(*status),
            ZooplaError::Http(_) => None,
        }
    }
}
