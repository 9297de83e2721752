use std::sync::Arc;

/// Why a single upstream call failed.
///
/// The variants are kept apart so that logs can tell a dead upstream from a
/// schema drift, even though the graph layer reports all of them as a failed
/// fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid upstream url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("unexpected status code for url {url}: {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("request to {url} was cancelled")]
    Cancelled { url: String },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, error: impl ToString) -> Self {
        FetchError::Transport {
            url: url.into(),
            message: error.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Cancelled { url } => url,
        }
    }

    /// The upstream answered 404, which accessors treat as an absent entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

/// Error codes attached to GraphQL errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UpstreamUnavailable,
    UpstreamStatus,
    UpstreamInvalidResponse,
    Cancelled,
    BadRequest,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Fetch errors are shared between every caller waiting on the same key.
    #[error(transparent)]
    Fetch(Arc<FetchError>),
    #[error("invalid cursor: {0}")]
    Cursor(String),
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Fetch(error) => match error.as_ref() {
                FetchError::InvalidUrl { .. } => ErrorCode::BadRequest,
                FetchError::Transport { .. } | FetchError::Timeout { .. } => ErrorCode::UpstreamUnavailable,
                FetchError::Status { .. } => ErrorCode::UpstreamStatus,
                FetchError::Decode { .. } => ErrorCode::UpstreamInvalidResponse,
                FetchError::Cancelled { .. } => ErrorCode::Cancelled,
            },
            Error::Cursor(_) | Error::InvalidArgument(_) => ErrorCode::BadRequest,
        }
    }

    pub fn as_fetch_error(&self) -> Option<&FetchError> {
        match self {
            Error::Fetch(error) => Some(error),
            _ => None,
        }
    }
}

impl From<FetchError> for Error {
    fn from(error: FetchError) -> Self {
        Error::Fetch(Arc::new(error))
    }
}

impl From<Arc<FetchError>> for Error {
    fn from(error: Arc<FetchError>) -> Self {
        Error::Fetch(error)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
