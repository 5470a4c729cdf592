use thiserror::Error;

/// Domain error for fetch operations
///
/// Adapters convert their transport-specific errors into this type so the
/// pipelines never see HTTP client details.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not complete (connection, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status
    #[error("Unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// The server answered but reported an error in the payload
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
