//! Error types for the gateway crate

use thiserror::Error;
use watchlist_ports::FetchError;

/// REST adapter errors
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("API error: {code} - {msg}")]
    Api { code: i64, msg: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convert infrastructure RestError to domain FetchError
impl From<RestError> for FetchError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) if e.is_decode() => FetchError::Parse(e.to_string()),
            RestError::Http(e) => FetchError::Network(e.to_string()),
            RestError::Status { endpoint, status } => {
                FetchError::UnexpectedStatus { endpoint, status }
            }
            RestError::Api { code, msg } => FetchError::Api { code, message: msg },
            RestError::Parse(msg) => FetchError::Parse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_unexpected_status() {
        let err = RestError::Status {
            endpoint: "/v1/cryptocurrency/categories".to_string(),
            status: 429,
        };
        assert_eq!(
            FetchError::from(err),
            FetchError::UnexpectedStatus {
                endpoint: "/v1/cryptocurrency/categories".to_string(),
                status: 429,
            }
        );
    }

    #[test]
    fn test_api_error_keeps_code_and_message() {
        let err = RestError::Api {
            code: 1002,
            msg: "API key missing.".to_string(),
        };
        assert_eq!(
            FetchError::from(err),
            FetchError::Api {
                code: 1002,
                message: "API key missing.".to_string(),
            }
        );
    }
}
