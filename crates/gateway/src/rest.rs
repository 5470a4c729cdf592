//! Minimal JSON-over-HTTP client shared by the exchange adapters

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// GET-only REST client with fixed headers
/// Infrastructure component - handles HTTP communication
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    headers: Vec<(&'static str, String)>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        RestClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: Vec::new(),
        }
    }

    /// Builder: send `name: value` with every request
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with query parameters and decode the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RestError> {
        let mut request = self.client.get(self.url(path)).query(query);
        for (name, value) in &self.headers {
            request = request.header(*name, value);
        }

        log::debug!("GET {}{} {:?}", self.base_url, path, query);
        let resp = request.send().await?;

        self.handle_response(path, resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        resp: reqwest::Response,
    ) -> Result<T, RestError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            log::debug!("HTTP {} from {}: {}", status, path, text);
            return Err(RestError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&text).map_err(|e| RestError::Parse(format!("{}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = RestClient::new("https://api.binance.com/");
        assert_eq!(client.base_url(), "https://api.binance.com");
        assert_eq!(
            client.url("/api/v3/exchangeInfo"),
            "https://api.binance.com/api/v3/exchangeInfo"
        );
    }
}
