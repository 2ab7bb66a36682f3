use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::QrngError;
use crate::model::qrng_payload::decode_qrng_payload;

pub const DEFAULT_ENDPOINT: &str = "https://qrng.anu.edu.au/API/jsonI.php";

/// The ANU service caps a single request at this many values.
pub const MAX_BATCH: usize = 1024;

pub struct QrngClient {
    client: Client,
    endpoint: String,
}

impl QrngClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, QrngError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn batch_url(&self, length: usize) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}length={}&type=uint16", self.endpoint, sep, length)
    }

    /// Fetch `length` uint16 values (clamped to `1..=MAX_BATCH`).
    pub fn fetch_u16(&self, length: usize) -> Result<Vec<u16>, QrngError> {
        let length = length.clamp(1, MAX_BATCH);
        let url = self.batch_url(length);
        debug!(%url, "requesting QRNG batch");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(QrngError::Status(status.as_u16()));
        }

        let body = resp.text()?;
        let values = decode_qrng_payload(&body)?;
        debug!(received = values.len(), "QRNG batch decoded");
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_url_appends_query() {
        let client = QrngClient::new(DEFAULT_ENDPOINT, Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.batch_url(16),
            "https://qrng.anu.edu.au/API/jsonI.php?length=16&type=uint16"
        );
    }

    #[test]
    fn batch_url_extends_existing_query() {
        let client = QrngClient::new("http://localhost/qrng?key=abc", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.batch_url(2),
            "http://localhost/qrng?key=abc&length=2&type=uint16"
        );
    }

    #[test]
    fn unreachable_endpoint_is_an_http_error() {
        let client = QrngClient::new("http://127.0.0.1:1/qrng", Duration::from_secs(2)).unwrap();
        assert!(matches!(client.fetch_u16(4), Err(QrngError::Http(_)) | Err(QrngError::Status(_))));
    }
}
