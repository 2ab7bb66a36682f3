use serde::Deserialize;

use crate::error::QrngError;

/// Body returned by the ANU QRNG JSON API.
#[derive(Debug, Deserialize)]
pub struct QrngResponse {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub data: Vec<u64>,
    pub success: bool,
}

/// Decode a raw QRNG body into 16-bit values.
pub fn decode_qrng_payload(body: &str) -> Result<Vec<u16>, QrngError> {
    let resp: QrngResponse = serde_json::from_str(body)?;

    if !resp.success {
        return Err(QrngError::Rejected);
    }
    if resp.data.is_empty() {
        return Err(QrngError::Empty);
    }

    resp.data
        .into_iter()
        .map(|v| u16::try_from(v).map_err(|_| QrngError::OutOfRange(v)))
        .collect()
}
