//! Sniffer JSON record
//!
//! Firmware sniffer bisa mengirim satu JSON object per paket:
//!
//! ```text
//! {"channel": 868.1, "rssi": -97, "snr": 7.5, "payload_hex": "79 02 FF ..."}
//! ```
//!
//! Hanya `payload_hex` yang wajib; metadata radio ikut ke output apa adanya.

use serde::Deserialize;

use super::error::InputError;
use super::tokenizer::parse_hex_string;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnifferRecord {
    /// Frekuensi channel dalam MHz
    #[serde(default)]
    pub channel: Option<f64>,
    #[serde(default)]
    pub rssi: Option<i32>,
    #[serde(default)]
    pub snr: Option<f32>,
    pub payload_hex: String,
}

impl SnifferRecord {
    /// Tokenize `payload_hex`
    pub fn payload_bytes(&self) -> Result<Vec<u8>, InputError> {
        parse_hex_string(&self.payload_hex)
    }
}

/// Parse satu JSON record
pub fn parse_json_record(json: &str) -> Result<SnifferRecord, InputError> {
    Ok(serde_json::from_str(json)?)
}
