//! Error types untuk input layer

/// Error dari input layer (sebelum decode)
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Token bukan angka hex 0x00..=0xFF
    #[error("malformed hex token: {0:?}")]
    MalformedToken(String),

    #[error("invalid sniffer record: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
