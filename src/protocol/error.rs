//! Error types untuk decode pipeline
//!
//! Semua error bersifat terminal untuk satu panggilan decode,
//! tapi recoverable untuk caller (tidak pernah panic).

use super::header::HEADER_SIZE;

/// Kegagalan decode paket. Selalu constraint pertama yang dilanggar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Kurang dari 11 byte untuk header.
    #[error("packet too short for header: need {HEADER_SIZE} bytes, got {0}")]
    TooShort(usize),

    #[error("invalid TTL (must be > 0)")]
    InvalidTtl,

    /// Variant length-prefixed tanpa byte payload sama sekali.
    #[error("missing length byte for payload type {0}")]
    MissingLengthByte(u8),

    /// Panjang yang dideklarasikan melebihi byte yang tersedia.
    #[error("payload shorter than {field}: declared {declared} bytes, {available} available")]
    PayloadTooShort {
        field: &'static str,
        declared: usize,
        available: usize,
    },

    #[error("unknown payload type: {0}")]
    UnknownType(u8),

    /// Strict-length mode: ada byte sisa setelah body variant.
    #[error("trailing bytes after payload: expected {expected} bytes, got {actual}")]
    TrailingBytes { expected: usize, actual: usize },
}
