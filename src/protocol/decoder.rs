//! Packet Decoder: header + payload dalam satu pass
//!
//! Pure function dari bytes ke `DecodedPacket`. Tidak ada state,
//! tidak ada I/O, aman dipanggil paralel dari banyak thread.

use tracing::trace;

use super::error::DecodeError;
use super::header::{hop_label, Header, HEADER_SIZE};
use super::payload::{decode_payload, Payload};

/// Konfigurasi decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// Tolak byte sisa setelah body variant
    pub strict_length: bool,
}

/// Hasil decode lengkap satu paket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPacket {
    pub header: Header,
    pub receiver_label: String,
    pub next_node_label: String,
    pub payload: Payload,
    /// Semua byte setelah header, termasuk length prefix dan trailing noise
    pub payload_len: usize,
}

impl DecodedPacket {
    #[inline(always)]
    pub fn payload_type(&self) -> &'static str {
        self.payload.tag()
    }
}

/// Stateless decoder dengan konfigurasi
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Decoder default (trailing bytes ditoleransi)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decode satu paket lengkap
    ///
    /// Error pertama langsung dikembalikan, tidak ada partial result.
    pub fn decode(&self, data: &[u8]) -> Result<DecodedPacket, DecodeError> {
        let header = Header::parse(data)?;
        let payload_bytes = &data[HEADER_SIZE..];
        let payload = decode_payload(header.packet_type, payload_bytes)?;

        if self.config.strict_length && payload.consumed_len() != payload_bytes.len() {
            return Err(DecodeError::TrailingBytes {
                expected: payload.consumed_len(),
                actual: payload_bytes.len(),
            });
        }

        trace!(
            id = header.id,
            payload_type = payload.tag(),
            payload_len = payload_bytes.len(),
            "decoded packet"
        );

        Ok(DecodedPacket {
            receiver_label: hop_label(header.receiver),
            next_node_label: hop_label(header.next_node),
            header,
            payload,
            payload_len: payload_bytes.len(),
        })
    }
}

/// Decode dengan konfigurasi default
#[inline]
pub fn decode_packet(data: &[u8]) -> Result<DecodedPacket, DecodeError> {
    Decoder::new().decode(data)
}
