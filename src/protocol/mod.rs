//! Protocol Layer: LoRa sniffer packet format
//!
//! Prinsip desain:
//! - Fixed header: 11 byte, offset tetap
//! - Little-endian untuk semua field multi-byte
//! - Strict bounds checking: error, bukan panic
//! - Pure decode: tidak ada state antar panggilan

mod decoder;
mod error;
mod header;
mod payload;
mod reader;

pub use decoder::{decode_packet, DecodedPacket, Decoder, DecoderConfig};
pub use error::DecodeError;
pub use header::{hop_label, parse_header, Header, BROADCAST, HEADER_SIZE};
pub use payload::{
    decode_payload, AckPayload, AnnouncePayload, MessagePayload, Payload, PayloadKind,
    ACK_BODY_SIZE,
};
