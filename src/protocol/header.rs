//! Common Packet Header (11 bytes, fixed)
//!
//! Layout:
//! ┌────────┬──────┬────────────────────────────────────────┐
//! │ Offset │ Size │ Field                                  │
//! ├────────┼──────┼────────────────────────────────────────┤
//! │ 0x00   │ 1B   │ netid                                  │
//! │ 0x01   │ 1B   │ ttl (harus > 0)                        │
//! │ 0x02   │ 1B   │ receiver (0xFF = broadcast)            │
//! │ 0x03   │ 1B   │ sender                                 │
//! │ 0x04   │ 1B   │ last_node                              │
//! │ 0x05   │ 1B   │ next_node (0xFF = broadcast)           │
//! │ 0x06   │ 4B   │ id (u32 little-endian)                 │
//! │ 0x0A   │ 1B   │ type (payload variant)                 │
//! └────────┴──────┴────────────────────────────────────────┘

use super::error::DecodeError;

pub const HEADER_SIZE: usize = 11;

/// Nilai sentinel untuk hop field (receiver / next_node)
pub const BROADCAST: u8 = 0xFF;

/// Header umum setiap paket sniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    pub netid: u8,
    /// Sisa hop, selalu > 0 setelah parse
    pub ttl: u8,
    pub receiver: u8,
    pub sender: u8,
    pub last_node: u8,
    pub next_node: u8,
    /// Packet ID, little-endian di wire
    pub id: u32,
    /// Discriminant payload (lihat `PayloadKind`)
    pub packet_type: u8,
}

impl Header {
    /// Parse dari raw bytes
    ///
    /// Byte setelah offset 11 tidak disentuh.
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        let bytes: &[u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|head| head.try_into().ok())
            .ok_or(DecodeError::TooShort(data.len()))?;

        let header = Self {
            netid: bytes[0],
            ttl: bytes[1],
            receiver: bytes[2],
            sender: bytes[3],
            last_node: bytes[4],
            next_node: bytes[5],
            id: u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]),
            packet_type: bytes[10],
        };

        // u8 domain: hanya nol yang bisa melanggar ttl > 0
        if header.ttl == 0 {
            return Err(DecodeError::InvalidTtl);
        }

        Ok(header)
    }
}

/// Validasi dan ekstrak header dari awal buffer
#[inline]
pub fn parse_header(data: &[u8]) -> Result<Header, DecodeError> {
    Header::parse(data)
}

/// `"broadcast"` untuk 0xFF, selain itu angka desimal
pub fn hop_label(value: u8) -> String {
    if value == BROADCAST {
        "broadcast".to_string()
    } else {
        value.to_string()
    }
}
