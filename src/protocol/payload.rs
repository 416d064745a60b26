//! Payload variants
//!
//! Dispatch berdasarkan byte `type` di header:
//! - 0 → Message  `[size:1][text:size]`
//! - 1 → Ack      `[packet_id:4 LE]`
//! - 2 → Announce `[size:1][name:size]`
//!
//! Byte setelah body variant diabaikan (padding / noise dari radio).

use super::error::DecodeError;
use super::reader::ByteReader;

/// Tipe payload yang dikenal
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// Text message antar node
    Message = 0,
    /// Acknowledgment untuk packet id tertentu
    Ack = 1,
    /// Node announcement (nama node)
    Announce = 2,
}

impl PayloadKind {
    #[inline(always)]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Message),
            1 => Some(Self::Ack),
            2 => Some(Self::Announce),
            _ => None,
        }
    }

    /// Tag literal untuk output
    pub fn tag(self) -> &'static str {
        match self {
            Self::Message => "payload_msg",
            Self::Ack => "payload_ack",
            Self::Announce => "payload_ann",
        }
    }
}

/// Size of the fixed ack body
pub const ACK_BODY_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePayload {
    pub message_size: u8,
    pub message_raw: Vec<u8>,
    /// Lossy UTF-8, sequence invalid diganti U+FFFD
    pub message_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckPayload {
    pub packet_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncePayload {
    pub name_size: u8,
    pub name_raw: Vec<u8>,
    pub name_text: String,
}

/// Payload yang sudah di-decode, satu struct per variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Message(MessagePayload),
    Ack(AckPayload),
    Announce(AnnouncePayload),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Message(_) => PayloadKind::Message,
            Self::Ack(_) => PayloadKind::Ack,
            Self::Announce(_) => PayloadKind::Announce,
        }
    }

    /// `payload_msg` / `payload_ack` / `payload_ann`
    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// Byte yang benar-benar dipakai variant, termasuk length prefix
    pub fn consumed_len(&self) -> usize {
        match self {
            Self::Message(msg) => 1 + msg.message_raw.len(),
            Self::Ack(_) => ACK_BODY_SIZE,
            Self::Announce(ann) => 1 + ann.name_raw.len(),
        }
    }
}

/// Decode payload sesuai tipe di header
///
/// `data` adalah semua byte setelah header.
pub fn decode_payload(payload_type: u8, data: &[u8]) -> Result<Payload, DecodeError> {
    let kind = PayloadKind::from_u8(payload_type).ok_or(DecodeError::UnknownType(payload_type))?;
    let mut reader = ByteReader::new(data);

    let payload = match kind {
        PayloadKind::Message => {
            let (message_size, body) = read_prefixed(&mut reader, payload_type, "message_size")?;
            Payload::Message(MessagePayload {
                message_size,
                message_raw: body.to_vec(),
                message_text: String::from_utf8_lossy(body).into_owned(),
            })
        }
        PayloadKind::Ack => {
            let packet_id = reader
                .read_u32_le()
                .ok_or(DecodeError::PayloadTooShort {
                    field: "packet_id",
                    declared: ACK_BODY_SIZE,
                    available: data.len(),
                })?;
            Payload::Ack(AckPayload { packet_id })
        }
        PayloadKind::Announce => {
            let (name_size, body) = read_prefixed(&mut reader, payload_type, "name_size")?;
            Payload::Announce(AnnouncePayload {
                name_size,
                name_raw: body.to_vec(),
                name_text: String::from_utf8_lossy(body).into_owned(),
            })
        }
    };

    Ok(payload)
}

/// `[len:1][body:len]`, returns (len, body)
fn read_prefixed<'a>(
    reader: &mut ByteReader<'a>,
    payload_type: u8,
    field: &'static str,
) -> Result<(u8, &'a [u8]), DecodeError> {
    let size = reader
        .read_u8()
        .ok_or(DecodeError::MissingLengthByte(payload_type))?;

    let available = reader.remaining();
    let body = reader
        .read_slice(size as usize)
        .ok_or(DecodeError::PayloadTooShort {
            field,
            declared: size as usize,
            available,
        })?;

    Ok((size, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_exact_length() {
        let body = b"Hello mesh";
        let mut data = vec![body.len() as u8];
        data.extend_from_slice(body);

        match decode_payload(0, &data).unwrap() {
            Payload::Message(msg) => {
                assert_eq!(msg.message_size, 10);
                assert_eq!(msg.message_raw, body);
                assert_eq!(msg.message_text, "Hello mesh");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_message_raw_is_bit_exact() {
        let body: Vec<u8> = (0..=255u8).step_by(3).collect();
        let mut data = vec![body.len() as u8];
        data.extend_from_slice(&body);

        let Payload::Message(msg) = decode_payload(0, &data).unwrap() else {
            panic!("expected message");
        };
        assert_eq!(msg.message_raw, body);
    }

    #[test]
    fn test_missing_length_byte() {
        assert_eq!(decode_payload(0, &[]), Err(DecodeError::MissingLengthByte(0)));
        assert_eq!(decode_payload(2, &[]), Err(DecodeError::MissingLengthByte(2)));
    }

    #[test]
    fn test_declared_length_boundary() {
        // 3 byte dideklarasikan, 2 tersedia
        let err = decode_payload(2, &[3, b'a', b'b']).unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadTooShort {
                field: "name_size",
                declared: 3,
                available: 2,
            }
        );

        // Sama persis harus sukses
        let payload = decode_payload(2, &[3, b'a', b'b', b'c']).unwrap();
        assert_eq!(payload.consumed_len(), 4);
    }

    #[test]
    fn test_zero_length_body() {
        let Payload::Announce(ann) = decode_payload(2, &[0]).unwrap() else {
            panic!("expected announce");
        };
        assert_eq!(ann.name_size, 0);
        assert!(ann.name_raw.is_empty());
        assert_eq!(ann.name_text, "");
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let Payload::Announce(ann) = decode_payload(2, &[2, b'N', b'1', 0x00, 0xFF]).unwrap()
        else {
            panic!("expected announce");
        };
        assert_eq!(ann.name_raw, b"N1");
        assert_eq!(ann.name_text, "N1");
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let Payload::Message(msg) = decode_payload(0, &[3, b'o', 0xFF, b'k']).unwrap() else {
            panic!("expected message");
        };
        assert_eq!(msg.message_text, "o\u{FFFD}k");
        assert_eq!(msg.message_raw, vec![b'o', 0xFF, b'k']);
    }

    #[test]
    fn test_ack() {
        let payload = decode_payload(1, &[0xFB, 0x01, 0x00, 0x00, 0x99]).unwrap();
        assert_eq!(payload, Payload::Ack(AckPayload { packet_id: 0x01FB }));
        assert_eq!(payload.tag(), "payload_ack");
        assert_eq!(payload.consumed_len(), 4);
    }

    #[test]
    fn test_ack_too_short() {
        for len in 0..ACK_BODY_SIZE {
            let data = vec![0x01u8; len];
            assert_eq!(
                decode_payload(1, &data),
                Err(DecodeError::PayloadTooShort {
                    field: "packet_id",
                    declared: 4,
                    available: len,
                })
            );
        }
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(decode_payload(99, &[1, 2, 3]), Err(DecodeError::UnknownType(99)));
        assert_eq!(decode_payload(3, &[]), Err(DecodeError::UnknownType(3)));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(PayloadKind::from_u8(0).map(PayloadKind::tag), Some("payload_msg"));
        assert_eq!(PayloadKind::from_u8(1).map(PayloadKind::tag), Some("payload_ack"));
        assert_eq!(PayloadKind::from_u8(2).map(PayloadKind::tag), Some("payload_ann"));
        assert_eq!(PayloadKind::from_u8(255), None);
    }
}
