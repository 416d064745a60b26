//! lorasniff - Decoder untuk paket LoRa mesh dari sniffer TTGO T-Beam
//!
//! Arsitektur:
//! - `protocol`: header parser, payload decoder, packet decoder (core)
//! - `input`: hex string / JSON record → raw bytes
//! - `output`: JSON dan text rendering

pub mod input;
pub mod output;
pub mod protocol;

use crate::input::{InputError, SnifferRecord};
use crate::protocol::{DecodeError, DecodedPacket, Decoder};

/// Error gabungan input + decode
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Tokenize hex string lalu decode dengan config default
pub fn decode_from_hex(hex_str: &str) -> Result<DecodedPacket, Error> {
    let bytes = input::parse_hex_string(hex_str)?;
    Ok(protocol::decode_packet(&bytes)?)
}

/// Decode `payload_hex` dari sniffer record
pub fn decode_record(decoder: &Decoder, record: &SnifferRecord) -> Result<DecodedPacket, Error> {
    let bytes = record.payload_bytes()?;
    Ok(decoder.decode(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_from_hex() {
        let packet = decode_from_hex("79 02 FF 01 01 FF FB 01 00 00 02 06 4E 6F 64 65 20 31").unwrap();
        assert_eq!(packet.header.id, 0x01FB);
        assert_eq!(packet.payload_len, 7);
    }

    #[test]
    fn test_error_sources() {
        assert!(matches!(
            decode_from_hex("79 02 GG"),
            Err(Error::Input(InputError::MalformedToken(_)))
        ));
        assert!(matches!(
            decode_from_hex("79 02 FF"),
            Err(Error::Decode(DecodeError::TooShort(3)))
        ));
    }

    #[test]
    fn test_error_message_is_transparent() {
        let err = decode_from_hex("79 00 FF 01 01 FF FB 01 00 00 02 00").unwrap_err();
        assert_eq!(err.to_string(), "invalid TTL (must be > 0)");
    }

    #[test]
    fn test_decode_record() {
        let record =
            input::parse_json_record(r#"{"payload_hex": "0x79 0x02 0xff 0x01 0x01 0xff 0x01 0x00 0x00 0x00 0x00 0x02 0x68 0x69"}"#)
                .unwrap();
        let packet = decode_record(&Decoder::new(), &record).unwrap();
        assert_eq!(packet.payload_type(), "payload_msg");
    }
}
