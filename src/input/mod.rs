//! Input Layer: teks dari sniffer → raw bytes
//!
//! Dua bentuk input:
//! - Hex string (`"79 02 FF ..."`)
//! - JSON record dengan field `payload_hex`

mod error;
mod record;
mod tokenizer;

pub use error::InputError;
pub use record::{parse_json_record, SnifferRecord};
pub use tokenizer::parse_hex_string;

/// Satu baris input yang sudah dikenali bentuknya
#[derive(Debug, Clone, PartialEq)]
pub enum InputLine {
    Hex(Vec<u8>),
    Record(SnifferRecord),
}

/// Klasifikasi satu baris dari stream sniffer
///
/// Baris kosong dan komentar `#` menghasilkan `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<InputLine>, InputError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if line.starts_with('{') {
        parse_json_record(line).map(|r| Some(InputLine::Record(r)))
    } else {
        parse_hex_string(line).map(|b| Some(InputLine::Hex(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_blank_and_comments() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   \t").unwrap().is_none());
        assert!(parse_line("# captured 2024-05-01").unwrap().is_none());
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(
            parse_line(" 01 02 ").unwrap(),
            Some(InputLine::Hex(vec![1, 2]))
        );

        match parse_line(r#"{"payload_hex": "ff"}"#).unwrap() {
            Some(InputLine::Record(r)) => assert_eq!(r.payload_hex, "ff"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
