//! Hex tokenizer untuk output serial sniffer
//!
//! Format yang diterima: token hex dipisah spasi dan/atau koma,
//! prefix `0x` opsional per token. Contoh: `"79 02 FF"`, `"0x79,0x02,0xff"`.

use super::error::InputError;

/// Parse string hex jadi bytes
///
/// Setiap `0x` diperlakukan sebagai separator, jadi `"0x790x02"` valid.
pub fn parse_hex_string(hex_str: &str) -> Result<Vec<u8>, InputError> {
    let normalized = hex_str.replace("0x", " ").replace("0X", " ").replace(',', " ");

    normalized
        .split_whitespace()
        .map(|token| {
            u8::from_str_radix(token, 16).map_err(|_| InputError::MalformedToken(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated() {
        assert_eq!(
            parse_hex_string("79 02 FF 01").unwrap(),
            vec![0x79, 0x02, 0xFF, 0x01]
        );
    }

    #[test]
    fn test_prefixes_and_commas() {
        assert_eq!(
            parse_hex_string("0x79,0x02, 0xff ,\t0X0a\n1").unwrap(),
            vec![0x79, 0x02, 0xFF, 0x0A, 0x01]
        );
    }

    #[test]
    fn test_adjacent_prefixes_split() {
        assert_eq!(parse_hex_string("0x790x02").unwrap(), vec![0x79, 0x02]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_hex_string("").unwrap().is_empty());
        assert!(parse_hex_string(" , ,0x ").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_token() {
        let err = parse_hex_string("79 ZZ 01").unwrap_err();
        assert!(matches!(err, InputError::MalformedToken(ref t) if t == "ZZ"));
    }

    #[test]
    fn test_token_out_of_byte_range() {
        let err = parse_hex_string("79 1FF").unwrap_err();
        assert!(matches!(err, InputError::MalformedToken(ref t) if t == "1FF"));
    }
}
