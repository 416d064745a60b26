//! Walkthrough - decode beberapa paket sniffer contoh
//!
//! Usage:
//!   cargo run --example walkthrough

use lorasniff::input::parse_hex_string;
use lorasniff::output::{render, OutputFormat};
use lorasniff::protocol::{Decoder, DecoderConfig};

const CAPTURE: &[(&str, &str)] = &[
    ("announce", "79 02 FF 01 01 FF FB 01 00 00 02 06 4E 6F 64 65 20 31"),
    ("message", "79 03 04 01 01 04 10 00 00 00 00 05 68 65 6C 6C 6F"),
    ("ack", "0x79,0x03,0x01,0x04,0x04,0x01,0x11,0x00,0x00,0x00,0x01,0x10,0x00,0x00,0x00"),
    ("padded", "79 02 FF 01 01 FF 12 00 00 00 02 02 4E 32 00 00"),
    ("zero ttl", "79 00 FF 01 01 FF 13 00 00 00 02 00"),
    ("unknown type", "79 02 FF 01 01 FF 14 00 00 00 63"),
];

fn main() {
    println!("📡 LoRa Sniffer Decoder - Walkthrough");
    println!("=====================================\n");

    let tolerant = Decoder::new();
    let strict = Decoder::with_config(DecoderConfig {
        strict_length: true,
    });

    for (name, hex) in CAPTURE {
        println!("▶ {} : {}", name, hex);

        let bytes = match parse_hex_string(hex) {
            Ok(bytes) => bytes,
            Err(e) => {
                println!("  Decode error: {}\n", e);
                continue;
            }
        };

        match tolerant.decode(&bytes) {
            Ok(packet) => match render(&packet, None, OutputFormat::Summary) {
                Ok(text) => println!("  {}", text),
                Err(e) => println!("  render error: {}", e),
            },
            Err(e) => println!("  Decode error: {}", e),
        }

        if let Err(e) = strict.decode(&bytes) {
            println!("  strict: {}", e);
        }
        println!();
    }

    println!("✅ Done");
}
