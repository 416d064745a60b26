//! Output Layer: rendering hasil decode
//!
//! - `Json`: pretty JSON (default)
//! - `Compact`: JSON satu baris, cocok untuk pipe ke tool lain
//! - `Summary`: satu baris teks untuk dibaca manusia

mod json;
mod summary;

pub use json::{to_json_line, to_json_pretty, RecordOutput};
pub use summary::summary;

use crate::input::SnifferRecord;
use crate::protocol::DecodedPacket;

/// Format output yang didukung CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Compact,
    Summary,
}

/// Render paket, dengan metadata radio kalau ada
pub fn render(
    packet: &DecodedPacket,
    record: Option<&SnifferRecord>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match (format, record) {
        (OutputFormat::Json, Some(r)) => to_json_pretty(&RecordOutput::new(r, packet)),
        (OutputFormat::Json, None) => to_json_pretty(packet),
        (OutputFormat::Compact, Some(r)) => to_json_line(&RecordOutput::new(r, packet)),
        (OutputFormat::Compact, None) => to_json_line(packet),
        (OutputFormat::Summary, Some(r)) => Ok(match r.rssi {
            Some(rssi) => format!("{} rssi={}", summary(packet), rssi),
            None => summary(packet),
        }),
        (OutputFormat::Summary, None) => Ok(summary(packet)),
    }
}
