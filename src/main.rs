//! lorasniff - LoRa sniffer packet decoder CLI
//!
//! # Usage
//!
//! ```text
//! lorasniff --hex "79 02 FF 01 01 FF FB 01 00 00 02 06 4E 6F 64 65 20 31"
//! lorasniff --json '{"channel": 868.1, "payload_hex": "79 02 FF ..."}'
//! cat capture.log | lorasniff --stdin --format summary
//! ```
//!
//! Decode error dilaporkan sebagai `Decode error: <pesan>`, bukan panic.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::{debug, info, warn};

use lorasniff::input::{self, InputLine, SnifferRecord};
use lorasniff::output::{self, OutputFormat};
use lorasniff::protocol::{Decoder, DecoderConfig};

#[derive(Parser)]
#[command(name = "lorasniff")]
#[command(author, version, about = "Decode TTGO LoRa sniffer packets", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["hex", "json", "stdin"])))]
struct Cli {
    /// Space-separated hex payload (payload_hex)
    #[arg(long)]
    hex: Option<String>,

    /// Sniffer JSON record with a payload_hex field
    #[arg(long)]
    json: Option<String>,

    /// Read one record per line from stdin (hex or JSON)
    #[arg(long)]
    stdin: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Reject trailing bytes after the payload body
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Runtime config hasil parse CLI
struct CliConfig {
    decoder: DecoderConfig,
    format: OutputFormat,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            decoder: DecoderConfig {
                strict_length: cli.strict,
            },
            format: cli.format,
        }
    }
}

/// Statistik mode stream
#[derive(Default)]
struct StreamStats {
    lines: u64,
    decoded: u64,
    failed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging ke stderr, stdout khusus hasil decode
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::from(&cli);
    let decoder = Decoder::with_config(config.decoder);
    debug!(strict = config.decoder.strict_length, format = ?config.format, "decoder ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(hex) = &cli.hex {
        let line = input::parse_hex_string(hex).map(InputLine::Hex);
        report(&mut out, decode_line(&decoder, line, config.format))?;
    } else if let Some(json) = &cli.json {
        let line = input::parse_json_record(json).map(InputLine::Record);
        report(&mut out, decode_line(&decoder, line, config.format))?;
    } else {
        run_stream(&decoder, config.format, io::stdin().lock(), &mut out)?;
    }

    Ok(())
}

/// Decode satu input, hasilnya teks output atau pesan error
fn decode_line(
    decoder: &Decoder,
    line: Result<InputLine, input::InputError>,
    format: OutputFormat,
) -> Result<String, String> {
    let line = line.map_err(|e| e.to_string())?;

    let (bytes, record): (Vec<u8>, Option<SnifferRecord>) = match line {
        InputLine::Hex(bytes) => (bytes, None),
        InputLine::Record(record) => {
            let bytes = record.payload_bytes().map_err(|e| e.to_string())?;
            (bytes, Some(record))
        }
    };

    let packet = decoder.decode(&bytes).map_err(|e| e.to_string())?;
    output::render(&packet, record.as_ref(), format).map_err(|e| e.to_string())
}

fn report(out: &mut impl Write, result: Result<String, String>) -> Result<bool> {
    match result {
        Ok(text) => {
            writeln!(out, "{}", text).context("failed to write output")?;
            Ok(true)
        }
        Err(msg) => {
            writeln!(out, "Decode error: {}", msg).context("failed to write output")?;
            Ok(false)
        }
    }
}

/// Satu record per baris, error per baris tidak menghentikan stream
fn run_stream(
    decoder: &Decoder,
    format: OutputFormat,
    mut reader: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();
    let mut idx = 0usize;

    loop {
        buf.clear();
        // Byte mentah: capture serial bisa berisi noise non-UTF-8
        let n = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read stdin")?;
        if n == 0 {
            break;
        }
        idx += 1;

        let line = String::from_utf8_lossy(&buf);
        let parsed = match input::parse_line(&line) {
            Ok(Some(parsed)) => Ok(parsed),
            Ok(None) => continue,
            Err(e) => Err(e),
        };

        stats.lines += 1;
        let result = decode_line(decoder, parsed, format);
        if let Err(msg) = &result {
            warn!(line = idx, "{}", msg);
        }
        if report(out, result)? {
            stats.decoded += 1;
        } else {
            stats.failed += 1;
        }
    }

    out.flush().context("failed to flush output")?;
    info!(
        lines = stats.lines,
        decoded = stats.decoded,
        failed = stats.failed,
        "stream finished"
    );
    Ok(())
}
