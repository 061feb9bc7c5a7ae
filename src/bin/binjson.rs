//! `binjson` CLI — convert between JSON text and the binary encoding.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to binary (stdin → stdout)
//! echo '["Item1", 64, true]' | binjson encode > data.bin
//!
//! # Decode binary back to pretty-printed JSON
//! binjson decode -i data.bin
//!
//! # Compare encoded size with the JSON text
//! binjson stats -i data.json
//! ```

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use binjson::{Decoder, Encoder, Value};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "binjson",
    version,
    about = "Compact binary encoding for JSON-like data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum container nesting depth
    #[arg(long, global = true, default_value_t = binjson::codec::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON text to binary
    Encode {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode binary back to JSON text
    Decode {
        /// Input binary file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Reject bytes after the root value
        #[arg(long)]
        strict: bool,
    },
    /// Show encoded size compared to compact JSON text
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let encoder = Encoder::new().max_depth(cli.max_depth);

    match cli.command {
        Commands::Encode { input, output } => {
            let value = parse_json(&read_input(input.as_deref())?)?;
            let bytes = encoder.compress(&value).context("failed to encode")?;
            write_output(output.as_deref(), &bytes)?;
        }
        Commands::Decode {
            input,
            output,
            strict,
        } => {
            let bytes = read_input(input.as_deref())?;
            let value = Decoder::new()
                .max_depth(cli.max_depth)
                .strict(strict)
                .decompress(&bytes)
                .context("failed to decode")?;
            let mut text = serde_json::to_string_pretty(&serde_json::Value::from(value))?;
            text.push('\n');
            write_output(output.as_deref(), text.as_bytes())?;
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let json: serde_json::Value =
                serde_json::from_slice(&text).context("invalid JSON input")?;
            let compact_len = serde_json::to_string(&json)?.len();
            let value = Value::try_from(json).context("unsupported JSON value")?;
            let encoded_len = encoder.compress(&value).context("failed to encode")?.len();

            println!("Encoded length: {encoded_len} bytes");
            println!("JSON length:    {compact_len} bytes");
            if compact_len > 0 {
                let ratio = encoded_len as f64 / compact_len as f64 * 100.0;
                println!("Ratio:          {ratio:.1}%");
            }
        }
    }

    Ok(())
}

fn parse_json(text: &[u8]) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_slice(text).context("invalid JSON input")?;
    Value::try_from(json).context("unsupported JSON value")
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("failed to read {p}")),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data).with_context(|| format!("failed to write {p}")),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
