//! # escpos-emu CLI
//!
//! Decode an ESC/POS byte stream against the recording device and show what
//! a printer would have been asked to do.
//!
//! ## Usage
//!
//! ```bash
//! # Decode a captured print job
//! escpos-emu decode job.bin
//!
//! # Decode hex from stdin
//! echo "1b 40 48 49 0a 1d 72 01" | escpos-emu decode --hex
//!
//! # Use a custom device identity and 42-column paper
//! escpos-emu decode --profile tm-t88.json --width 42 job.bin
//! ```

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use escpos_emu::{
    DeviceInfo, EmuError, decode,
    device::{DEFAULT_COLUMNS, RecordingPrinter},
};

/// escpos-emu - ESC/POS receipt printer emulator
#[derive(Parser, Debug)]
#[command(name = "escpos-emu")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every dispatched command
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a command stream and print the resulting device calls
    Decode {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Treat input as hex text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// JSON device profile overriding the default identity
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Paper width in character columns
        #[arg(long, default_value_t = DEFAULT_COLUMNS)]
        width: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "escpos_emu=debug"
    } else {
        "escpos_emu=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), EmuError> {
    match command {
        Commands::Decode {
            file,
            hex,
            profile,
            width,
        } => {
            let raw = read_input(file.as_ref())?;
            let data = if hex { parse_hex(&raw)? } else { raw };

            let info = match profile {
                Some(path) => DeviceInfo::from_json_file(path)?,
                None => DeviceInfo::default(),
            };
            tracing::info!(bytes = data.len(), model = %info.model_name, "decoding");

            let mut printer = RecordingPrinter::with_info(info).with_columns(width);
            let reply = decode(&mut printer, &data)?;

            println!("Operations:");
            for op in printer.ops() {
                println!("  {}", op);
            }

            println!("\nPrinted:");
            for line in printer.printed() {
                println!("  |{}", line);
            }

            println!("\nReply ({} bytes):", reply.len());
            if !reply.is_empty() {
                println!("  {}", to_hex(&reply));
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>, EmuError> {
    match file {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Parse whitespace-separated or contiguous hex digits
fn parse_hex(raw: &[u8]) -> Result<Vec<u8>, EmuError> {
    let digits: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    hex::decode(digits).map_err(|e| EmuError::InvalidHex(e.to_string()))
}

/// Lowercase hex, one byte per space-separated pair
fn to_hex(bytes: &[u8]) -> String {
    bytes.chunks(1).map(hex::encode).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex(b"1b 40\n0a").unwrap(), vec![0x1B, 0x40, 0x0A]);
        assert_eq!(parse_hex(b"1D7201").unwrap(), vec![0x1D, 0x72, 0x01]);
        assert!(matches!(parse_hex(b"1b4"), Err(EmuError::InvalidHex(_))));
        assert!(matches!(parse_hex(b"zz"), Err(EmuError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_hex_reports_cause() {
        let Err(EmuError::InvalidHex(reason)) = parse_hex(b"1b 4") else {
            panic!("odd digit count should be rejected");
        };
        assert!(reason.contains("Odd number of digits"), "{reason}");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x5F, 0x00]), "5f 00");
    }
}
