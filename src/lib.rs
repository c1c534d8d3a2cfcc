//! # escpos-emu - ESC/POS Printer Emulation
//!
//! Decodes a byte stream written for an ESC/POS thermal receipt printer into
//! operations on an abstract printer device, returning any reply bytes the
//! stream asked for (status and printer ID queries).
//!
//! - **Decoder**: single-pass dispatch of control bytes, `ESC` and `GS`
//!   commands, and literal text runs
//! - **Device contract**: the [`Printer`] trait any backend implements
//! - **Recording device**: an in-memory [`Printer`] that records every call
//!
//! ## Quick Start
//!
//! ```
//! use escpos_emu::{decode, device::RecordingPrinter};
//!
//! let mut printer = RecordingPrinter::new();
//!
//! // ESC @, "HI", LF, GS r 1 (paper status)
//! let reply = decode(&mut printer, b"\x1b@HI\n\x1dr\x01")?;
//!
//! assert_eq!(reply, vec![0x00]);
//! assert_eq!(printer.printed(), &["HI".to_string()]);
//! # Ok::<(), escpos_emu::DecodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`decoder`] | Command dispatch and reply packets |
//! | [`protocol`] | Opcode tables and the byte cursor |
//! | [`printer`] | Device contract, print config, identity, status |
//! | [`device`] | Recording device implementation |
//! | [`error`] | Error types |
//!
//! ## Concurrency
//!
//! Decoding is synchronous. A decode call owns its cursor and borrows its
//! device mutably, so independent streams need independent devices.

pub mod decoder;
pub mod device;
pub mod error;
pub mod printer;
pub mod protocol;

// Re-exports for convenience
pub use decoder::decode;
pub use error::{DecodeError, EmuError};
pub use printer::{DeviceInfo, PrintConfig, Printer};
