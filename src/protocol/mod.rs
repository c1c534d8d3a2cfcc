//! # ESC/POS Protocol Primitives
//!
//! Low-level building blocks shared by the decoder.
//!
//! ## Module Structure
//!
//! - [`commands`]: Opcode constants and command tables (top-level, ESC, GS)
//! - [`cursor`]: Forward-only byte reader with lookahead
//!
//! ## Protocol Reference
//!
//! Opcode values follow the Epson "ESC/POS Command Reference".

pub mod commands;
pub mod cursor;

pub use cursor::ByteCursor;
