//! # Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! [`DecodeError`] is what the decoder returns when a byte stream is
//! malformed. Values are carried as numbers and only rendered as hex when
//! the error is displayed.

use thiserror::Error;

/// Failure while decoding an ESC/POS byte stream.
///
/// Any of these aborts the current decode call. There is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A command's grammar required another byte but the input ended
    #[error("Unexpected end of stream at offset {position}")]
    EndOfStream { position: usize },

    /// A byte value outside the set a command accepts
    #[error("Invalid {command} argument (0x{value:02x})")]
    InvalidArgument { command: &'static str, value: usize },

    /// No handler exists for an opcode, top-level or nested
    #[error("{}", unsupported_command(.prefix, .opcode))]
    UnsupportedCommand { prefix: Option<u8>, opcode: u8 },

    /// A known command asked for a sub-function that is not implemented
    #[error("{command} function 0x{value:02x} is not implemented or invalid")]
    UnsupportedFunction { command: &'static str, value: usize },

    /// Identity string too long for a B-packet reply
    #[error("Printer ID packet too long ({len} bytes)")]
    PayloadTooLong { len: usize },
}

fn unsupported_command(prefix: &Option<u8>, opcode: &u8) -> String {
    match *prefix {
        Some(crate::protocol::commands::ESC) => format!("Invalid ESC command (0x{opcode:02x})"),
        Some(crate::protocol::commands::GS) => format!("Invalid GS command (0x{opcode:02x})"),
        Some(other) => format!("Invalid command (0x{other:02x} 0x{opcode:02x})"),
        None => format!("Command not implemented (0x{opcode:02x})"),
    }
}

/// Main error type for the command-line front-end and profile loading
#[derive(Debug, Error)]
pub enum EmuError {
    /// Malformed command stream
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Device profile could not be parsed
    #[error("Profile error: {0}")]
    Profile(String),

    /// Input given with `--hex` was not valid hex
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_is_hex() {
        let err = DecodeError::InvalidArgument {
            command: "print color",
            value: 0x7f,
        };
        assert_eq!(err.to_string(), "Invalid print color argument (0x7f)");
    }

    #[test]
    fn test_unsupported_command_messages() {
        let esc = DecodeError::UnsupportedCommand {
            prefix: Some(0x1B),
            opcode: 0xFF,
        };
        assert_eq!(esc.to_string(), "Invalid ESC command (0xff)");

        let top = DecodeError::UnsupportedCommand {
            prefix: None,
            opcode: 0x80,
        };
        assert_eq!(top.to_string(), "Command not implemented (0x80)");
    }

    #[test]
    fn test_decode_error_converts_into_emu_error() {
        let err: EmuError = DecodeError::EndOfStream { position: 3 }.into();
        assert!(matches!(err, EmuError::Decode(_)));
        assert_eq!(
            err.to_string(),
            "Decode error: Unexpected end of stream at offset 3"
        );
    }
}
