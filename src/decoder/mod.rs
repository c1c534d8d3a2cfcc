//! # ESC/POS Decoder
//!
//! Turns a raw byte stream into calls on a [`Printer`], collecting any reply
//! bytes produced by query commands.
//!
//! ## Dispatch
//!
//! ```text
//! byte ──► top-level control? ──► handler (ESC / GS / LF / CAN / no-op)
//!      └─► <= 0x7F?           ──► literal text run ──► Printer::text
//!      └─► otherwise          ──► UnsupportedCommand
//! ```
//!
//! Opcodes and ASCII text share the same byte space, so text is recognized by
//! exclusion. Contiguous printable bytes that are not opcodes are batched
//! into a single [`Printer::text`] call.
//!
//! ## Example
//!
//! ```
//! use escpos_emu::{decode, device::{Op, RecordingPrinter}};
//!
//! let mut printer = RecordingPrinter::new();
//! let reply = decode(&mut printer, b"HI\n\x1dI\x41")?;
//!
//! assert_eq!(reply, b"\x5f0.0.1\x00");
//! assert_eq!(printer.ops()[0], Op::Text("HI".into()));
//! # Ok::<(), escpos_emu::DecodeError>(())
//! ```

mod esc;
mod gs;
mod printer_id;

pub use printer_id::{MAX_B_PACKET_PAYLOAD, a_packet, b_packet};

use crate::error::DecodeError;
use crate::printer::Printer;
use crate::protocol::ByteCursor;
use crate::protocol::commands::{Command, TEXT_MAX};

/// Decode `data` against `printer` and return the accumulated reply bytes.
///
/// Runs a single pass over the whole buffer. The first malformed sequence
/// aborts the call; device calls made before that point are not undone.
///
/// # Errors
///
/// Any [`DecodeError`] raised by a command handler, or
/// [`DecodeError::UnsupportedCommand`] for a byte above `0x7F` that is not a
/// known opcode.
pub fn decode<P: Printer + ?Sized>(printer: &mut P, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut cursor = ByteCursor::new(data);
    let result = run(printer, &mut cursor);

    if let Err(err) = &result {
        tracing::warn!(position = cursor.offset(), error = %err, "decode aborted");
    }
    result
}

fn run<P: Printer + ?Sized>(
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
) -> Result<Vec<u8>, DecodeError> {
    let mut output = Vec::new();

    while let Some(byte) = cursor.next() {
        match Command::from_byte(byte) {
            Some(command) => {
                tracing::debug!(?command, position = cursor.offset() - 1, "control");
                output.extend(dispatch(command, printer, cursor)?);
            }
            None if byte <= TEXT_MAX => text_run(printer, cursor, byte)?,
            None => {
                return Err(DecodeError::UnsupportedCommand {
                    prefix: None,
                    opcode: byte,
                });
            }
        }
    }

    Ok(output)
}

fn dispatch<P: Printer + ?Sized>(
    command: Command,
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
) -> Result<Vec<u8>, DecodeError> {
    match command {
        Command::Esc => esc::handle(printer, cursor).map(|()| Vec::new()),
        Command::Gs => gs::handle(printer, cursor),
        Command::LineFeed => {
            printer.print();
            printer.feed(1);
            Ok(Vec::new())
        }
        Command::Cancel => {
            printer.cancel();
            Ok(Vec::new())
        }
        Command::Fs
        | Command::Us
        | Command::Dle
        | Command::FormFeed
        | Command::ShiftOut
        | Command::CarriageReturn
        | Command::HorizontalTab => Ok(Vec::new()),
    }
}

/// Consume the maximal run of text bytes starting with `first` and hand it
/// to the printer in one call.
fn text_run<P: Printer + ?Sized>(
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
    first: u8,
) -> Result<(), DecodeError> {
    let mut len = 0;
    while let Some(next) = cursor.peek_at(len) {
        if next > TEXT_MAX || Command::is_command(next) {
            break;
        }
        len += 1;
    }

    let mut run = Vec::with_capacity(len + 1);
    run.push(first);
    if len > 0 {
        run.extend_from_slice(cursor.take_n(len)?);
    }

    tracing::trace!(len = run.len(), "text run");
    printer.text(&String::from_utf8_lossy(&run));
    Ok(())
}

/// Decode a dual-encoded argument: `n` and `b'0' + n` mean the same thing.
///
/// Returns the numeric form, or `None` when `byte` is neither encoding of a
/// value below `count`.
pub(crate) fn dual_encoded(byte: u8, count: u8) -> Option<u8> {
    match byte {
        n if n < count => Some(n),
        n if (b'0'..b'0' + count).contains(&n) => Some(n - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Op, RecordingPrinter};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dual_encoded() {
        assert_eq!(dual_encoded(0x00, 2), Some(0));
        assert_eq!(dual_encoded(0x31, 2), Some(1));
        assert_eq!(dual_encoded(0x32, 3), Some(2));
        assert_eq!(dual_encoded(0x02, 2), None);
        assert_eq!(dual_encoded(0x32, 2), None);
    }

    #[test]
    fn test_empty_input() {
        let mut printer = RecordingPrinter::new();
        assert_eq!(decode(&mut printer, &[]), Ok(vec![]));
        assert!(printer.ops().is_empty());
    }

    #[test]
    fn test_text_is_batched() {
        let mut printer = RecordingPrinter::new();
        decode(&mut printer, b"Hello, world!").unwrap();
        assert_eq!(printer.ops(), &[Op::Text("Hello, world!".into())]);
    }

    #[test]
    fn test_no_op_controls_split_text() {
        let mut printer = RecordingPrinter::new();
        decode(&mut printer, b"AB\rCD\tE").unwrap();
        assert_eq!(printer.ops(), &[
            Op::Text("AB".into()),
            Op::Text("CD".into()),
            Op::Text("E".into()),
        ]);
    }

    #[test]
    fn test_high_byte_is_unsupported() {
        let mut printer = RecordingPrinter::new();
        let err = decode(&mut printer, b"OK\x80").unwrap_err();
        assert_eq!(err, DecodeError::UnsupportedCommand {
            prefix: None,
            opcode: 0x80,
        });
        assert_eq!(printer.ops(), &[Op::Text("OK".into())]);
    }

    #[test]
    fn test_cancel() {
        let mut printer = RecordingPrinter::new();
        decode(&mut printer, b"X\x18").unwrap();
        assert_eq!(printer.ops(), &[Op::Text("X".into()), Op::Cancel]);
    }

    #[test]
    fn test_truncated_esc() {
        let mut printer = RecordingPrinter::new();
        assert_eq!(
            decode(&mut printer, &[0x1B]),
            Err(DecodeError::EndOfStream { position: 1 })
        );
    }
}
