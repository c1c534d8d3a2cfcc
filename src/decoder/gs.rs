//! `GS` sub-command handlers, including the status and identity queries
//! that produce reply bytes.

use super::{dual_encoded, printer_id};
use crate::error::DecodeError;
use crate::printer::{ConfigUpdate, Magnification, Printer};
use crate::protocol::ByteCursor;
use crate::protocol::commands::{GS, GsCommand};

pub(super) fn handle<P: Printer + ?Sized>(
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
) -> Result<Vec<u8>, DecodeError> {
    let opcode = cursor.read_one_or_fail()?;
    let command = GsCommand::from_byte(opcode).ok_or(DecodeError::UnsupportedCommand {
        prefix: Some(GS),
        opcode,
    })?;
    tracing::debug!(?command, "GS");

    match command {
        GsCommand::CutPaper => {
            cut_paper(printer, cursor)?;
            Ok(Vec::new())
        }
        GsCommand::PrinterId => printer_id::reply(&printer.info(), cursor.read_one_or_fail()?),
        GsCommand::TransmitStatus => transmit_status(&*printer, cursor.read_one_or_fail()?),
        GsCommand::SelectCharacterSize => {
            let n = cursor.read_one_or_fail()?;
            printer.update_config(ConfigUpdate::WidthMagnification(Magnification::from_field(
                n >> 4,
            )));
            printer.update_config(ConfigUpdate::HeightMagnification(
                Magnification::from_field(n & 0x0F),
            ));
            Ok(Vec::new())
        }
    }
}

/// How `GS V` reaches the cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CutFunction {
    /// A: cut at the current position
    Immediate,
    /// B, C, D: feed `n` lines first
    FeedThenCut,
}

/// `GS V m [n]`
///
/// | m | Function | Cut |
/// |---|----------|-----|
/// | 0x00 / 0x30 | A | full |
/// | 0x01 / 0x31 | A | partial |
/// | 0x41 / 0x42 | B: feed, cut | full / partial |
/// | 0x61 / 0x62 | C: preset cut position | full / partial |
/// | 0x67 / 0x68 | D: feed, cut, reverse feed | full / partial |
fn cut_paper<P: Printer + ?Sized>(
    printer: &mut P,
    cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
    let m = cursor.read_one_or_fail()?;

    // Unknown modes fail here, before the feed byte is read or any line fed
    let (function, partial) = match m {
        0x00 | 0x30 => (CutFunction::Immediate, false),
        0x01 | 0x31 => (CutFunction::Immediate, true),
        0x41 | 0x61 | 0x67 => (CutFunction::FeedThenCut, false),
        0x42 | 0x62 | 0x68 => (CutFunction::FeedThenCut, true),
        _ => {
            return Err(DecodeError::InvalidArgument {
                command: "paper cut",
                value: usize::from(m),
            });
        }
    };

    if function == CutFunction::FeedThenCut {
        let lines = cursor.read_one_or_fail()?;
        printer.feed(lines);
    }
    printer.cut(partial);
    Ok(())
}

/// `GS r n`
fn transmit_status<P: Printer + ?Sized>(printer: &P, n: u8) -> Result<Vec<u8>, DecodeError> {
    let byte = match dual_encoded(n, 5) {
        Some(1) => printer.paper_status().to_byte(),
        Some(2) => printer.drawer_kick_out_status().to_byte(),
        Some(4) => printer.ink_status().to_byte(),
        _ => {
            return Err(DecodeError::InvalidArgument {
                command: "status",
                value: usize::from(n),
            });
        }
    };
    Ok(vec![byte])
}
