//! # ESC/POS Opcode Tables
//!
//! Fixed mappings from byte values to command identities.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `CAN`, `CR`, `HT`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC ! n`, `GS V m n`, `ESC ( A pL pH fn n c t`
//!
//! ## Byte Order
//!
//! Multi-byte lengths use **little-endian** encoding (`pL + pH * 256`).
//!
//! ## Dual Encoding
//!
//! Many single-byte arguments accept either a small integer or its ASCII
//! digit: `0x00` and `0x30` (`'0'`) mean the same thing, as do `0x01` and
//! `0x31`, and so on.

// ============================================================================
// TOP-LEVEL CONTROL BYTES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
pub const GS: u8 = 0x1D;

/// FS (File Separator) - Kanji/NV command prefix
pub const FS: u8 = 0x1C;

/// US (Unit Separator) - Customer display prefix
pub const US: u8 = 0x1F;

/// DLE (Data Link Escape) - Real-time command prefix
pub const DLE: u8 = 0x10;

/// FF (Form Feed) - Print and feed one line (page mode: eject page)
pub const FF: u8 = 0x0C;

/// SO (Shift Out) - Print and feed to the black bar
pub const SO: u8 = 0x0E;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// CR (Carriage Return) - Print and return carriage
pub const CR: u8 = 0x0D;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

/// CAN (Cancel) - Discard the current line buffer
pub const CAN: u8 = 0x18;

/// Highest byte value treated as printable text
pub const TEXT_MAX: u8 = 0x7F;

/// Top-level commands recognized by the dispatcher.
///
/// Any byte not listed here is either text (`<= 0x7F`) or unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Esc,
    Gs,
    Fs,
    Us,
    Dle,
    FormFeed,
    ShiftOut,
    LineFeed,
    CarriageReturn,
    HorizontalTab,
    Cancel,
}

impl Command {
    /// Look up a top-level control byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            ESC => Self::Esc,
            GS => Self::Gs,
            FS => Self::Fs,
            US => Self::Us,
            DLE => Self::Dle,
            FF => Self::FormFeed,
            SO => Self::ShiftOut,
            LF => Self::LineFeed,
            CR => Self::CarriageReturn,
            HT => Self::HorizontalTab,
            CAN => Self::Cancel,
            _ => return None,
        })
    }

    /// Whether `byte` is a recognized top-level opcode.
    #[inline]
    pub fn is_command(byte: u8) -> bool {
        Self::from_byte(byte).is_some()
    }
}

// ============================================================================
// ESC SUB-COMMANDS
// ============================================================================

/// Sub-commands following an `ESC` prefix.
///
/// | Command | Hex | ASCII |
/// |---------|-----|-------|
/// | Initialize | 1B 40 | ESC @ |
/// | Select print mode | 1B 21 n | ESC ! n |
/// | Select print color | 1B 72 n | ESC r n |
/// | Select justification | 1B 61 n | ESC a n |
/// | Select character font | 1B 4D n | ESC M n |
/// | Emphasis mode | 1B 45 n | ESC E n |
/// | Buzzer | 1B 28 41 pL pH fn n c t | ESC ( A ... |
/// | Buzzer (undocumented) | 1B 42 n t | ESC B n t |
/// | Generate pulse | 1B 70 m t1 t2 | ESC p m t1 t2 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscCommand {
    Initialize,
    SelectPrintMode,
    SelectPrintColor,
    SelectJustification,
    SelectCharacterFont,
    EmphasisMode,
    Buzzer,
    UndocumentedBuzzer,
    GeneratePulse,
}

impl EscCommand {
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0x40 => Self::Initialize,
            0x21 => Self::SelectPrintMode,
            0x72 => Self::SelectPrintColor,
            0x61 => Self::SelectJustification,
            0x4D => Self::SelectCharacterFont,
            0x45 => Self::EmphasisMode,
            0x28 => Self::Buzzer,
            0x42 => Self::UndocumentedBuzzer,
            0x70 => Self::GeneratePulse,
            _ => return None,
        })
    }
}

// ============================================================================
// GS SUB-COMMANDS
// ============================================================================

/// Sub-commands following a `GS` prefix.
///
/// | Command | Hex | ASCII |
/// |---------|-----|-------|
/// | Cut paper | 1D 56 m [n] | GS V m [n] |
/// | Printer ID | 1D 49 n | GS I n |
/// | Transmit status | 1D 72 n (or 1D 76 n) | GS r n |
/// | Select character size | 1D 21 n | GS ! n |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GsCommand {
    CutPaper,
    PrinterId,
    TransmitStatus,
    SelectCharacterSize,
}

impl GsCommand {
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0x56 => Self::CutPaper,
            0x49 => Self::PrinterId,
            0x72 | 0x76 => Self::TransmitStatus,
            0x21 => Self::SelectCharacterSize,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_bytes() {
        assert_eq!(Command::from_byte(0x1B), Some(Command::Esc));
        assert_eq!(Command::from_byte(0x1D), Some(Command::Gs));
        assert_eq!(Command::from_byte(0x0A), Some(Command::LineFeed));
        assert_eq!(Command::from_byte(0x18), Some(Command::Cancel));
        assert_eq!(Command::from_byte(b'A'), None);
        assert_eq!(Command::from_byte(0x80), None);
    }

    #[test]
    fn test_no_op_family_is_recognized() {
        for byte in [FS, US, DLE, FF, SO, CR, HT] {
            assert!(Command::is_command(byte), "0x{byte:02x}");
        }
    }

    #[test]
    fn test_esc_table() {
        assert_eq!(EscCommand::from_byte(b'@'), Some(EscCommand::Initialize));
        assert_eq!(EscCommand::from_byte(b'p'), Some(EscCommand::GeneratePulse));
        assert_eq!(EscCommand::from_byte(0xFF), None);
    }

    #[test]
    fn test_gs_table() {
        assert_eq!(GsCommand::from_byte(b'V'), Some(GsCommand::CutPaper));
        assert_eq!(GsCommand::from_byte(b'r'), Some(GsCommand::TransmitStatus));
        assert_eq!(GsCommand::from_byte(b'v'), Some(GsCommand::TransmitStatus));
        assert_eq!(GsCommand::from_byte(0x99), None);
    }
}
