//! # Recording Device
//!
//! An in-memory [`Printer`] that records every call it receives.
//!
//! The recorded trace is a list of [`Op`]s, one per contract call, in the
//! order the decoder made them. Text is laid out at a fixed column width
//! into a pending line buffer; [`Printer::print`] moves those lines onto the
//! printed output and [`Printer::cancel`] drops them.
//!
//! ## Example
//!
//! ```
//! use escpos_emu::decode;
//! use escpos_emu::device::{Op, RecordingPrinter};
//!
//! let mut printer = RecordingPrinter::new().with_columns(10);
//! decode(&mut printer, b"\x1ba\x01HI\n")?;
//!
//! assert_eq!(printer.printed(), &["    HI".to_string()]);
//! assert_eq!(printer.ops().last(), Some(&Op::Feed { lines: 1 }));
//! # Ok::<(), escpos_emu::DecodeError>(())
//! ```

use std::fmt;

use crate::printer::layout::layout_styled;
use crate::printer::{
    ConfigUpdate, DeviceInfo, DrawerPin, DrawerStatus, InkStatus, PaperStatus, PrintConfig,
    Printer,
};

/// Paper width in character columns when none is configured
pub const DEFAULT_COLUMNS: usize = 20;

/// One recorded call on the [`Printer`] contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Literal text run
    Text(String),
    Feed { lines: u8 },
    CarriageReturn,
    /// Config restored to defaults (ESC @)
    Reset,
    /// Line buffer flushed
    Print,
    Cut { partial: bool },
    /// Line buffer discarded (CAN)
    Cancel,
    /// Buzzer; `duration` and `cycle` in 100 ms units
    Beep { duration: u8, count: u8, cycle: u16 },
    DrawerKickOut {
        pin: DrawerPin,
        on_time_ms: u16,
        off_time_ms: u16,
    },
    UpdateConfig(ConfigUpdate),
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "text {text:?}"),
            Self::Feed { lines } => write!(f, "feed {lines}"),
            Self::CarriageReturn => write!(f, "carriage-return"),
            Self::Reset => write!(f, "reset"),
            Self::Print => write!(f, "print"),
            Self::Cut { partial: true } => write!(f, "cut (partial)"),
            Self::Cut { partial: false } => write!(f, "cut (full)"),
            Self::Cancel => write!(f, "cancel"),
            Self::Beep {
                duration,
                count,
                cycle,
            } => write!(
                f,
                "beep x{count} ({} ms, cycle {} ms)",
                u32::from(*duration) * 100,
                u32::from(*cycle) * 100
            ),
            Self::DrawerKickOut {
                pin,
                on_time_ms,
                off_time_ms,
            } => write!(
                f,
                "drawer kick-out pin {} ({on_time_ms}-{off_time_ms} ms)",
                pin.number()
            ),
            Self::UpdateConfig(update) => write!(f, "config {update:?}"),
        }
    }
}

/// # Recording Printer
///
/// Implements the full [`Printer`] contract without any hardware. Status
/// readings are fixed values set with the `with_*_status` builders.
#[derive(Debug, Clone)]
pub struct RecordingPrinter {
    info: DeviceInfo,
    config: PrintConfig,
    columns: usize,
    paper: PaperStatus,
    drawer: DrawerStatus,
    ink: InkStatus,
    ops: Vec<Op>,
    pending: Vec<String>,
    printed: Vec<String>,
}

impl RecordingPrinter {
    /// A device with the default identity and all sensors reporting normal.
    pub fn new() -> Self {
        Self::with_info(DeviceInfo::default())
    }

    pub fn with_info(info: DeviceInfo) -> Self {
        Self {
            info,
            config: PrintConfig::DEFAULT,
            columns: DEFAULT_COLUMNS,
            paper: PaperStatus::default(),
            drawer: DrawerStatus::default(),
            ink: InkStatus::default(),
            ops: Vec::new(),
            pending: Vec::new(),
            printed: Vec::new(),
        }
    }

    /// Set the paper width in character columns
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_paper_status(mut self, status: PaperStatus) -> Self {
        self.paper = status;
        self
    }

    pub fn with_drawer_status(mut self, status: DrawerStatus) -> Self {
        self.drawer = status;
        self
    }

    pub fn with_ink_status(mut self, status: InkStatus) -> Self {
        self.ink = status;
        self
    }

    /// Every call received so far
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Laid-out lines waiting for a print
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Lines flushed by print
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Default for RecordingPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer for RecordingPrinter {
    fn config(&self) -> PrintConfig {
        self.config
    }

    fn info(&self) -> DeviceInfo {
        self.info.clone()
    }

    fn text(&mut self, text: &str) {
        self.pending
            .extend(layout_styled(text, self.columns, &self.config));
        self.ops.push(Op::Text(text.to_string()));
    }

    fn feed(&mut self, lines: u8) {
        self.pending
            .extend(std::iter::repeat_n(String::new(), usize::from(lines)));
        self.ops.push(Op::Feed { lines });
    }

    fn carriage_return(&mut self) {
        self.ops.push(Op::CarriageReturn);
    }

    fn reset(&mut self) {
        self.config = PrintConfig::DEFAULT;
        self.ops.push(Op::Reset);
    }

    fn print(&mut self) {
        self.printed.append(&mut self.pending);
        self.ops.push(Op::Print);
    }

    fn cut(&mut self, partial: bool) {
        self.ops.push(Op::Cut { partial });
    }

    fn cancel(&mut self) {
        self.pending.clear();
        self.ops.push(Op::Cancel);
    }

    fn beep(&mut self, duration: u8, count: u8, cycle: u16) {
        self.ops.push(Op::Beep {
            duration,
            count,
            cycle,
        });
    }

    fn drawer_kick_out(&mut self, pin: DrawerPin, on_time_ms: u16, off_time_ms: u16) {
        self.ops.push(Op::DrawerKickOut {
            pin,
            on_time_ms,
            off_time_ms,
        });
    }

    fn update_config(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
        self.ops.push(Op::UpdateConfig(update));
    }

    fn paper_status(&self) -> PaperStatus {
        self.paper
    }

    fn drawer_kick_out_status(&self) -> DrawerStatus {
        self.drawer
    }

    fn ink_status(&self) -> InkStatus {
        self.ink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::{Font, Justification, Magnification, PrintColor};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reset_restores_default_from_any_state() {
        let mut printer = RecordingPrinter::new();
        for update in [
            ConfigUpdate::Bold(true),
            ConfigUpdate::Italic(true),
            ConfigUpdate::Underline(true),
            ConfigUpdate::Font(Font::SpecialFontB),
            ConfigUpdate::WidthMagnification(Magnification::new(8).unwrap()),
            ConfigUpdate::HeightMagnification(Magnification::new(3).unwrap()),
            ConfigUpdate::Color(PrintColor::Red),
            ConfigUpdate::Justification(Justification::Center),
        ] {
            printer.update_config(update);
        }
        assert_ne!(printer.config(), PrintConfig::DEFAULT);

        printer.reset();
        assert_eq!(printer.config(), PrintConfig::DEFAULT);
        printer.reset();
        assert_eq!(printer.config(), PrintConfig::DEFAULT);
    }

    #[test]
    fn test_config_is_a_copy() {
        let printer = RecordingPrinter::new();
        let mut config = printer.config();
        config.bold = true;
        assert!(!printer.config().bold);
    }

    #[test]
    fn test_print_flushes_pending() {
        let mut printer = RecordingPrinter::new().with_columns(4);
        printer.text("ABCDEF");
        assert_eq!(printer.pending(), &["ABCD".to_string(), "EF".to_string()]);
        assert!(printer.printed().is_empty());

        printer.print();
        assert!(printer.pending().is_empty());
        assert_eq!(printer.printed(), &["ABCD".to_string(), "EF".to_string()]);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut printer = RecordingPrinter::new();
        printer.text("gone");
        printer.cancel();
        printer.print();
        assert!(printer.printed().is_empty());
    }

    #[test]
    fn test_text_uses_current_justification() {
        let mut printer = RecordingPrinter::new().with_columns(6);
        printer.update_config(ConfigUpdate::Justification(Justification::Right));
        printer.text("AB");
        assert_eq!(printer.pending(), &["    AB".to_string()]);
    }

    #[test]
    fn test_text_uses_current_style() {
        let mut printer = RecordingPrinter::new();
        printer.update_config(ConfigUpdate::Underline(true));
        printer.text("AB");
        printer.update_config(ConfigUpdate::Underline(false));
        printer.text("CD");
        assert_eq!(printer.pending(), &[
            "\x1b[4mAB\x1b[0m".to_string(),
            "CD".to_string()
        ]);
    }

    #[test]
    fn test_op_display() {
        let op = Op::DrawerKickOut {
            pin: DrawerPin::Pin5,
            on_time_ms: 100,
            off_time_ms: 200,
        };
        assert_eq!(op.to_string(), "drawer kick-out pin 5 (100-200 ms)");
        assert_eq!(Op::Cut { partial: true }.to_string(), "cut (partial)");
        let beep = Op::Beep {
            duration: 2,
            count: 3,
            cycle: 4,
        };
        assert_eq!(beep.to_string(), "beep x3 (200 ms, cycle 400 ms)");
    }
}
