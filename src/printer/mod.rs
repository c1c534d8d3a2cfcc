//! # Printer Module
//!
//! The device capability contract the decoder drives, and the value types
//! that flow through it.
//!
//! ## Modules
//!
//! - [`config`]: Formatting state ([`PrintConfig`]) and its field updates
//! - [`info`]: Device identity reported by printer ID queries
//! - [`status`]: Sensor readings for status queries
//! - [`layout`]: Line wrapping and justification for text runs
//! - [`style`]: Terminal escape codes for bold, italic, underline and color
//!
//! ## Implementing a Device
//!
//! Anything that implements [`Printer`] can be driven by
//! [`decode`](crate::decoder::decode). Text handed to [`Printer::text`] is
//! one literal run at a time. A device must wrap it at its column width,
//! justify and style each line according to the current config, and hold
//! the result until [`Printer::print`] flushes it. [`layout::layout_styled`]
//! does the wrapping, padding and styling.
//!
//! Accessors return copies. Nothing handed out by a device can be used to
//! change its state.

pub mod config;
pub mod info;
pub mod layout;
pub mod status;
pub mod style;

pub use config::{ConfigUpdate, Font, Justification, Magnification, PrintColor, PrintConfig};
pub use info::DeviceInfo;
pub use status::{
    DrawerLevel, DrawerPin, DrawerStatus, InkDetection, InkStatus, PaperSensor, PaperStatus,
};

/// # Printer Capability Contract
///
/// The operations an ESC/POS stream can ask of a device.
pub trait Printer {
    /// Current formatting state
    fn config(&self) -> PrintConfig;

    /// Device identity
    fn info(&self) -> DeviceInfo;

    /// Lay out one literal text run into the line buffer
    fn text(&mut self, text: &str);

    /// Advance the paper by `lines`
    fn feed(&mut self, lines: u8);

    fn carriage_return(&mut self);

    /// Restore [`PrintConfig::DEFAULT`]
    fn reset(&mut self);

    /// Flush the line buffer
    fn print(&mut self);

    fn cut(&mut self, partial: bool);

    /// Discard the line buffer
    fn cancel(&mut self);

    /// Sound the buzzer.
    ///
    /// `duration` and `cycle` are in units of 100 ms.
    fn beep(&mut self, duration: u8, count: u8, cycle: u16);

    /// Pulse a drawer kick-out connector pin
    fn drawer_kick_out(&mut self, pin: DrawerPin, on_time_ms: u16, off_time_ms: u16);

    /// Change a single config field
    fn update_config(&mut self, update: ConfigUpdate);

    fn paper_status(&self) -> PaperStatus;

    fn drawer_kick_out_status(&self) -> DrawerStatus;

    fn ink_status(&self) -> InkStatus;
}
