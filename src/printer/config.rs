//! # Print Configuration
//!
//! The mutable formatting state a device applies to text.
//!
//! A [`PrintConfig`] is always a complete combination of settings. The
//! decoder never holds one of its own: it asks the device for single-field
//! changes through [`ConfigUpdate`], and the device owns the state.
//!
//! ## Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | bold / italic / underline | off |
//! | font | Font 1 (12×24) |
//! | width / height magnification | 1 |
//! | color | black |
//! | justification | left |

use std::fmt;

/// Character fonts selectable by `ESC !` and `ESC M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// 12×24 dots
    #[default]
    Font1,
    /// 9×17 dots
    Font2,
    FontA,
    FontB,
    FontC,
    FontD,
    FontE,
    SpecialFontA,
    SpecialFontB,
}

/// Ink color for two-color printers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintColor {
    #[default]
    Black,
    Red,
}

/// Horizontal text justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
}

/// Glyph scale factor, always in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Magnification(u8);

impl Magnification {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Normal size
    pub const ONE: Self = Self(1);
    /// Double size, as selected by `ESC !`
    pub const TWO: Self = Self(2);

    /// Returns `None` outside `1..=8`.
    pub const fn new(factor: u8) -> Option<Self> {
        if factor >= Self::MIN && factor <= Self::MAX {
            Some(Self(factor))
        } else {
            None
        }
    }

    /// Magnification for a 3-bit protocol field (`0..=7` maps to `1..=8`).
    ///
    /// Anything wider than three bits falls back to normal size.
    pub const fn from_field(field: u8) -> Self {
        if field <= 7 { Self(field + 1) } else { Self::ONE }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Magnification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// # Print Configuration
///
/// Formatting applied to subsequent text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font: Font,
    pub width_magnification: Magnification,
    pub height_magnification: Magnification,
    pub color: PrintColor,
    pub justification: Justification,
}

impl PrintConfig {
    /// Power-on state, also restored by `ESC @`.
    pub const DEFAULT: Self = Self {
        bold: false,
        italic: false,
        underline: false,
        font: Font::Font1,
        width_magnification: Magnification::ONE,
        height_magnification: Magnification::ONE,
        color: PrintColor::Black,
        justification: Justification::Left,
    };

    /// Apply a single-field change.
    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Bold(on) => self.bold = on,
            ConfigUpdate::Italic(on) => self.italic = on,
            ConfigUpdate::Underline(on) => self.underline = on,
            ConfigUpdate::Font(font) => self.font = font,
            ConfigUpdate::WidthMagnification(m) => self.width_magnification = m,
            ConfigUpdate::HeightMagnification(m) => self.height_magnification = m,
            ConfigUpdate::Color(color) => self.color = color,
            ConfigUpdate::Justification(j) => self.justification = j,
        }
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One field of [`PrintConfig`] together with its new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigUpdate {
    Bold(bool),
    Italic(bool),
    Underline(bool),
    Font(Font),
    WidthMagnification(Magnification),
    HeightMagnification(Magnification),
    Color(PrintColor),
    Justification(Justification),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnification_bounds() {
        assert_eq!(Magnification::new(0), None);
        assert_eq!(Magnification::new(1), Some(Magnification::ONE));
        assert_eq!(Magnification::new(8).map(Magnification::get), Some(8));
        assert_eq!(Magnification::new(9), None);
    }

    #[test]
    fn test_magnification_from_field() {
        assert_eq!(Magnification::from_field(0).get(), 1);
        assert_eq!(Magnification::from_field(5).get(), 6);
        assert_eq!(Magnification::from_field(7).get(), 8);
        assert_eq!(Magnification::from_field(8).get(), 1);
    }

    #[test]
    fn test_apply_touches_one_field() {
        let mut config = PrintConfig::DEFAULT;
        config.apply(ConfigUpdate::Justification(Justification::Right));

        let expected = PrintConfig {
            justification: Justification::Right,
            ..PrintConfig::DEFAULT
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_default_matches_const() {
        assert_eq!(PrintConfig::default(), PrintConfig::DEFAULT);
        assert_eq!(PrintConfig::DEFAULT.font, Font::Font1);
    }
}
