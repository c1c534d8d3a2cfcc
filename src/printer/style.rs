//! # Text Style
//!
//! Terminal rendering of the style fields in a [`PrintConfig`].
//!
//! | Field | SGR code |
//! |-------|----------|
//! | bold | `ESC [ 1 m` |
//! | italic | `ESC [ 3 m` |
//! | underline | `ESC [ 4 m` |
//! | red color | `ESC [ 31 m` |
//!
//! Styled text is always closed with [`RESET`]. Font and magnification have
//! no terminal equivalent and are not rendered.

use super::config::{PrintColor, PrintConfig};

/// SGR reset, closes every styled span
pub const RESET: &str = "\x1b[0m";

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const UNDERLINE: &str = "\x1b[4m";
const RED: &str = "\x1b[31m";

/// Opening sequence for the active style, empty when nothing is set.
pub fn style_prefix(config: &PrintConfig) -> String {
    let mut prefix = String::new();
    if config.bold {
        prefix.push_str(BOLD);
    }
    if config.italic {
        prefix.push_str(ITALIC);
    }
    if config.underline {
        prefix.push_str(UNDERLINE);
    }
    if config.color == PrintColor::Red {
        prefix.push_str(RED);
    }
    prefix
}

/// Wrap `text` in the style of `config`.
///
/// Plain config and empty text are returned unchanged.
pub fn apply_style(text: &str, config: &PrintConfig) -> String {
    let prefix = style_prefix(config);
    if prefix.is_empty() || text.is_empty() {
        return text.to_string();
    }
    format!("{prefix}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::ConfigUpdate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_config_is_unstyled() {
        assert_eq!(style_prefix(&PrintConfig::DEFAULT), "");
        assert_eq!(apply_style("HI", &PrintConfig::DEFAULT), "HI");
    }

    #[test]
    fn test_codes_in_fixed_order() {
        let mut config = PrintConfig::DEFAULT;
        config.apply(ConfigUpdate::Color(PrintColor::Red));
        config.apply(ConfigUpdate::Underline(true));
        config.apply(ConfigUpdate::Bold(true));
        config.apply(ConfigUpdate::Italic(true));
        assert_eq!(
            apply_style("HI", &config),
            "\x1b[1m\x1b[3m\x1b[4m\x1b[31mHI\x1b[0m"
        );
    }

    #[test]
    fn test_empty_text_stays_empty() {
        let config = PrintConfig {
            bold: true,
            ..PrintConfig::DEFAULT
        };
        assert_eq!(apply_style("", &config), "");
    }
}
