//! # Line Layout
//!
//! Wrapping and justification of a text run at a fixed column width.
//!
//! ```text
//! width = 10
//!
//! Left     |HELLO     |
//! Center   |  HELLO   |
//! Right    |     HELLO|
//! ```
//!
//! Center padding is `(width - len) / 2`, rounded down.

use super::config::{Justification, PrintConfig};
use super::style::apply_style;

/// Split `text` on newlines, wrap each line at `width` columns and pad it
/// for `justification`.
///
/// An empty source line yields one empty output line. A `width` of zero
/// disables wrapping.
pub fn layout_lines(text: &str, width: usize, justification: Justification) -> Vec<String> {
    let config = PrintConfig {
        justification,
        ..PrintConfig::DEFAULT
    };
    layout_styled(text, width, &config)
}

/// Like [`layout_lines`], with each line's text wrapped in the style of
/// `config`. Padding stays outside the styled span.
pub fn layout_styled(text: &str, width: usize, config: &PrintConfig) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap(line, width))
        .map(|line| {
            let pad = padding(line.chars().count(), width, config.justification);
            format!("{}{}", " ".repeat(pad), apply_style(&line, config))
        })
        .collect()
}

fn wrap(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if width == 0 || chars.is_empty() {
        return vec![line.to_string()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

fn padding(len: usize, width: usize, justification: Justification) -> usize {
    let free = width.saturating_sub(len);
    match justification {
        Justification::Left => 0,
        Justification::Right => free,
        Justification::Center => free / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_left_is_unpadded() {
        assert_eq!(layout_lines("HI", 20, Justification::Left), vec!["HI"]);
    }

    #[test]
    fn test_right_pads_to_width() {
        assert_eq!(layout_lines("HI", 6, Justification::Right), vec!["    HI"]);
    }

    #[test]
    fn test_center_rounds_down() {
        assert_eq!(layout_lines("ABC", 20, Justification::Center), vec![
            " ".repeat(8) + "ABC"
        ]);
    }

    #[test]
    fn test_wraps_long_lines() {
        assert_eq!(layout_lines("ABCDEFG", 3, Justification::Left), vec![
            "ABC", "DEF", "G"
        ]);
    }

    #[test]
    fn test_wrapped_tail_is_justified() {
        assert_eq!(layout_lines("ABCDE", 4, Justification::Right), vec![
            "ABCD", "   E"
        ]);
    }

    #[test]
    fn test_styled_padding_outside_codes() {
        let config = PrintConfig {
            bold: true,
            justification: Justification::Right,
            ..PrintConfig::DEFAULT
        };
        assert_eq!(layout_styled("ABCDE", 4, &config), vec![
            "\x1b[1mABCD\x1b[0m", "   \x1b[1mE\x1b[0m"
        ]);
    }

    #[test]
    fn test_newlines_split() {
        assert_eq!(layout_lines("A\n\nB", 5, Justification::Left), vec![
            "A", "", "B"
        ]);
    }
}
