use colored::{Color, Colorize};

use super::Formatter;

const LINE_WIDTH: usize = 60;

// `colored` has no 256-colour escape, so palette entries are emitted as their
// 24-bit RGB values. Terminals without truecolor support approximate them.
const NOW: Color = xterm(167);
const NEXT: Color = xterm(131);
const SOON: Color = xterm(95);
const LATER: Color = xterm(59);
const TEXT: Color = xterm(252);

const SYSTEM: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB value of an xterm-256 palette index.
const fn xterm(index: u8) -> Color {
    let (r, g, b) = match index {
        0..=15 => SYSTEM[index as usize],
        16..=231 => {
            let i = (index - 16) as usize;
            (CUBE_LEVELS[i / 36], CUBE_LEVELS[(i / 6) % 6], CUBE_LEVELS[i % 6])
        }
        _ => {
            let level = 8 + 10 * (index - 232);
            (level, level, level)
        }
    };
    Color::TrueColor { r, g, b }
}

/// One fixed-width coloured block per line, darkening from `now` to `later`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorBlockFormatter;

fn block(line: &str, background: Color) -> String {
    format!("{:<width$}", line, width = LINE_WIDTH)
        .color(TEXT)
        .on_color(background)
        .to_string()
}

fn label(name: &str, first: bool) -> String {
    if first {
        format!("{:<7}- ", format!("{name}:"))
    } else {
        " ".repeat(9)
    }
}

impl Formatter for ColorBlockFormatter {
    fn format_now(&self, task: &str) -> String {
        block(&format!("{}{}", label("now", true), task), NOW)
    }

    fn format_next(&self, task: &str) -> String {
        block(&format!("{}{}", label("next", true), task), NEXT)
    }

    fn format_soon(&self, task: &str, first: bool) -> String {
        block(&format!("{}{}", label("soon", first), task), SOON)
    }

    fn format_later(&self, task: &str, first: bool) -> String {
        block(&format!("{}{}", label("later", first), task), LATER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_align() {
        assert_eq!(label("now", true), "now:   - ");
        assert_eq!(label("later", true), "later: - ");
        assert_eq!(label("soon", false), "         ");
    }

    #[test]
    fn test_xterm_palette() {
        assert_eq!(xterm(167), Color::TrueColor { r: 215, g: 95, b: 95 });
        assert_eq!(xterm(131), Color::TrueColor { r: 175, g: 95, b: 95 });
        assert_eq!(xterm(95), Color::TrueColor { r: 135, g: 95, b: 95 });
        assert_eq!(xterm(59), Color::TrueColor { r: 95, g: 95, b: 95 });
        assert_eq!(xterm(252), Color::TrueColor { r: 208, g: 208, b: 208 });
        assert_eq!(xterm(9), Color::TrueColor { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_block_uses_tier_background() {
        colored::control::set_override(true);
        let output = ColorBlockFormatter.format_later("", true);
        assert!(output.contains("48;2;95;95;95"));
    }

    #[test]
    fn test_block_pads_to_line_width() {
        colored::control::set_override(true);
        let output = ColorBlockFormatter.format_now("fix bug");

        assert!(output.starts_with('\u{1b}'));
        assert!(output.ends_with("\u{1b}[0m"));
        let padded = format!("{:<60}", "now:   - fix bug");
        assert!(output.contains(&padded));
    }
}
