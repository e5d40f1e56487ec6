use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};

/// Maximum lines that fit a 240 px panel at the default pitch.
pub const MAX_LINES: usize = 11;

/// Full-width colon separating a label from its value.
pub const LABEL_SEPARATOR: char = '：';

/// Status lines shown when no text is given on the command line.
pub const DEFAULT_LINES: [&str; 7] = [
    "服务器：树莓派 4B",
    "系统：Debian 12",
    "内存：42.5%",
    "磁盘：118.2 GB 37%",
    "上行：12.4 KB/s",
    "下行：80.1 KB/s",
    "设备：腾讯 CVM",
];

/// Layout and colors for the status panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PanelConfig {
    pub origin_x: i32,
    pub origin_y: i32,
    /// Vertical distance between line tops.
    pub line_pitch: i32,
    pub label: Rgb565,
    pub value: Rgb565,
    pub background: Rgb565,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            origin_x: 4,
            origin_y: 4,
            line_pitch: 20,
            label: Rgb565::CYAN,
            value: Rgb565::WHITE,
            background: Rgb565::BLACK,
        }
    }
}

impl PanelConfig {
    pub fn line_origin(&self, line: usize) -> (i32, i32) {
        (
            self.origin_x,
            self.origin_y + self.line_pitch * line as i32,
        )
    }
}

/// Splits `"label：value"` after the separator. Lines without one are all value.
pub fn split_label(line: &str) -> (&str, &str) {
    match line.find(LABEL_SEPARATOR) {
        Some(pos) => line.split_at(pos + LABEL_SEPARATOR.len_utf8()),
        None => ("", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_keeps_separator() {
        assert_eq!(split_label("内存：42%"), ("内存：", "42%"));
        assert_eq!(split_label("plain"), ("", "plain"));
        assert_eq!(split_label("上行："), ("上行：", ""));
    }

    #[test]
    fn default_lines_fit_the_panel() {
        let config = PanelConfig::default();
        assert!(DEFAULT_LINES.len() <= MAX_LINES);
        let (_, last_y) = config.line_origin(MAX_LINES - 1);
        assert!(last_y + 16 <= 240);
    }
}
