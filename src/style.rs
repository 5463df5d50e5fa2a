//! ANSI 256-color style descriptors for terminal output
//!
//! Styles are plain data (foreground plus optional background palette index)
//! rendered by a single shared `paint` function. Status text uses two fixed
//! bold styles independent of any line's own colors.

/// A 256-color terminal style: foreground index plus optional background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: u8,
    pub bg: Option<u8>,
    pub bold: bool,
}

impl Style {
    /// Foreground-only style.
    pub const fn fg(fg: u8) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
        }
    }

    /// Foreground on background, as used for the line-name labels.
    pub const fn on(fg: u8, bg: u8) -> Self {
        Self {
            fg,
            bg: Some(bg),
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Wrap `text` in the escape sequence for this style.
    ///
    /// When `color` is false the text passes through untouched, so the same
    /// rendering path serves both TTY and piped output.
    pub fn paint(&self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        let mut seq = String::from("\x1b[");
        if self.bold {
            seq.push_str("1;");
        }
        seq.push_str(&format!("38;5;{}", self.fg));
        if let Some(bg) = self.bg {
            seq.push_str(&format!(";48;5;{bg}"));
        }
        format!("{seq}m{text}\x1b[0m")
    }
}

/// Bold green for nominal service.
pub const GOOD_SERVICE: Style = Style::fg(46).bold();

/// Bold red for any disruption.
pub const DISRUPTION: Style = Style::fg(196).bold();
