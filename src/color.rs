//! ANSI terminal colour helpers.
//!
//! Small wrapper around SGR escape codes, used by [`crate::log`] to
//! colourise level tags. Degrades to a no-op when the destination isn't a
//! terminal, so piping output to a file never leaves stray escape bytes.

use std::io::IsTerminal;

/// A foreground SGR colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Default => "0",
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::Cyan => "36",
        }
    }

    /// Wraps `text` in this colour's SGR codes, unless colour output has
    /// been disabled via [`set_enabled`].
    pub fn paint(self, text: &str) -> String {
        if !enabled() {
            return text.to_string();
        }
        format!("\x1b[{}m{}\x1b[0m", self.code(), text)
    }
}

use std::sync::atomic::{AtomicU8, Ordering};

const AUTO: u8 = 0;
const FORCE_ON: u8 = 1;
const FORCE_OFF: u8 = 2;

static MODE: AtomicU8 = AtomicU8::new(AUTO);

/// Forces colour output on or off, overriding the terminal auto-detection.
pub fn set_enabled(enabled: bool) {
    MODE.store(if enabled { FORCE_ON } else { FORCE_OFF }, Ordering::Relaxed);
}

/// Returns colour auto-detection to its default (stderr-is-a-terminal) behaviour.
pub fn set_auto() {
    MODE.store(AUTO, Ordering::Relaxed);
}

fn enabled() -> bool {
    match MODE.load(Ordering::Relaxed) {
        FORCE_ON => true,
        FORCE_OFF => false,
        _ => std::io::stderr().is_terminal(),
    }
}
