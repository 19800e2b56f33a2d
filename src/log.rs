//! Leveled logging façade.
//!
//! Mirrors the colourised, level-filtered logging used throughout the
//! original C library's own diagnostics (and the benchmark harness). There
//! is no external logging crate dependency here — this is a small
//! hand-rolled façade rather than pulling in `log`/`tracing`, since the
//! surface needed (five levels, one global filter, one output stream)
//! doesn't warrant it.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use crate::color::Color;

/// Severity of a log message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Off => "",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    fn color(self) -> Color {
        match self {
            Level::Off => Color::Default,
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Cyan,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

enum Sink {
    Stderr,
    Stdout,
    Buffer(Vec<u8>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::Stderr => std::io::stderr().write(buf),
            Sink::Stdout => std::io::stdout().write(buf),
            Sink::Buffer(v) => v.write(buf),
        }
    }
    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Stderr => std::io::stderr().flush(),
            Sink::Stdout => std::io::stdout().flush(),
            Sink::Buffer(v) => v.flush(),
        }
    }
}

static SINK: Mutex<Option<Sink>> = Mutex::new(None);

/// Sets the global minimum level; messages below it are discarded.
pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Returns the current global minimum level.
pub fn level() -> Level {
    match LEVEL.load(Ordering::Relaxed) {
        0 => Level::Off,
        1 => Level::Error,
        2 => Level::Warn,
        3 => Level::Info,
        _ => Level::Debug,
    }
}

/// Redirects log output to an in-memory buffer instead of stderr, for
/// tests that want to assert on logged content.
#[doc(hidden)]
pub fn redirect_to_buffer() {
    *SINK.lock().unwrap() = Some(Sink::Buffer(Vec::new()));
}

/// Restores stderr as the log destination.
pub fn redirect_to_stderr() {
    *SINK.lock().unwrap() = Some(Sink::Stderr);
}

/// Restores stdout as the log destination.
pub fn redirect_to_stdout() {
    *SINK.lock().unwrap() = Some(Sink::Stdout);
}

#[doc(hidden)]
pub fn take_buffer() -> String {
    let mut guard = SINK.lock().unwrap();
    match guard.as_mut() {
        Some(Sink::Buffer(v)) => String::from_utf8_lossy(v).into_owned(),
        _ => String::new(),
    }
}

fn emit(level: Level, args: fmt::Arguments<'_>) {
    if level as u8 > LEVEL.load(Ordering::Relaxed) {
        return;
    }
    let mut guard = SINK.lock().unwrap();
    let sink = guard.get_or_insert(Sink::Stderr);
    let _ = writeln!(sink, "{}", level.color().paint(&format!("[{}] {}", level.tag(), args)));
}

/// Logs at [`Level::Error`].
pub fn error(args: fmt::Arguments<'_>) {
    emit(Level::Error, args);
}

/// Logs at [`Level::Warn`].
pub fn warn(args: fmt::Arguments<'_>) {
    emit(Level::Warn, args);
}

/// Logs at [`Level::Info`].
pub fn info(args: fmt::Arguments<'_>) {
    emit(Level::Info, args);
}

/// Logs at [`Level::Debug`].
pub fn debug(args: fmt::Arguments<'_>) {
    emit(Level::Debug, args);
}

/// Logs unconditionally (ignores the level filter) and then aborts the
/// process. Matches the C library's `ulib_fatal` macro, used for
/// unrecoverable invariant violations.
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    let mut guard = SINK.lock().unwrap();
    let sink = guard.get_or_insert(Sink::Stderr);
    let _ = writeln!(sink, "{}", Color::Red.paint(&format!("[FATAL] {}", args)));
    drop(guard);
    std::process::abort();
}

/// Logs at [`Level::Error`].
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::error(format_args!($($arg)*)) };
}

/// Logs at [`Level::Warn`].
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::warn(format_args!($($arg)*)) };
}

/// Logs at [`Level::Info`].
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::info(format_args!($($arg)*)) };
}

/// Logs at [`Level::Debug`].
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::debug(format_args!($($arg)*)) };
}

/// Logs and aborts. See [`fatal`].
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => { $crate::log::fatal(format_args!($($arg)*)) };
}
