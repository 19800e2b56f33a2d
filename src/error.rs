//! Error kinds shared by every fallible operation in the crate.
//!
//! Mirrors the hand-rolled `Display`/`Error` impls the crate already uses
//! for its frame-level errors (no `thiserror`): a plain enum with a manual
//! `fmt::Display`.

use std::fmt;

/// The five error kinds produced by the core.
///
/// `Absent` and `Present` are status values, not failures — most APIs that
/// can produce them return a `bool` or a `Result` with those used only
/// where propagating them through `?` is convenient (e.g. `map_replace`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UError {
    /// An allocating operation could not acquire memory.
    Memory,
    /// A bounded-buffer write exceeded its capacity, or a varint decode
    /// ran past its maximum length without terminating.
    Bounds,
    /// A file-backed stream operation failed at the OS level.
    Io,
    /// Lookup or removal of a key that is not present.
    Absent,
    /// Insertion attempted against a key that is already present.
    Present,
}

impl fmt::Display for UError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UError::Memory => "out of memory",
            UError::Bounds => "operation exceeded buffer bounds",
            UError::Io => "I/O error",
            UError::Absent => "key not present",
            UError::Present => "key already present",
        })
    }
}

impl std::error::Error for UError {}

/// Convenience alias used throughout the crate's fallible APIs.
pub type UResult<T> = Result<T, UError>;
