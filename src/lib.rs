// ulib — Rust port

pub mod alloc;
pub mod bitmask;
pub mod color;
pub mod error;
pub mod hash_func;
pub mod hash_table;
pub mod log;
pub mod numeric;
pub mod rand;
pub mod stream;
pub mod string;
pub mod time;
pub mod varint;
pub mod vec;
pub mod version;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// Generic dynamic array with small-size optimization. Equivalent to `UVec(T)`.
pub use vec::UVec;

/// Generic open-addressing hash map. Equivalent to `UHash(T)` in map mode.
pub use hash_table::UHashMap;
/// Generic open-addressing hash set. Equivalent to `UHash(T)` in set mode.
pub use hash_table::UHashSet;
/// Result of a hash table insertion. Equivalent to `uhash_ret`.
pub use hash_table::PutResult;

/// Small-size-optimized immutable string. Equivalent to `UString`.
pub use string::UString;

/// Generic input stream trait, object-safe. Equivalent to the `UIStream` vtable.
pub use stream::InputStream;
/// Generic output stream trait, object-safe. Equivalent to the `UOStream` vtable.
pub use stream::OutputStream;

/// Civil (calendar) time. Equivalent to `UTime`.
pub use time::CivilTime;
/// A unit a time quantity or interval is expressed in. Equivalent to `utime_unit`.
pub use time::Unit as TimeUnit;
/// Monotonic nanosecond counter. Equivalent to `utime_get_ns`.
pub use time::monotonic_ns;

/// The error type returned by fallible operations throughout the crate.
/// Equivalent to `ulib_ret`.
pub use error::UError;
/// `Result` alias using [`UError`].
pub use error::UResult;

/// The crate's numeric aliases (`UInt`, `Int`, `Float`), configurable at
/// build time via the `tiny`/`huge` features. Equivalent to `ulib_int.h`'s
/// `UInt`/`Int`/`UFloat` typedefs under `ULIB_TINY`/`ULIB_HUGE`.
pub use numeric::{Float, Int, UInt};

/// The version of this crate, parsed from `Cargo.toml` at compile time.
/// Equivalent to `ulib_get_version`.
pub use version::ULIB_VERSION;

/// Replaceable `malloc`/`calloc`/`realloc`/`free` table. Equivalent to
/// redefining `ulib_malloc`/`ulib_calloc`/`ulib_realloc`/`ulib_free`.
pub use alloc::Allocator;
/// Installs a custom [`Allocator`] table. Equivalent to redefining
/// `ualloc.h`'s macros ahead of any header that uses them.
pub use alloc::set_allocator;
