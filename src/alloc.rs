//! Allocator façade.
//!
//! Every heap allocation made by the containers in this crate routes
//! through the three functions here instead of calling the global Rust
//! allocator directly — mirroring `ualloc.h`, where `ulib_malloc` /
//! `ulib_realloc` / `ulib_free` are macros the embedder can redefine.
//! Out-of-memory is always a `None`/`null` return, never a panic or abort.
//!
//! [`set_allocator`] is the runtime equivalent of redefining those macros:
//! it installs a replacement `malloc`/`calloc`/`realloc`/`free` table once,
//! before this module's first allocation locks it in.
//!
//! With the `leak-detect` feature enabled, each call records its call
//! site (mirrors `uleak.h`/`uleak.c`) in a process-wide table that
//! [`report_leaks`] can dump at shutdown.

use std::alloc::Layout;
use std::ffi::c_void;
use std::ptr;
use std::sync::OnceLock;

/// Allocates `layout.size()` uninitialized bytes aligned to `layout.align()`.
///
/// Returns a null pointer on failure. Matches `ulib_malloc`.
#[track_caller]
pub fn alloc(layout: Layout) -> *mut u8 {
    if layout.size() == 0 {
        return ptr::NonNull::<u8>::dangling().as_ptr();
    }
    let ptr = raw_alloc(layout, false);
    if !ptr.is_null() {
        track_alloc(ptr);
    }
    ptr
}

/// Allocates zero-initialized storage. Matches `ulib_calloc`.
#[track_caller]
pub fn alloc_zeroed(layout: Layout) -> *mut u8 {
    if layout.size() == 0 {
        return ptr::NonNull::<u8>::dangling().as_ptr();
    }
    let ptr = raw_alloc(layout, true);
    if !ptr.is_null() {
        track_alloc(ptr);
    }
    ptr
}

/// Reallocates a previously-allocated block to `new_size` bytes, preserving
/// `old_layout.align()`. Matches `ulib_realloc`.
///
/// # Safety
/// `ptr` must have been returned by [`alloc`]/[`alloc_zeroed`]/[`realloc`]
/// with the same alignment as `old_layout.align()`, or be null.
#[track_caller]
pub unsafe fn realloc(ptr: *mut u8, old_layout: Layout, new_size: usize) -> *mut u8 {
    if ptr.is_null() {
        return alloc(Layout::from_size_align_unchecked(new_size, old_layout.align()));
    }
    if new_size == 0 {
        dealloc(ptr, old_layout);
        return ptr::NonNull::<u8>::dangling().as_ptr();
    }

    let new_ptr = if old_layout.align() <= DEFAULT_MALLOC_ALIGN {
        (allocator().realloc)(ptr as *mut c_void, new_size) as *mut u8
    } else {
        // `realloc` cannot change alignment; allocate fresh and copy.
        let fresh = raw_alloc(Layout::from_size_align_unchecked(new_size, old_layout.align()), false);
        if !fresh.is_null() {
            let copy_size = new_size.min(old_layout.size());
            ptr::copy_nonoverlapping(ptr, fresh, copy_size);
            libc::free(ptr as *mut c_void);
        }
        fresh
    };

    if !new_ptr.is_null() && new_ptr != ptr {
        untrack_alloc(ptr);
        track_alloc(new_ptr);
    } else if new_ptr.is_null() {
        // realloc failure leaves the original block intact (C semantics).
    }

    new_ptr
}

/// Frees a block previously returned by [`alloc`]/[`alloc_zeroed`]/[`realloc`].
/// Matches `ulib_free`. A null pointer is a no-op.
///
/// # Safety
/// `ptr` must have been returned by this module with matching `layout`, or
/// be null.
pub unsafe fn dealloc(ptr: *mut u8, layout: Layout) {
    if ptr.is_null() || layout.size() == 0 {
        return;
    }
    untrack_alloc(ptr);
    if layout.align() <= DEFAULT_MALLOC_ALIGN {
        (allocator().free)(ptr as *mut c_void);
    } else {
        // always allocated via `posix_memalign`, which is `free`-compatible
        // but outside the overridable table (see `raw_alloc`).
        libc::free(ptr as *mut c_void);
    }
}

/// Default alignment guaranteed by `malloc`/`realloc` on every supported
/// target (16 bytes covers `max_align_t` on all platforms we care about).
const DEFAULT_MALLOC_ALIGN: usize = 16;

/// Raw `malloc`-family function pointers, swappable once via
/// [`set_allocator`]. Mirrors `ualloc.h`'s `ulib_malloc`/`ulib_calloc`/
/// `ulib_realloc`/`ulib_free` macros, which the embedder redefines at
/// compile time; here the equivalent hook is a runtime table instead,
/// since Rust has no preprocessor to redefine the call sites with.
///
/// Only the default, natively-aligned path goes through this table —
/// like the macros it mirrors, it has no notion of over-aligned
/// allocation, so requests above [`DEFAULT_MALLOC_ALIGN`] always use
/// `posix_memalign` directly.
#[derive(Clone, Copy)]
pub struct Allocator {
    pub malloc: unsafe extern "C" fn(usize) -> *mut c_void,
    pub calloc: unsafe extern "C" fn(usize, usize) -> *mut c_void,
    pub realloc: unsafe extern "C" fn(*mut c_void, usize) -> *mut c_void,
    pub free: unsafe extern "C" fn(*mut c_void),
}

const DEFAULT_ALLOCATOR: Allocator =
    Allocator { malloc: libc::malloc, calloc: libc::calloc, realloc: libc::realloc, free: libc::free };

static ALLOCATOR: OnceLock<Allocator> = OnceLock::new();

fn allocator() -> &'static Allocator {
    ALLOCATOR.get_or_init(|| DEFAULT_ALLOCATOR)
}

/// Installs `allocator` as the table every allocation in this crate routes
/// through, in place of the libc default. Must be called before the first
/// allocation (this module's own first use of the table locks it in);
/// later calls are no-ops. Returns `true` iff `allocator` was actually
/// installed.
///
/// Matches redefining `ulib_malloc`/`ulib_calloc`/`ulib_realloc`/
/// `ulib_free` ahead of including any header that uses them.
pub fn set_allocator(allocator: Allocator) -> bool {
    ALLOCATOR.set(allocator).is_ok()
}

fn raw_alloc(layout: Layout, zeroed: bool) -> *mut u8 {
    unsafe {
        if layout.align() <= DEFAULT_MALLOC_ALIGN {
            let a = allocator();
            if zeroed {
                (a.calloc)(1, layout.size()) as *mut u8
            } else {
                (a.malloc)(layout.size()) as *mut u8
            }
        } else {
            let mut out: *mut c_void = ptr::null_mut();
            let rc = libc::posix_memalign(&mut out, layout.align(), layout.size());
            if rc != 0 {
                return ptr::null_mut();
            }
            if zeroed {
                ptr::write_bytes(out as *mut u8, 0, layout.size());
            }
            out as *mut u8
        }
    }
}

#[cfg(feature = "leak-detect")]
mod leak {
    use std::collections::HashMap;
    use std::panic::Location;
    use std::sync::Mutex;

    pub struct Site {
        pub file: &'static str,
        pub line: u32,
    }

    static TABLE: Mutex<Option<HashMap<usize, Site>>> = Mutex::new(None);

    pub fn start() {
        *TABLE.lock().unwrap() = Some(HashMap::new());
    }

    pub fn track(ptr: *mut u8, loc: &'static Location<'static>) {
        if let Some(table) = TABLE.lock().unwrap().as_mut() {
            table.insert(
                ptr as usize,
                Site { file: loc.file(), line: loc.line() },
            );
        }
    }

    pub fn untrack(ptr: *mut u8) {
        if let Some(table) = TABLE.lock().unwrap().as_mut() {
            table.remove(&(ptr as usize));
        }
    }

    /// Returns `(address, file, line)` for every outstanding allocation.
    pub fn leaks() -> Vec<(usize, &'static str, u32)> {
        TABLE
            .lock()
            .unwrap()
            .as_ref()
            .map(|t| t.iter().map(|(addr, s)| (*addr, s.file, s.line)).collect())
            .unwrap_or_default()
    }
}

#[cfg(feature = "leak-detect")]
#[track_caller]
fn track_alloc(ptr: *mut u8) {
    leak::track(ptr, std::panic::Location::caller());
}

#[cfg(not(feature = "leak-detect"))]
fn track_alloc(_ptr: *mut u8) {}

#[cfg(feature = "leak-detect")]
fn untrack_alloc(ptr: *mut u8) {
    leak::untrack(ptr);
}

#[cfg(not(feature = "leak-detect"))]
fn untrack_alloc(_ptr: *mut u8) {}

/// Starts leak detection (clears any previously recorded allocations).
/// A no-op unless built with the `leak-detect` feature, matching
/// `uleak_detect_start`'s `ULIB_LEAKS`-gated behaviour.
pub fn detect_start() {
    #[cfg(feature = "leak-detect")]
    leak::start();
}

/// Returns the set of allocations made through this module that have not
/// yet been freed, as `(address, file, line)` of the allocating call site.
/// Always empty unless built with the `leak-detect` feature.
pub fn leaks() -> Vec<(usize, &'static str, u32)> {
    #[cfg(feature = "leak-detect")]
    {
        leak::leaks()
    }
    #[cfg(not(feature = "leak-detect"))]
    {
        Vec::new()
    }
}

/// Logs every outstanding allocation via [`crate::log`] and returns `true`
/// iff none were found. Matches `uleak_detect_end`.
pub fn report_leaks() -> bool {
    let leaks = leaks();
    if leaks.is_empty() {
        crate::log::debug(format_args!("Leaks: none"));
        return true;
    }
    crate::log::warn(format_args!("Leaks: {}", leaks.len()));
    for (i, (addr, file, line)) in leaks.iter().enumerate() {
        crate::log::warn(format_args!("Leak {}: {:#x} ({}, line {})", i + 1, addr, file, line));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_dealloc_roundtrip() {
        let layout = Layout::from_size_align(64, 8).unwrap();
        let p = alloc(layout);
        assert!(!p.is_null());
        unsafe {
            ptr::write_bytes(p, 0xAB, 64);
            dealloc(p, layout);
        }
    }

    #[test]
    fn zeroed_alloc_is_zero() {
        let layout = Layout::from_size_align(32, 8).unwrap();
        let p = alloc_zeroed(layout);
        assert!(!p.is_null());
        unsafe {
            for i in 0..32 {
                assert_eq!(*p.add(i), 0);
            }
            dealloc(p, layout);
        }
    }

    #[test]
    fn realloc_grows_and_preserves_prefix() {
        let layout = Layout::from_size_align(16, 8).unwrap();
        unsafe {
            let p = alloc(layout);
            ptr::write_bytes(p, 7, 16);
            let p2 = realloc(p, layout, 64);
            assert!(!p2.is_null());
            for i in 0..16 {
                assert_eq!(*p2.add(i), 7);
            }
            dealloc(p2, Layout::from_size_align(64, 8).unwrap());
        }
    }

    #[test]
    fn set_allocator_only_takes_effect_once() {
        let custom = Allocator { malloc: libc::malloc, calloc: libc::calloc, realloc: libc::realloc, free: libc::free };
        let _first = set_allocator(custom);
        let second = set_allocator(custom);
        assert!(!second, "the table can only be installed once per process");
    }
}
