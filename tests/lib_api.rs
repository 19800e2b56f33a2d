//! Integration tests for the crate's top-level re-exports and wiring.

use ulib::{monotonic_ns, CivilTime, InputStream, OutputStream, UError, UHashMap, UHashSet, UString, UVec, ULIB_VERSION};

#[test]
fn version_is_well_formed() {
    assert!(ULIB_VERSION.major >= 0);
    assert_eq!(ULIB_VERSION.to_string().matches('.').count(), 2);
}

#[test]
fn monotonic_ns_is_available_and_nondecreasing() {
    let a = monotonic_ns();
    let b = monotonic_ns();
    assert!(b >= a);
}

#[test]
fn uvec_reexport_is_usable() {
    let mut v: UVec<i32> = UVec::new();
    v.push(1).unwrap();
    v.push(2).unwrap();
    assert_eq!(v.len(), 2);
}

#[test]
fn uhashmap_reexport_is_usable() {
    let mut m: UHashMap<u32, &'static str> = UHashMap::new();
    let _ = m.insert(1, "one").unwrap();
    assert_eq!(m.get(&1), Some(&"one"));
}

#[test]
fn uhashset_reexport_is_usable() {
    let mut s: UHashSet<u32> = UHashSet::new();
    assert!(s.insert(1).unwrap());
    assert!(s.contains(&1));
}

#[test]
fn ustring_reexport_is_usable() {
    let s = UString::copy_str("hello").unwrap();
    assert_eq!(s.as_str(), Some("hello"));
}

#[test]
fn civiltime_reexport_round_trips_through_timestamp() {
    let t = CivilTime::new(2023, 6, 15, 12, 0, 0);
    assert_eq!(CivilTime::from_timestamp(t.to_timestamp()), t);
}

#[test]
fn uerror_reexport_displays() {
    assert_eq!(UError::Bounds.to_string(), "operation exceeded buffer bounds");
}

#[test]
fn stream_traits_are_object_safe_and_reexported() {
    fn takes_streams(_i: &dyn InputStream, _o: &dyn OutputStream) {}
    let input = ulib::stream::MemoryInputStream::new(b"abc");
    let output = ulib::stream::NullOutputStream::new();
    takes_streams(&input, &output);
}
