//! Dynamic resolver integration tests.
//!
//! Exercise the classic open/resolve/close/last-error sequence end to end
//! against the in-memory host's symbol table.

mod common;

use common::*;
use gangway_bridge::ResolverError;

// ── Test: the happy path mirrors the classic dlopen/dlsym flow ──

#[test]
fn test_open_resolve_close() {
    let mut r = resolver();
    r.host_mut().define_symbol(b"libcodec.so", b"decode", 0x2000);

    let handle = r.open(b"libcodec.so").unwrap();
    let addr = r.resolve(Some(handle), b"decode").unwrap();
    assert_eq!(addr as usize, 0x2000);

    r.close(Some(handle));
    assert_eq!(r.last_error(), None);
}

// ── Test: open/close cycles are idempotent with respect to later opens ──

#[test]
fn test_repeated_open_close_cycles() {
    let mut r = resolver();
    for _ in 0..3 {
        let handle = r.open(b"libfoo.so").unwrap();
        r.close(Some(handle));
    }
    assert_eq!(r.last_error(), None);
}

// ── Test: null-handle misuse populates the last-error slot ──

#[test]
fn test_resolve_null_sets_last_error() {
    let mut r = resolver();
    let err = r.resolve(None, b"anything").unwrap_err();
    assert_eq!(err, ResolverError::InvalidHandle);

    let message = r.last_error().unwrap();
    assert!(!message.is_empty());
    // Read-and-clear: the slot is empty on the second query
    assert_eq!(r.last_error(), None);
}

// ── Test: only the most recent error is retained ──

#[test]
fn test_last_error_keeps_latest_only() {
    let mut r = resolver();
    let handle = r.open(b"liba.so").unwrap();
    r.close(Some(handle));

    r.resolve(None, b"first").unwrap_err();
    r.resolve(Some(handle), b"second").unwrap_err();

    assert_eq!(r.last_error().as_deref(), Some("library handle is stale"));
    assert_eq!(r.last_error(), None);
}

// ── Test: lookups carry the stored name, not the caller's string ──

#[test]
fn test_lookup_uses_name_captured_at_open() {
    let mut r = resolver();
    let mut name = b"libx.so".to_vec();
    let handle = r.open(&name).unwrap();

    // Caller mutating its own copy after open must not matter
    name[3] = b'y';
    r.resolve(Some(handle), b"run").unwrap();

    assert_eq!(r.host().lookups(), [(b"libx.so".to_vec(), b"run".to_vec())]);
}
