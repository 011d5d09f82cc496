//! C-ABI dynamic-loading exports.
//!
//! Foreign code linked into the same module calls the classic quartet; each
//! export forwards to the module-global [`Resolver`]. Handles cross the ABI
//! as boxed [`LibHandle`] values, and a null pointer is accepted everywhere
//! the classic API accepts one.
//!
//! These functions must never panic — panics in WASM cause traps.

use core::ffi::{c_char, c_int, c_void, CStr};
use std::ffi::CString;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use gangway_bridge::{LibHandle, Resolver};

use crate::host::WasmHost;

/// Module-global resolver. The execution model is one logical thread with
/// strictly nested calls; the lock is never contended.
static RESOLVER: LazyLock<Mutex<Resolver<WasmHost>>> =
    LazyLock::new(|| Mutex::new(Resolver::new(WasmHost)));

/// Message handed out by the last `dlerror` call, kept alive so the returned
/// pointer stays valid until the next call.
static DLERROR: LazyLock<Mutex<Option<CString>>> = LazyLock::new(|| Mutex::new(None));

fn lock<T>(cell: &'static LazyLock<Mutex<T>>) -> MutexGuard<'static, T> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `dlopen(3)` shape: returns an opaque handle, or null on failure with the
/// message retrievable via [`dlerror`]. `flags` is accepted and ignored;
/// there is no real loading to configure.
///
/// # Safety
/// `name` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn dlopen(name: *const c_char, _flags: c_int) -> *mut c_void {
    if name.is_null() {
        return core::ptr::null_mut();
    }
    // The scan stops at the terminator; the stored length excludes it.
    let name = unsafe { CStr::from_ptr(name) };
    match lock(&RESOLVER).open(name.to_bytes()) {
        Ok(handle) => Box::into_raw(Box::new(handle)) as *mut c_void,
        Err(_) => core::ptr::null_mut(),
    }
}

/// `dlsym(3)` shape: resolves against the host symbol table. Null means
/// "symbol not found" (the host answered null) or a null/stale handle
/// (check [`dlerror`]).
///
/// # Safety
/// `library` must be null or a handle returned by [`dlopen`] and not yet
/// closed; `symbol` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn dlsym(library: *mut c_void, symbol: *const c_char) -> *mut c_void {
    if symbol.is_null() {
        return core::ptr::null_mut();
    }
    let handle = unsafe { (library as *const LibHandle).as_ref() }.copied();
    let symbol = unsafe { CStr::from_ptr(symbol) };
    match lock(&RESOLVER).resolve(handle, symbol.to_bytes()) {
        Ok(addr) => addr,
        Err(_) => core::ptr::null_mut(),
    }
}

/// `dlclose(3)` shape: always succeeds; closing null is a no-op.
///
/// # Safety
/// `library` must be null or a handle returned by [`dlopen`], passed here at
/// most once.
#[no_mangle]
pub unsafe extern "C" fn dlclose(library: *mut c_void) -> c_int {
    if library.is_null() {
        return 0;
    }
    let handle = unsafe { Box::from_raw(library as *mut LibHandle) };
    lock(&RESOLVER).close(Some(*handle));
    0
}

/// `dlerror(3)` shape: returns the pending message and clears it, or null if
/// none. The pointer stays valid until the next `dlerror` call.
#[no_mangle]
pub extern "C" fn dlerror() -> *const c_char {
    let message = lock(&RESOLVER).last_error();
    let mut slot = lock(&DLERROR);
    *slot = message.and_then(|m| CString::new(m).ok());
    match slot.as_ref() {
        Some(message) => message.as_ptr(),
        None => core::ptr::null(),
    }
}
