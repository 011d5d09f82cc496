//! The host import surface.
//!
//! [`HostCalls`] mirrors the fixed import table one-to-one. Implementations
//! return the host's bare status integer untranslated; the bridge applies
//! [`crate::status::check`] to every return value before trusting a result.
//! The WASM-backed implementation lives in the guest crate; tests use the
//! bridge crate's in-memory mock.

use core::ffi::c_void;

use crate::balance::BALANCE_LEN;
use crate::status::RawStatus;

/// Byte length of a storage slot identifier.
pub const SLOT_LEN: usize = 32;

/// Byte length of an account address.
pub const ADDRESS_LEN: usize = 20;

/// One-to-one mirror of the host import table.
///
/// Buffer arguments are borrowed only for the duration of the call; an
/// implementation must not retain them.
pub trait HostCalls {
    /// `storage_read(slot, index, buf, buf_len)` — fill `buf` from the slot's
    /// byte space starting at offset `index`.
    fn storage_read(&mut self, slot: &[u8; SLOT_LEN], index: u32, buf: &mut [u8]) -> RawStatus;

    /// `storage_write(slot, index, buf, buf_len)` — write `buf` into the
    /// slot's byte space at `index`. The index is signed; negative values are
    /// a host-side sentinel and reach the host untouched.
    fn storage_write(&mut self, slot: &[u8; SLOT_LEN], index: i32, buf: &[u8]) -> RawStatus;

    /// `get_balance(address, result)` — write the 32 little-endian balance
    /// bytes of `address` to `result`.
    fn get_balance(
        &mut self,
        address: &[u8; ADDRESS_LEN],
        result: &mut [u8; BALANCE_LEN],
    ) -> RawStatus;

    /// `get_self_balance(result)` — balance of the executing module itself.
    fn get_self_balance(&mut self, result: &mut [u8; BALANCE_LEN]) -> RawStatus;

    /// `gl_call(request, request_len, result_fd)` — forward an opaque request
    /// payload; on success `*result_fd` is a descriptor for the pending
    /// result. Neither side of the exchange is interpreted at this layer.
    fn call(&mut self, request: &[u8], result_fd: &mut u32) -> RawStatus;

    /// `dlsym(lib_name, lib_name_len, sym_name, sym_name_len)` — resolve a
    /// symbol against the host symbol table. Null means "not found"; no
    /// status code is involved.
    fn resolve_symbol(&mut self, lib_name: &[u8], sym_name: &[u8]) -> *mut c_void;
}
