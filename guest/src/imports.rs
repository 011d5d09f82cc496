//! Raw host function imports.
//!
//! Syscalls are imported under the `gangway_sdk` module; each returns a bare
//! `u32` status (0 = success) and writes into caller-provided buffers.
//! Symbol lookup is imported under `gangway_dl` and returns a pointer
//! directly, null meaning "not found".

use core::ffi::c_void;

#[link(wasm_import_module = "gangway_sdk")]
extern "C" {
    /// Fill `buf` from `slot`'s byte space starting at offset `index`.
    pub fn storage_read(slot: *const u8, index: u32, buf: *mut u8, buf_len: u32) -> u32;

    /// Write `buf` into `slot`'s byte space at `index`.
    /// Negative indices are a host-side sentinel, forwarded untouched.
    pub fn storage_write(slot: *const u8, index: i32, buf: *const u8, buf_len: u32) -> u32;

    /// Write the 32 little-endian balance bytes of `address` to `result`.
    pub fn get_balance(address: *const u8, result: *mut u8) -> u32;

    /// Write the executing module's own balance to `result`.
    pub fn get_self_balance(result: *mut u8) -> u32;

    /// Forward an opaque request; on success `*result_fd` is a descriptor
    /// for the pending result.
    pub fn gl_call(request: *const u8, request_len: u32, result_fd: *mut u32) -> u32;
}

#[link(wasm_import_module = "gangway_dl")]
extern "C" {
    /// Resolve a symbol against the host symbol table.
    #[link_name = "dlsym"]
    pub fn host_dlsym(
        lib_name: *const u8,
        lib_name_len: i32,
        sym_name: *const u8,
        sym_name_len: i32,
    ) -> *mut c_void;
}
