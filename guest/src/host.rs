//! [`HostCalls`] over the raw WASM imports.
//!
//! Each method marshals slice pointers and lengths into one import call and
//! hands the bare status back untranslated; the bridge layer owns the
//! translation.

use core::ffi::c_void;

use gangway_abi::{
    balance::BALANCE_LEN,
    host::{HostCalls, ADDRESS_LEN, SLOT_LEN},
    status::RawStatus,
};

use crate::imports;

/// Zero-sized [`HostCalls`] implementation backed by the WASM import table.
///
/// Constructible anywhere, but only meaningful inside an instantiated module
/// where the host has supplied the imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmHost;

impl HostCalls for WasmHost {
    fn storage_read(&mut self, slot: &[u8; SLOT_LEN], index: u32, buf: &mut [u8]) -> RawStatus {
        unsafe { imports::storage_read(slot.as_ptr(), index, buf.as_mut_ptr(), buf.len() as u32) }
    }

    fn storage_write(&mut self, slot: &[u8; SLOT_LEN], index: i32, buf: &[u8]) -> RawStatus {
        unsafe { imports::storage_write(slot.as_ptr(), index, buf.as_ptr(), buf.len() as u32) }
    }

    fn get_balance(
        &mut self,
        address: &[u8; ADDRESS_LEN],
        result: &mut [u8; BALANCE_LEN],
    ) -> RawStatus {
        unsafe { imports::get_balance(address.as_ptr(), result.as_mut_ptr()) }
    }

    fn get_self_balance(&mut self, result: &mut [u8; BALANCE_LEN]) -> RawStatus {
        unsafe { imports::get_self_balance(result.as_mut_ptr()) }
    }

    fn call(&mut self, request: &[u8], result_fd: &mut u32) -> RawStatus {
        unsafe { imports::gl_call(request.as_ptr(), request.len() as u32, result_fd) }
    }

    fn resolve_symbol(&mut self, lib_name: &[u8], sym_name: &[u8]) -> *mut c_void {
        unsafe {
            imports::host_dlsym(
                lib_name.as_ptr(),
                lib_name.len() as i32,
                sym_name.as_ptr(),
                sym_name.len() as i32,
            )
        }
    }
}
