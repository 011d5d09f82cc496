//! In-memory host for testing.
//!
//! [`MockHost`] implements [`HostCalls`] without a real execution
//! environment: per-slot byte spaces, a balance table, and a scripted symbol
//! table, all backed by `BTreeMap` for deterministic ordering. Failure paths
//! are exercised by forcing the next import's status with
//! [`MockHost::fail_next`]. Writes, call payloads, and symbol lookups are
//! recorded verbatim so tests can assert on exactly what reached the host.

use core::ffi::c_void;
use std::collections::BTreeMap;

use gangway_abi::{
    balance::BALANCE_LEN,
    host::{HostCalls, ADDRESS_LEN, SLOT_LEN},
    status::RawStatus,
};

/// A storage write as seen by the host, recorded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub slot: [u8; SLOT_LEN],
    pub index: i32,
    pub data: Vec<u8>,
}

/// In-memory [`HostCalls`] implementation for tests.
#[derive(Debug, Default)]
pub struct MockHost {
    storage: BTreeMap<[u8; SLOT_LEN], Vec<u8>>,
    balances: BTreeMap<[u8; ADDRESS_LEN], [u8; BALANCE_LEN]>,
    self_balance: [u8; BALANCE_LEN],
    symbols: BTreeMap<(Vec<u8>, Vec<u8>), usize>,
    next_fd: u32,
    forced: Option<RawStatus>,
    writes: Vec<WriteRecord>,
    requests: Vec<Vec<u8>>,
    lookups: Vec<(Vec<u8>, Vec<u8>)>,
}

impl MockHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the next syscall import to return `status` without running.
    pub fn fail_next(&mut self, status: RawStatus) {
        self.forced = Some(status);
    }

    /// Seed a slot's byte space.
    pub fn set_storage(&mut self, slot: [u8; SLOT_LEN], data: Vec<u8>) {
        self.storage.insert(slot, data);
    }

    /// Raw view of a slot's byte space (empty if never written).
    pub fn storage(&self, slot: &[u8; SLOT_LEN]) -> &[u8] {
        self.storage.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Seed an account balance from its 32 little-endian bytes.
    pub fn set_balance(&mut self, address: [u8; ADDRESS_LEN], raw: [u8; BALANCE_LEN]) {
        self.balances.insert(address, raw);
    }

    /// Seed the executing module's own balance.
    pub fn set_self_balance(&mut self, raw: [u8; BALANCE_LEN]) {
        self.self_balance = raw;
    }

    /// Register a symbol the host will resolve to `addr`.
    pub fn define_symbol(&mut self, lib: &[u8], sym: &[u8], addr: usize) {
        self.symbols.insert((lib.to_vec(), sym.to_vec()), addr);
    }

    /// Descriptor handed back by the next successful `call`.
    pub fn set_next_fd(&mut self, fd: u32) {
        self.next_fd = fd;
    }

    /// Storage writes in the order the host saw them.
    pub fn writes(&self) -> &[WriteRecord] {
        &self.writes
    }

    /// Call payloads in the order the host saw them.
    pub fn requests(&self) -> &[Vec<u8>] {
        &self.requests
    }

    /// Symbol lookups `(lib_name, sym_name)` in the order the host saw them.
    pub fn lookups(&self) -> &[(Vec<u8>, Vec<u8>)] {
        &self.lookups
    }
}

impl HostCalls for MockHost {
    fn storage_read(&mut self, slot: &[u8; SLOT_LEN], index: u32, buf: &mut [u8]) -> RawStatus {
        if let Some(status) = self.forced.take() {
            return status;
        }
        let space = self.storage.get(slot).map(Vec::as_slice).unwrap_or(&[]);
        let start = index as usize;
        // Unwritten bytes read as zero
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = space.get(start + i).copied().unwrap_or(0);
        }
        0
    }

    fn storage_write(&mut self, slot: &[u8; SLOT_LEN], index: i32, buf: &[u8]) -> RawStatus {
        if let Some(status) = self.forced.take() {
            return status;
        }
        self.writes.push(WriteRecord {
            slot: *slot,
            index,
            data: buf.to_vec(),
        });
        // Negative indices are a sentinel whose meaning belongs to the real
        // host; record them but leave the byte space untouched.
        if index >= 0 {
            let space = self.storage.entry(*slot).or_default();
            let start = index as usize;
            if space.len() < start + buf.len() {
                space.resize(start + buf.len(), 0);
            }
            space[start..start + buf.len()].copy_from_slice(buf);
        }
        0
    }

    fn get_balance(
        &mut self,
        address: &[u8; ADDRESS_LEN],
        result: &mut [u8; BALANCE_LEN],
    ) -> RawStatus {
        if let Some(status) = self.forced.take() {
            return status;
        }
        *result = self.balances.get(address).copied().unwrap_or([0; BALANCE_LEN]);
        0
    }

    fn get_self_balance(&mut self, result: &mut [u8; BALANCE_LEN]) -> RawStatus {
        if let Some(status) = self.forced.take() {
            return status;
        }
        *result = self.self_balance;
        0
    }

    fn call(&mut self, request: &[u8], result_fd: &mut u32) -> RawStatus {
        if let Some(status) = self.forced.take() {
            return status;
        }
        self.requests.push(request.to_vec());
        *result_fd = self.next_fd;
        self.next_fd = self.next_fd.wrapping_add(1);
        0
    }

    fn resolve_symbol(&mut self, lib_name: &[u8], sym_name: &[u8]) -> *mut c_void {
        self.lookups.push((lib_name.to_vec(), sym_name.to_vec()));
        match self.symbols.get(&(lib_name.to_vec(), sym_name.to_vec())) {
            Some(&addr) => addr as *mut c_void,
            None => core::ptr::null_mut(),
        }
    }
}
