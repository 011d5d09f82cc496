//! The syscall bridge.
//!
//! Every operation has the same shape: validate argument shapes, invoke
//! exactly one host import, translate the status, return the value or the
//! structured failure. Buffers are borrowed from the caller for the duration
//! of the call and never retained; release happens on every exit path,
//! including early validation failures.

use gangway_abi::{
    balance::{decode_balance, Balance, BALANCE_LEN},
    host::{HostCalls, ADDRESS_LEN, SLOT_LEN},
    status,
};
use log::trace;

use crate::error::BridgeError;

/// Caller-facing syscall surface over a [`HostCalls`] implementation.
pub struct Bridge<H> {
    host: H,
}

impl<H: HostCalls> Bridge<H> {
    /// Create a bridge over the given host.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Shared access to the underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the underlying host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the bridge and return the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Read `buf.len()` bytes from `slot` starting at byte offset `index`.
    ///
    /// The caller pre-sizes `buf` to the expected output length; the host
    /// fills it completely on success.
    pub fn storage_read(
        &mut self,
        slot: &[u8],
        index: u32,
        buf: &mut [u8],
    ) -> Result<(), BridgeError> {
        let slot = slot_id(slot)?;
        trace!("storage_read index={index} len={}", buf.len());
        status::check(self.host.storage_read(slot, index, buf))?;
        Ok(())
    }

    /// Read `len` bytes from `slot` at `index` into a fresh buffer.
    pub fn storage_read_to_vec(
        &mut self,
        slot: &[u8],
        index: u32,
        len: usize,
    ) -> Result<Vec<u8>, BridgeError> {
        let mut buf = vec![0u8; len];
        self.storage_read(slot, index, &mut buf)?;
        Ok(buf)
    }

    /// Write `data` into `slot` at byte offset `index`.
    ///
    /// `index` is signed: negative values are a host-side sentinel this
    /// layer forwards verbatim without interpretation.
    pub fn storage_write(
        &mut self,
        slot: &[u8],
        index: i32,
        data: &[u8],
    ) -> Result<(), BridgeError> {
        let slot = slot_id(slot)?;
        trace!("storage_write index={index} len={}", data.len());
        status::check(self.host.storage_write(slot, index, data))?;
        Ok(())
    }

    /// Query the balance of `address`.
    pub fn get_balance(&mut self, address: &[u8]) -> Result<Balance, BridgeError> {
        let address: &[u8; ADDRESS_LEN] = address
            .try_into()
            .map_err(|_| BridgeError::InvalidAddress(address.len()))?;
        let mut raw = [0u8; BALANCE_LEN];
        status::check(self.host.get_balance(address, &mut raw))?;
        Ok(decode_balance(&raw))
    }

    /// Query the executing module's own balance.
    pub fn get_self_balance(&mut self) -> Result<Balance, BridgeError> {
        let mut raw = [0u8; BALANCE_LEN];
        status::check(self.host.get_self_balance(&mut raw))?;
        Ok(decode_balance(&raw))
    }

    /// Forward an opaque request payload to the host.
    ///
    /// On success the host hands back a file descriptor for the pending
    /// result. Neither the payload nor the descriptor is interpreted here.
    pub fn call(&mut self, request: &[u8]) -> Result<u32, BridgeError> {
        trace!("call len={}", request.len());
        let mut fd = 0u32;
        status::check(self.host.call(request, &mut fd))?;
        Ok(fd)
    }
}

/// Check a slot identifier's shape. The import signatures carry no slot
/// length, so a wrong-sized slot must never reach the host.
fn slot_id(slot: &[u8]) -> Result<&[u8; SLOT_LEN], BridgeError> {
    slot.try_into()
        .map_err(|_| BridgeError::InvalidSlot(slot.len()))
}
