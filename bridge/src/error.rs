//! Bridge-level error types.

use gangway_abi::{HostStatus, ADDRESS_LEN, SLOT_LEN};

/// Failure surface of the syscall bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// A host import reported a nonzero status.
    #[error(transparent)]
    Host(#[from] HostStatus),

    /// Slot identifier was not exactly `SLOT_LEN` bytes.
    #[error("invalid slot size: {0}, expected {expected}", expected = SLOT_LEN)]
    InvalidSlot(usize),

    /// Address was not exactly `ADDRESS_LEN` bytes.
    #[error("invalid address size: {0}, expected {expected}", expected = ADDRESS_LEN)]
    InvalidAddress(usize),
}

/// Failure surface of the dynamic resolver.
///
/// Every variant also leaves a message in the resolver's last-error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolverError {
    /// Allocation failed while copying the library name.
    #[error("out of memory")]
    OutOfMemory,

    /// Null or stale library handle.
    #[error("invalid library handle")]
    InvalidHandle,
}
