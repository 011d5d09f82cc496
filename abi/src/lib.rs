//! `gangway-abi` — the boundary contract between a sandboxed module and its host.
//!
//! The execution environment services the module through a narrow import
//! table: storage access, balance queries, an opaque outbound call, and
//! host-backed symbol lookup. Every import returns a bare `u32` status and
//! writes into pre-sized buffers. This crate defines that contract:
//!
//! - [`StatusCode`] — total translation of raw host statuses
//! - [`HostStatus`] — structured failure carrying `(code, name)`
//! - [`HostCalls`] — one-to-one trait mirror of the import table
//! - [`Balance`] decoding — 32 little-endian bytes to a big integer
//! - Fixed boundary constants ([`SLOT_LEN`], [`ADDRESS_LEN`], [`BALANCE_LEN`])
//!
//! The bridge and resolver live in `gangway-bridge`; the WASM-backed
//! [`HostCalls`] implementation lives in `gangway-guest`.

pub mod balance;
pub mod host;
pub mod status;

// Re-export commonly used items at the crate root.
pub use balance::{decode_balance, Balance, BALANCE_LEN};
pub use host::{HostCalls, ADDRESS_LEN, SLOT_LEN};
pub use status::{HostStatus, RawStatus, StatusCode};
