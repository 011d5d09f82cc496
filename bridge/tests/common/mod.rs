//! Shared test helpers for integration tests.
//!
//! Provides slot/address builders and pre-seeded bridge and resolver
//! factories over [`MockHost`].

#![allow(dead_code)]

use gangway_abi::{ADDRESS_LEN, BALANCE_LEN, SLOT_LEN};
use gangway_bridge::mock::MockHost;
use gangway_bridge::{Bridge, Resolver};

/// A slot identifier filled with one byte.
pub fn slot(fill: u8) -> [u8; SLOT_LEN] {
    [fill; SLOT_LEN]
}

/// An address filled with one byte.
pub fn address(fill: u8) -> [u8; ADDRESS_LEN] {
    [fill; ADDRESS_LEN]
}

/// A balance buffer holding `value` in little-endian order.
pub fn le_balance(value: u64) -> [u8; BALANCE_LEN] {
    let mut raw = [0u8; BALANCE_LEN];
    raw[..8].copy_from_slice(&value.to_le_bytes());
    raw
}

/// A bridge over a fresh empty host.
pub fn bridge() -> Bridge<MockHost> {
    Bridge::new(MockHost::new())
}

/// A resolver over a fresh empty host.
pub fn resolver() -> Resolver<MockHost> {
    Resolver::new(MockHost::new())
}
