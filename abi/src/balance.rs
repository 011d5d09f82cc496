//! Balance decoding.
//!
//! Balances cross the host boundary as exactly 32 bytes in little-endian
//! order. This module's only job is byte-order interpretation into the
//! caller's native big-integer representation; arithmetic and formatting are
//! the caller's business.

use num_bigint::BigUint;

/// Byte length of a balance value on the host boundary.
pub const BALANCE_LEN: usize = 32;

/// A 256-bit unsigned balance.
pub type Balance = BigUint;

/// Decode a 32-byte little-endian host buffer into a [`Balance`].
pub fn decode_balance(raw: &[u8; BALANCE_LEN]) -> Balance {
    BigUint::from_bytes_le(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_zero() {
        assert_eq!(decode_balance(&[0; BALANCE_LEN]), Balance::from(0u8));
    }

    #[test]
    fn test_decode_one() {
        let mut raw = [0u8; BALANCE_LEN];
        raw[0] = 1;
        assert_eq!(decode_balance(&raw), Balance::from(1u8));
    }

    #[test]
    fn test_decode_max() {
        let raw = [0xFF; BALANCE_LEN];
        let expected = (Balance::from(1u8) << 256usize) - Balance::from(1u8);
        assert_eq!(decode_balance(&raw), expected);
    }

    #[test]
    fn test_decode_is_little_endian() {
        // Highest byte contributes 2^248
        let mut raw = [0u8; BALANCE_LEN];
        raw[BALANCE_LEN - 1] = 1;
        assert_eq!(decode_balance(&raw), Balance::from(1u8) << 248usize);
    }
}
