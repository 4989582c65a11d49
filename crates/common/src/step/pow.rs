//! Proof of work targets.
//!
//! A [`Target`] is the 256-bit threshold a block's proof-of-work hash must not
//! exceed; [`CompactTarget`] is the 32-bit "bits" encoding of it carried in
//! block headers. The encoding is a byte count (exponent) in the top byte and
//! the three most significant bytes (mantissa) below it. Bit 23 of the
//! mantissa is a sign bit inherited from the original big-number format, so
//! valid targets always keep it clear.

use bitcoin::{block::Header, hashes::Hash};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mantissa bits of a compact target.
const MANTISSA_MASK: u32 = 0x007f_ffff;
/// Sign bit of a compact target.
const SIGN_BIT: u32 = 0x0080_0000;

/// Errors returned when decoding a compact target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CompactTargetError {
    /// The sign bit is set on a non-zero mantissa.
    #[error("compact target {0:#010x} encodes a negative value")]
    Negative(u32),
    /// The encoded value does not fit in 256 bits.
    #[error("compact target {0:#010x} overflows 256 bits")]
    Overflow(u32),
}

/// Represents a target value expressed as an unsigned 256-bit integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(U256);

impl Target {
    /// Creates a new Target with the specified U256 value.
    pub const fn new(target: U256) -> Self {
        Target(target)
    }

    /// Creates a new `Target` from a big-endian hexadecimal string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        U256::from_str_radix(hex, 16).ok().map(Target)
    }

    /// Interprets a hash in internal byte order as a number.
    ///
    /// Hashes are little-endian numbers, which is why their usual hex display
    /// is byte-reversed.
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Self {
        Self(U256::from_little_endian(bytes))
    }

    /// Returns the big-endian byte representation.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        bytes
    }

    /// Returns the underlying integer.
    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// Whether `hash` (internal byte order) is at or below this target.
    pub fn is_met_by(&self, hash: &[u8; 32]) -> bool {
        Target::from_le_bytes(hash) <= *self
    }

    /// Decodes a compact target.
    ///
    /// Reproduces the exact value the encoding represents: mantissa bytes
    /// that fall below the unit position for exponents under 3 are dropped
    /// before the sign and overflow checks, so they can never make an
    /// encoding invalid.
    ///
    /// # Errors
    ///
    /// * [`CompactTargetError::Negative`] - the sign bit is set and the
    ///   remaining mantissa is non-zero
    /// * [`CompactTargetError::Overflow`] - the value needs more than 256 bits
    pub fn from_compact(compact: CompactTarget) -> Result<Self, CompactTargetError> {
        let n = compact.0;
        let size = n >> 24;
        let mut word = n & MANTISSA_MASK;
        if size <= 3 {
            #[allow(clippy::arithmetic_side_effects, reason = "size is at most 3")]
            let shift = 8 * (3 - size);
            word >>= shift;
        }

        if word == 0 {
            return Ok(Target(U256::zero()));
        }
        if n & SIGN_BIT != 0 {
            return Err(CompactTargetError::Negative(n));
        }
        if size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32) {
            return Err(CompactTargetError::Overflow(n));
        }

        #[allow(
            clippy::arithmetic_side_effects,
            reason = "size is at most 34 here, so the shift stays below 256 bits"
        )]
        let target = if size <= 3 {
            U256::from(word)
        } else {
            U256::from(word) << (8 * (size - 3))
        };

        Ok(Target(target))
    }

    /// Encodes this target in compact form.
    ///
    /// Precision below the three most significant bytes is discarded, so
    /// `from_compact(to_compact(t))` may be smaller than `t`. Decoding and
    /// re-encoding a compact value is lossless.
    pub fn to_compact(self) -> CompactTarget {
        if self.0.is_zero() {
            return CompactTarget(0);
        }

        #[allow(
            clippy::arithmetic_side_effects,
            clippy::cast_possible_truncation,
            reason = "a U256 has at most 256 bits, so size is at most 32"
        )]
        let compact = {
            let mut size = ((self.0.bits() + 7) / 8) as u32;
            let mut mantissa = if size <= 3 {
                self.0.low_u32() << (8 * (3 - size))
            } else {
                (self.0 >> (8 * (size - 3))).low_u32()
            };

            // Keep the sign bit clear by moving one byte into the exponent.
            if mantissa & SIGN_BIT != 0 {
                mantissa >>= 8;
                size += 1;
            }
            (size << 24) | mantissa
        };

        CompactTarget(compact)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

impl Serialize for Target {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The 32-bit compact encoding of a [`Target`], as stored in block headers.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CompactTarget(u32);

impl CompactTarget {
    /// Creates a compact target from its consensus value.
    pub const fn from_consensus(bits: u32) -> Self {
        CompactTarget(bits)
    }

    /// Returns the consensus value.
    pub const fn to_consensus(self) -> u32 {
        self.0
    }
}

impl std::fmt::LowerHex for CompactTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<CompactTarget> for bitcoin::CompactTarget {
    fn from(bits: CompactTarget) -> Self {
        bitcoin::CompactTarget::from_consensus(bits.0)
    }
}

impl From<bitcoin::CompactTarget> for CompactTarget {
    fn from(bits: bitcoin::CompactTarget) -> Self {
        CompactTarget(bits.to_consensus())
    }
}

/// The hash a header's proof of work is measured with.
///
/// Block identity always uses the double SHA-256 header hash; the proof of
/// work hash is compared against the target and may be a different function
/// over the same 80 header bytes.
pub trait PowHash {
    /// Returns the proof-of-work hash of `header` in internal byte order.
    fn pow_hash(&self, header: &Header) -> [u8; 32];
}

impl<P: PowHash + ?Sized> PowHash for &P {
    fn pow_hash(&self, header: &Header) -> [u8; 32] {
        (**self).pow_hash(header)
    }
}

/// Double SHA-256 proof of work, identical to the block identity hash.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256dPow;

impl PowHash for Sha256dPow {
    fn pow_hash(&self, header: &Header) -> [u8; 32] {
        header.block_hash().to_byte_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bits: u32) -> Result<Target, CompactTargetError> {
        Target::from_compact(CompactTarget::from_consensus(bits))
    }

    #[test]
    fn test_zero_target() {
        assert_eq!(Target::new(U256::zero()).to_compact().to_consensus(), 0);
        assert_eq!(decode(0).unwrap(), Target::new(U256::zero()));
        // A zero mantissa decodes to zero whatever the exponent or sign bit.
        assert_eq!(decode(0x0180_0000).unwrap(), Target::new(U256::zero()));
        assert_eq!(decode(0xff00_0000).unwrap(), Target::new(U256::zero()));
    }

    #[test]
    fn test_pow_limit_encodings() {
        let main_limit = Target::new(U256::max_value() >> 16u32);
        assert_eq!(main_limit.to_compact().to_consensus(), 0x1f00ffff);

        let regtest_limit = Target::new(U256::max_value() >> 1u32);
        assert_eq!(regtest_limit.to_compact().to_consensus(), 0x207fffff);
    }

    #[test]
    fn test_genesis_bits_round_trip() {
        for bits in [0x1f00ffffu32, 0x207fffff, 0x1d00ffff] {
            let target = decode(bits).unwrap();
            let compact = target.to_compact();
            assert_eq!(compact.to_consensus(), bits);
            assert_eq!(Target::from_compact(compact).unwrap(), target);
        }
    }

    #[test]
    fn test_decode_exact_values() {
        assert_eq!(
            decode(0x1f00ffff).unwrap(),
            Target::from_hex("0000ffff00000000000000000000000000000000000000000000000000000000")
                .unwrap()
        );
        assert_eq!(
            decode(0x207fffff).unwrap(),
            Target::from_hex("7fffff0000000000000000000000000000000000000000000000000000000000")
                .unwrap()
        );
        assert_eq!(
            decode(0x1d00ffff).unwrap(),
            Target::from_hex("00000000ffff0000000000000000000000000000000000000000000000000000")
                .unwrap()
        );
        assert_eq!(decode(0x05009234).unwrap(), Target::new(U256::from(0x9234_0000u64)));
        assert_eq!(decode(0x03123456).unwrap(), Target::new(U256::from(0x12_3456u64)));
    }

    #[test]
    fn test_decode_drops_bytes_below_unit() {
        assert_eq!(decode(0x01123456).unwrap(), Target::new(U256::from(0x12u64)));
        assert_eq!(decode(0x02123456).unwrap(), Target::new(U256::from(0x1234u64)));
        assert_eq!(decode(0x01003456).unwrap(), Target::new(U256::zero()));
        // A sign bit on bytes that are shifted out does not make the value
        // negative.
        assert_eq!(decode(0x01803456).unwrap(), Target::new(U256::zero()));
        assert_eq!(decode(0x02800056).unwrap(), Target::new(U256::zero()));
    }

    #[test]
    fn test_decode_rejects_negative() {
        assert_eq!(decode(0x01fedcba), Err(CompactTargetError::Negative(0x01fedcba)));
        assert_eq!(decode(0x04923456), Err(CompactTargetError::Negative(0x04923456)));
    }

    #[test]
    fn test_decode_rejects_overflow() {
        assert_eq!(decode(0xff123456), Err(CompactTargetError::Overflow(0xff123456)));
        assert_eq!(decode(0x21010000), Err(CompactTargetError::Overflow(0x21010000)));
        // Small mantissas may use the extra exponent range.
        assert!(decode(0x22000001).is_ok());
        assert!(decode(0x21000100).is_ok());
    }

    #[test]
    fn test_small_targets() {
        assert_eq!(Target::new(U256::from(0x12)).to_compact().to_consensus(), 0x01120000);
        assert_eq!(Target::new(U256::from(0x1234)).to_compact().to_consensus(), 0x02123400);
        assert_eq!(Target::new(U256::from(0x123456)).to_compact().to_consensus(), 0x03123456);
    }

    #[test]
    fn test_normalization() {
        // Exactly at the sign bit threshold.
        let compact = Target::new(U256::from(0x800000)).to_compact();
        assert_eq!(compact.to_consensus(), 0x04008000);
        assert_eq!(
            Target::from_compact(compact).unwrap(),
            Target::new(U256::from(0x800000))
        );

        let compact = Target::new(U256::from(0x7fffff)).to_compact();
        assert_eq!(compact.to_consensus(), 0x037fffff);
    }

    #[test]
    fn test_to_compact_truncates_precision() {
        let target = Target::new(U256::from(0x1234_5678u64));
        let compact = target.to_compact();
        assert_eq!(compact.to_consensus(), 0x04123456);
        assert_eq!(
            Target::from_compact(compact).unwrap(),
            Target::new(U256::from(0x1234_5600u64))
        );
    }

    #[test]
    fn test_hash_comparison_uses_little_endian() {
        let target = decode(0x207fffff).unwrap();

        let mut low = [0xffu8; 32];
        low[31] = 0x7f;
        assert!(!target.is_met_by(&low));

        let mut lower = [0u8; 32];
        lower[31] = 0x7f;
        assert!(target.is_met_by(&lower));

        let mut high = [0u8; 32];
        high[31] = 0x80;
        assert!(!target.is_met_by(&high));
    }

    #[test]
    fn test_display_is_big_endian_hex() {
        let target = decode(0x1f00ffff).unwrap();
        assert_eq!(
            target.to_string(),
            "0000ffff00000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            serde_json::to_string(&target).unwrap(),
            "\"0000ffff00000000000000000000000000000000000000000000000000000000\""
        );
    }
}
