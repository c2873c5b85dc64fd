// Copyright 2025 Irreducible Inc.
//! [`FixedInt`] related definitions.

use std::fmt;

use bytenum_utils::serialization::{DeserializeBytes, SerializationError, SerializeBytes};
use bytes::{Buf, BufMut};

/// Width of [`FixedInt`] in bytes.
pub const WIDTH: usize = 8;

/// [`FixedInt`] is a 64-bit integer stored as 8 little-endian bytes: byte `i` holds
/// bits `[8i, 8i + 8)` of the value. Every 8-byte pattern is a valid value.
///
/// The same bit pattern serves two interpretations. The default operation family
/// treats it as unsigned; the `signed_*` family treats it as two's-complement
/// signed. Nothing in the representation records which interpretation is in use.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedInt(pub [u8; WIDTH]);

impl FixedInt {
	/// All zero bit pattern, zero, nil, null.
	pub const ZERO: FixedInt = FixedInt([0x00; WIDTH]);
	/// 1.
	pub const ONE: FixedInt = FixedInt([0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
	/// All bits set to one; the largest unsigned value.
	pub const MAX: FixedInt = FixedInt([0xFF; WIDTH]);
	/// Only the sign bit (bit 63) set.
	///
	/// Under the signed interpretation this is the most negative value, `-2^63`.
	pub const SIGN_BIT: FixedInt = FixedInt([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80]);
}

impl fmt::Debug for FixedInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "FixedInt({:#018x})", self.as_u64())
	}
}

impl FixedInt {
	/// Creates a new `FixedInt` from 8 little-endian bytes.
	pub const fn from_le_bytes(bytes: [u8; WIDTH]) -> FixedInt {
		FixedInt(bytes)
	}

	/// Returns the little-endian byte representation.
	pub const fn to_le_bytes(self) -> [u8; WIDTH] {
		self.0
	}

	/// Creates a new `FixedInt` from a 64-bit unsigned integer.
	pub const fn from_u64(value: u64) -> FixedInt {
		FixedInt(value.to_le_bytes())
	}

	/// Returns the value as a 64-bit unsigned integer.
	pub const fn as_u64(self) -> u64 {
		u64::from_le_bytes(self.0)
	}

	/// Creates a new `FixedInt` from a 32-bit unsigned integer.
	///
	/// The value lands in bytes 0..4; bytes 4..8 are zero.
	pub fn from_u32(value: u32) -> FixedInt {
		let mut bytes = [0x00; WIDTH];
		bytes[..4].copy_from_slice(&value.to_le_bytes());
		FixedInt(bytes)
	}

	/// Returns the low 32 bits as an unsigned integer.
	///
	/// Values that do not fit in 32 bits are truncated; checking the range is the
	/// caller's responsibility.
	pub fn to_u32(self) -> u32 {
		let mut low = [0u8; 4];
		low.copy_from_slice(&self.0[..4]);
		u32::from_le_bytes(low)
	}

	/// Creates a new `FixedInt` from a 32-bit signed integer, sign-extending into
	/// bytes 4..8.
	pub fn from_i32(value: i32) -> FixedInt {
		let mut bytes = if value < 0 { [0xFF; WIDTH] } else { [0x00; WIDTH] };
		bytes[..4].copy_from_slice(&value.to_le_bytes());
		FixedInt(bytes)
	}

	/// Returns the low 32 bits as a signed integer.
	///
	/// Values outside the `i32` range are truncated; checking the range is the
	/// caller's responsibility.
	pub fn to_i32(self) -> i32 {
		let mut low = [0u8; 4];
		low.copy_from_slice(&self.0[..4]);
		i32::from_le_bytes(low)
	}

	/// Tests whether the value is zero.
	pub fn is_zero(self) -> bool {
		self == Self::ZERO
	}

	/// Tests whether the sign bit (bit 7 of byte 7) is set.
	///
	/// Under the signed interpretation a set sign bit means the value is negative.
	pub const fn is_negative(self) -> bool {
		self.0[WIDTH - 1] & 0x80 != 0
	}

	/// Reads bit `n`, with bit 0 the least significant.
	pub(crate) fn bit(self, n: u32) -> bool {
		debug_assert!(n < 64, "bit index out of range");
		self.0[(n / 8) as usize] >> (n % 8) & 1 != 0
	}

	/// Sets bit `n` to one, with bit 0 the least significant.
	pub(crate) fn set_bit(&mut self, n: u32) {
		debug_assert!(n < 64, "bit index out of range");
		self.0[(n / 8) as usize] |= 1 << (n % 8);
	}
}

impl SerializeBytes for FixedInt {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		// Exactly the 8 little-endian bytes; a persisted value round-trips bit for bit.
		self.0.serialize(write_buf)
	}
}

impl DeserializeBytes for FixedInt {
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized,
	{
		Ok(FixedInt(<[u8; WIDTH]>::deserialize(read_buf)?))
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_constants() {
		assert_eq!(FixedInt::ZERO.as_u64(), 0);
		assert_eq!(FixedInt::ONE.as_u64(), 1);
		assert_eq!(FixedInt::MAX.as_u64(), u64::MAX);
		assert_eq!(FixedInt::SIGN_BIT.as_u64(), 0x8000000000000000);
		assert_eq!(FixedInt::default(), FixedInt::ZERO);
	}

	#[test]
	fn test_from_u32_places_low_bytes() {
		let x = FixedInt::from_u32(0xDEADBEEF);
		assert_eq!(x.0, [0xEF, 0xBE, 0xAD, 0xDE, 0x00, 0x00, 0x00, 0x00]);
		assert_eq!(x.to_u32(), 0xDEADBEEF);
	}

	#[test]
	fn test_to_u32_truncates_high_bytes() {
		let x = FixedInt::from_u64(0x0123456789ABCDEF);
		assert_eq!(x.to_u32(), 0x89ABCDEF);
	}

	#[test]
	fn test_from_i32_sign_extends() {
		assert_eq!(FixedInt::from_i32(-1), FixedInt::MAX);
		assert_eq!(FixedInt::from_i32(-5).as_u64(), (-5i64) as u64);
		assert_eq!(FixedInt::from_i32(i32::MIN).as_u64(), (i32::MIN as i64) as u64);
		assert_eq!(FixedInt::from_i32(7).as_u64(), 7);
	}

	#[test]
	fn test_to_i32_uses_every_low_byte() {
		// Byte 0 must participate in the reassembled value.
		assert_eq!(FixedInt::from_i32(-5).to_i32(), -5);
		assert_eq!(FixedInt::from_i32(0x01020304).to_i32(), 0x01020304);
		assert_eq!(FixedInt::from_u32(0x000000FF).to_i32(), 0xFF);
	}

	#[test]
	fn test_sign_bit_inspection() {
		assert!(!FixedInt::ZERO.is_negative());
		assert!(!FixedInt::ONE.is_negative());
		assert!(FixedInt::MAX.is_negative());
		assert!(FixedInt::SIGN_BIT.is_negative());
		assert!(!FixedInt::from_u64(0x7FFFFFFFFFFFFFFF).is_negative());
	}

	#[test]
	fn test_serialization_is_the_little_endian_image() {
		let x = FixedInt::from_u64(0x0123456789ABCDEF);
		let mut buf = Vec::new();
		x.serialize(&mut buf).unwrap();
		assert_eq!(buf.as_slice(), &x.to_le_bytes());

		let back = FixedInt::deserialize(buf.as_slice()).unwrap();
		assert_eq!(back, x);
	}

	#[test]
	fn test_deserialize_short_buffer_fails() {
		let buf = [0u8; 5];
		assert!(FixedInt::deserialize(buf.as_slice()).is_err());
	}

	proptest! {
		#[test]
		fn prop_u64_round_trip(val in any::<u64>()) {
			prop_assert_eq!(FixedInt::from_u64(val).as_u64(), val);
			prop_assert_eq!(FixedInt::from_le_bytes(val.to_le_bytes()).to_le_bytes(), val.to_le_bytes());
		}

		#[test]
		fn prop_i32_round_trip(val in any::<i32>()) {
			let x = FixedInt::from_i32(val);
			prop_assert_eq!(x.to_i32(), val);
			// Sign extension gives the same pattern as the native widening cast.
			prop_assert_eq!(x.as_u64(), (val as i64) as u64);
		}

		#[test]
		fn prop_u32_round_trip(val in any::<u32>()) {
			let x = FixedInt::from_u32(val);
			prop_assert_eq!(x.to_u32(), val);
			prop_assert_eq!(x.as_u64(), val as u64);
		}

		#[test]
		fn prop_is_negative_matches_sign_bit(val in any::<u64>()) {
			prop_assert_eq!(FixedInt::from_u64(val).is_negative(), (val as i64) < 0);
		}

		#[test]
		fn prop_bit_accessor_matches_shift(val in any::<u64>(), n in 0u32..64) {
			prop_assert_eq!(FixedInt::from_u64(val).bit(n), val >> n & 1 != 0);
		}
	}
}
