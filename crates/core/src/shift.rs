// Copyright 2025 Irreducible Inc.
//! Logical left shift over [`FixedInt`].

use std::ops::Shl;

use crate::{FixedInt, fixed::WIDTH};

impl FixedInt {
	/// Logical left shift by `amount` bits.
	///
	/// Works in two passes: a whole-byte move of `amount / 8` positions with the
	/// vacated low bytes zero-filled, then a residual `amount % 8` bit shift
	/// propagating a one-byte carry upward. Amounts of 64 or more clear the value.
	pub fn shift_left(self, amount: u32) -> FixedInt {
		if amount == 0 {
			return self;
		}
		let jump = (amount / 8) as usize;
		if jump >= WIDTH {
			return FixedInt::ZERO;
		}

		let mut bytes = [0x00; WIDTH];
		bytes[jump..].copy_from_slice(&self.0[..WIDTH - jump]);

		let amount = amount % 8;
		if amount == 0 {
			return FixedInt(bytes);
		}

		let mut carry = 0u8;
		for byte in &mut bytes {
			let shifted = *byte << amount | carry;
			carry = *byte >> (8 - amount);
			*byte = shifted;
		}
		FixedInt(bytes)
	}
}

impl Shl<u32> for FixedInt {
	type Output = Self;

	fn shl(self, rhs: u32) -> Self::Output {
		self.shift_left(rhs)
	}
}
