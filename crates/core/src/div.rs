// Copyright 2025 Irreducible Inc.
//! Long division over [`FixedInt`].

use crate::{ArithError, FixedInt};

impl FixedInt {
	/// Unsigned division with remainder.
	///
	/// Binary long division: 64 iterations from the most significant dividend bit
	/// down, each shifting the partial remainder left one bit, injecting the next
	/// dividend bit, and compare-subtracting the divisor. The remainder never grows
	/// past the divisor, so every step is bounded.
	///
	/// A zero divisor fails with [`ArithError::DivideByZero`] before any loop runs.
	pub fn div_rem(self, rhs: FixedInt) -> Result<(FixedInt, FixedInt), ArithError> {
		if rhs.is_zero() {
			return Err(ArithError::DivideByZero);
		}
		if self < rhs {
			return Ok((FixedInt::ZERO, self));
		}
		if self == rhs {
			return Ok((FixedInt::ONE, FixedInt::ZERO));
		}

		let mut quotient = FixedInt::ZERO;
		let mut remainder = FixedInt::ZERO;
		for bit in (0..64).rev() {
			remainder = remainder.shift_left(1);
			if self.bit(bit) {
				remainder.set_bit(0);
			}
			if remainder >= rhs {
				remainder = remainder.wrapping_sub(rhs);
				quotient.set_bit(bit);
			}
		}
		Ok((quotient, remainder))
	}

	/// Unsigned division, discarding the remainder.
	pub fn div(self, rhs: FixedInt) -> Result<FixedInt, ArithError> {
		let (quotient, _) = self.div_rem(rhs)?;
		Ok(quotient)
	}
}
