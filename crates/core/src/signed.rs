// Copyright 2025 Irreducible Inc.
//! Two's-complement wrappers over the unsigned primitives.
//!
//! Every operation here dispatches on the sign bits of its operands and forwards to
//! the unsigned byte-wise routines, negating operands where the two's-complement
//! identities call for it. Results agree bit for bit with the corresponding native
//! `i64` operation, including the wrapped value under overflow.

use crate::{ArithError, FixedInt};

impl FixedInt {
	/// Two's-complement negation.
	///
	/// Zero is returned unchanged. A negative value is complemented then
	/// incremented (`-x = !x + 1`); a non-negative value is decremented then
	/// complemented (`-x = !(x - 1)`). The two forms are the same identity read in
	/// both directions, and composing them makes negation an involution.
	///
	/// The flag is true only for [`Self::SIGN_BIT`]: `2^63` has no two's-complement
	/// counterpart, so the value comes back unchanged, as with
	/// [`i64::overflowing_neg`].
	pub fn overflowing_neg(self) -> (FixedInt, bool) {
		if self.is_zero() {
			return (self, false);
		}
		let overflow = self == FixedInt::SIGN_BIT;

		let negated = if self.is_negative() {
			let mut bytes = self.0;
			for byte in &mut bytes {
				*byte = !*byte;
			}
			FixedInt(bytes).wrapping_add(FixedInt::ONE)
		} else {
			let mut bytes = self.wrapping_sub(FixedInt::ONE).0;
			for byte in &mut bytes {
				*byte = !*byte;
			}
			FixedInt(bytes)
		};
		(negated, overflow)
	}

	/// The unsigned magnitude of a signed value. `SIGN_BIT` maps to itself, which
	/// reads as `2^63` under the unsigned interpretation.
	fn magnitude(self) -> FixedInt {
		if self.is_negative() { self.overflowing_neg().0 } else { self }
	}

	/// Signed addition.
	///
	/// Two non-negative operands forward to the unsigned adder. Any other sign
	/// combination negates the right operand and forwards to the unsigned
	/// subtractor, since `a + b = a - (-b)`. The flag is true exactly when the true
	/// sum falls outside `[-2^63, 2^63 - 1]`: the operands share a sign and the
	/// result does not.
	pub fn overflowing_signed_add(self, rhs: FixedInt) -> (FixedInt, bool) {
		let sum = match (self.is_negative(), rhs.is_negative()) {
			(false, false) => self.wrapping_add(rhs),
			_ => self.wrapping_sub(rhs.overflowing_neg().0),
		};
		let overflow =
			self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative();
		(sum, overflow)
	}

	/// Signed subtraction.
	///
	/// A non-negative right operand forwards to the unsigned subtractor; a negative
	/// one is negated and forwarded to the unsigned adder, since `a - b = a + (-b)`.
	/// The flag is true exactly when the true difference falls outside
	/// `[-2^63, 2^63 - 1]`: the operand signs differ and the result's sign differs
	/// from the minuend's.
	pub fn overflowing_signed_sub(self, rhs: FixedInt) -> (FixedInt, bool) {
		let diff = if rhs.is_negative() {
			self.wrapping_add(rhs.overflowing_neg().0)
		} else {
			self.wrapping_sub(rhs)
		};
		let overflow =
			self.is_negative() != rhs.is_negative() && diff.is_negative() != self.is_negative();
		(diff, overflow)
	}

	/// Signed multiplication.
	///
	/// Both operands are normalized to their unsigned magnitudes, multiplied with
	/// the unsigned schoolbook routine, and the product is negated when exactly one
	/// operand was negative. The flag is true exactly when the true product falls
	/// outside `[-2^63, 2^63 - 1]`: the magnitude product overflowed 64 bits, or it
	/// reached the sign bit without being exactly `2^63` about to be negated.
	pub fn overflowing_signed_mul(self, rhs: FixedInt) -> (FixedInt, bool) {
		let negate = self.is_negative() != rhs.is_negative();
		let (product, mut overflow) = self.magnitude().overflowing_mul(rhs.magnitude());
		if product.is_negative() && !(negate && product == FixedInt::SIGN_BIT) {
			overflow = true;
		}
		let product = if negate { product.overflowing_neg().0 } else { product };
		(product, overflow)
	}

	/// Signed division, discarding the remainder. Truncates toward zero.
	///
	/// Both operands are normalized to their unsigned magnitudes and divided with
	/// the unsigned routine; the quotient is negated when the operand signs differ.
	/// The flag covers the one unrepresentable case, `-2^63 / -1`. A zero divisor
	/// fails with [`ArithError::DivideByZero`].
	pub fn signed_div(self, rhs: FixedInt) -> Result<(FixedInt, bool), ArithError> {
		let negate = self.is_negative() != rhs.is_negative();
		let (quotient, _) = self.magnitude().div_rem(rhs.magnitude())?;
		let overflow = quotient.is_negative() && !(negate && quotient == FixedInt::SIGN_BIT);
		let quotient = if negate { quotient.overflowing_neg().0 } else { quotient };
		Ok((quotient, overflow))
	}
}
