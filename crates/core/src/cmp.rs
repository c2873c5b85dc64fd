// Copyright 2025 Irreducible Inc.
//! Unsigned and signed orderings over [`FixedInt`].

use std::cmp::Ordering;

use crate::{FixedInt, fixed::WIDTH};

impl Ord for FixedInt {
	/// Unsigned ordering: bytes are compared from the most significant (index 7)
	/// down to the least significant, and the first differing byte decides.
	fn cmp(&self, other: &Self) -> Ordering {
		for i in (0..WIDTH).rev() {
			match self.0[i].cmp(&other.0[i]) {
				Ordering::Equal => continue,
				decided => return decided,
			}
		}
		Ordering::Equal
	}
}

impl PartialOrd for FixedInt {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl FixedInt {
	/// Two's-complement ordering.
	///
	/// Identical bit patterns are equal under either interpretation. A negative
	/// value orders below a non-negative one. When the signs agree the unsigned
	/// byte ordering already agrees with the signed ordering, so it is used
	/// directly.
	pub fn signed_cmp(&self, other: &Self) -> Ordering {
		match (self.is_negative(), other.is_negative()) {
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			_ => self.cmp(other),
		}
	}
}
