// Copyright 2025 Irreducible Inc.
//! Hosts error definitions for the arithmetic engine.

/// Arithmetic error.
///
/// Overflow is not an error: out-of-range results wrap and are reported through the
/// flag carried by each `overflowing_*` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
	/// The divisor passed to a division routine was zero.
	#[error("division by zero")]
	DivideByZero,
}
