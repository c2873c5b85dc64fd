// Copyright 2025 Irreducible Inc.
//! Fixed-width 64-bit integer arithmetic over a little-endian byte buffer.
//!
//! The fundamental type is [`FixedInt`], an 8-byte little-endian integer that is
//! interpreted either as an unsigned value in `[0, 2^64 - 1]` or, by the `signed_*`
//! family of operations, as a two's-complement value in `[-2^63, 2^63 - 1]`. All
//! arithmetic is carried out byte by byte, so the engine works wherever native
//! machine-width arithmetic is unavailable or must stay auditable.
//!
//! Operations that can leave the representable range return the wrapped
//! (modulo `2^64`) value together with an overflow flag, in the manner of the
//! standard library's `overflowing_*` family. Division by zero is the only hard
//! failure and is reported as [`ArithError::DivideByZero`].

#![warn(missing_docs)]

mod addsub;
mod cmp;
mod div;
pub mod error;
pub mod fixed;
mod mul;
mod shift;
mod signed;

pub use error::ArithError;
pub use fixed::FixedInt;
