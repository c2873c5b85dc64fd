// Copyright 2025 Irreducible Inc.

use bytes::{Buf, BufMut};
use thiserror::Error;

/// Serialize data into a byte buffer.
///
/// All multi-byte values are written in little-endian order.
pub trait SerializeBytes {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError>;
}

/// Deserialize data from a byte buffer.
///
/// All multi-byte values are read in little-endian order.
pub trait DeserializeBytes {
	fn deserialize(read_buf: impl Buf) -> Result<Self, SerializationError>
	where
		Self: Sized;
}

#[derive(Error, Debug, Clone)]
pub enum SerializationError {
	#[error("Write buffer is full")]
	WriteBufferFull,
	#[error("Not enough data in read buffer to deserialize")]
	NotEnoughBytes,
}

impl<T: SerializeBytes + ?Sized> SerializeBytes for &T {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), SerializationError> {
		(**self).serialize(write_buf)
	}
}

pub(crate) fn assert_enough_space_for(
	write_buf: &impl BufMut,
	size: usize,
) -> Result<(), SerializationError> {
	if write_buf.remaining_mut() < size {
		return Err(SerializationError::WriteBufferFull);
	}
	Ok(())
}

pub(crate) fn assert_enough_data_for(
	read_buf: &impl Buf,
	size: usize,
) -> Result<(), SerializationError> {
	if read_buf.remaining() < size {
		return Err(SerializationError::NotEnoughBytes);
	}
	Ok(())
}

impl SerializeBytes for u8 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, size_of::<Self>())?;
		write_buf.put_u8(*self);
		Ok(())
	}
}

impl DeserializeBytes for u8 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError> {
		assert_enough_data_for(&read_buf, size_of::<Self>())?;
		Ok(read_buf.get_u8())
	}
}

impl SerializeBytes for u32 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, size_of::<Self>())?;
		write_buf.put_u32_le(*self);
		Ok(())
	}
}

impl DeserializeBytes for u32 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError> {
		assert_enough_data_for(&read_buf, size_of::<Self>())?;
		Ok(read_buf.get_u32_le())
	}
}

impl SerializeBytes for u64 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, size_of::<Self>())?;
		write_buf.put_u64_le(*self);
		Ok(())
	}
}

impl DeserializeBytes for u64 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError> {
		assert_enough_data_for(&read_buf, size_of::<Self>())?;
		Ok(read_buf.get_u64_le())
	}
}

impl<const N: usize> SerializeBytes for [u8; N] {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, N)?;
		write_buf.put_slice(self);
		Ok(())
	}
}

impl<const N: usize> DeserializeBytes for [u8; N] {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError> {
		assert_enough_data_for(&read_buf, N)?;
		let mut bytes = [0u8; N];
		read_buf.copy_to_slice(&mut bytes);
		Ok(bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_primitives_round_trip_little_endian() {
		let mut buf = Vec::new();
		0xA1u8.serialize(&mut buf).unwrap();
		0xDEADBEEFu32.serialize(&mut buf).unwrap();
		0x0123456789ABCDEFu64.serialize(&mut buf).unwrap();

		assert_eq!(buf[0], 0xA1);
		// Little-endian layout of the u32.
		assert_eq!(&buf[1..5], &[0xEF, 0xBE, 0xAD, 0xDE]);

		let mut read_buf = buf.as_slice();
		assert_eq!(u8::deserialize(&mut read_buf).unwrap(), 0xA1);
		assert_eq!(u32::deserialize(&mut read_buf).unwrap(), 0xDEADBEEF);
		assert_eq!(u64::deserialize(&mut read_buf).unwrap(), 0x0123456789ABCDEF);
	}

	#[test]
	fn test_deserialize_fails_on_short_buffer() {
		let buf = [0u8; 3];
		let result = u64::deserialize(buf.as_slice());
		assert!(matches!(result, Err(SerializationError::NotEnoughBytes)));
	}
}
