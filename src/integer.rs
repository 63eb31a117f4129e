//! Bit and integer decoders.
//!
//! Multi-byte values are little-endian: the byte at `position` is the least
//! significant. A decoder of width `N` reads exactly the bytes
//! `position..position + N`, in ascending order.

use crate::bytes::Bytes;

/// Mask a single bit of the byte at `position`, least-significant first.
///
/// The result is `0` or the mask itself (`0x80` for bit 7), not a normalized
/// `0`/`1`. Compare against zero to get a boolean.
///
/// `bit_index` must be in `0..8`.
#[inline]
pub fn bit<B: Bytes + ?Sized>(bytes: &B, position: usize, bit_index: u8) -> Result<u8, B::Error> {
    debug_assert!(bit_index < 8, "bit index {bit_index} out of range");

    Ok(bytes.get(position)? & (0x01 << bit_index))
}

/// Decode a signed byte.
#[inline]
pub fn int8<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<i8, B::Error> {
    // Fill in the leading 1's of negative values.
    let value = ((bytes.get(position)? as i32) << 24) >> 24;

    Ok(value as i8)
}

/// Decode a little-endian signed 16-bit integer.
#[inline]
pub fn int16<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<i16, B::Error> {
    let mut value = bytes.get(position)? as i32;
    value |= ((bytes.get(position + 1)? as i32) << 24) >> 16;

    Ok(value as i16)
}

/// Decode a little-endian signed 32-bit integer.
#[inline]
pub fn int32<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<i32, B::Error> {
    let mut value = bytes.get(position)? as i32;
    value |= (bytes.get(position + 1)? as i32) << 8;
    value |= (bytes.get(position + 2)? as i32) << 16;
    // Bits shifted past the sign wrap, producing the two's-complement value.
    value |= (bytes.get(position + 3)? as i32) << 24;

    Ok(value)
}

/// Decode an unsigned byte.
#[inline]
pub fn uint8<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<u8, B::Error> {
    bytes.get(position)
}

/// Decode a little-endian unsigned 16-bit integer.
#[inline]
pub fn uint16<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<u16, B::Error> {
    let mut value = bytes.get(position)? as u16;
    value |= (bytes.get(position + 1)? as u16) << 8;

    Ok(value)
}

/// Decode a little-endian unsigned 32-bit integer.
///
/// The bit pattern is that of [`int32`], reinterpreted as unsigned.
#[inline]
pub fn uint32<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<u32, B::Error> {
    Ok(int32(bytes, position)? as u32)
}
