//! Accessors for reading single bytes from a buffer.

use core::convert::Infallible;

use thiserror::Error;

/// A readable sequence of bytes, addressed by a zero-based offset.
///
/// Decoders never retain a reference beyond a single call, and never write.
/// Whatever error the accessor reports is passed through to the decoder's
/// caller unchanged.
pub trait Bytes {
    /// The error reported for an unreadable position.
    type Error;

    /// Read the byte at `position`.
    fn get(&self, position: usize) -> Result<u8, Self::Error>;
}

/// A position outside a slice was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Position {position} is out of bounds for a slice of {len} bytes.")]
pub struct OutOfBounds {
    pub position: usize,
    pub len: usize,
}

impl Bytes for [u8] {
    type Error = OutOfBounds;

    #[inline]
    fn get(&self, position: usize) -> Result<u8, OutOfBounds> {
        if position < self.len() {
            Ok(self[position])
        } else {
            Err(OutOfBounds {
                position,
                len: self.len(),
            })
        }
    }
}

impl<const N: usize> Bytes for [u8; N] {
    type Error = OutOfBounds;

    #[inline]
    fn get(&self, position: usize) -> Result<u8, OutOfBounds> {
        Bytes::get(self.as_slice(), position)
    }
}

impl<B: Bytes + ?Sized> Bytes for &B {
    type Error = B::Error;

    #[inline]
    fn get(&self, position: usize) -> Result<u8, B::Error> {
        B::get(*self, position)
    }
}

#[cfg(feature = "std")]
extern crate std;

/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
impl Bytes for std::vec::Vec<u8> {
    type Error = OutOfBounds;

    #[inline]
    fn get(&self, position: usize) -> Result<u8, OutOfBounds> {
        Bytes::get(self.as_slice(), position)
    }
}

/// An accessor for callers that guarantee every position they read is valid.
///
/// Reading out of range panics. Since the error type is uninhabited, results
/// can be destructured directly:
///
/// ```
/// let Ok(value) = read_data::uint16(&Trusted(&[0x3f, 0x87]), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Trusted<'a>(pub &'a [u8]);

impl Bytes for Trusted<'_> {
    type Error = Infallible;

    #[inline]
    fn get(&self, position: usize) -> Result<u8, Infallible> {
        Ok(self.0[position])
    }
}
