//! Representation of 64-bit values as a pair of 32-bit words.

use crate::{bytes::Bytes, integer::uint32};

/// A 64-bit bit pattern held as two 32-bit words.
///
/// Word 0 holds the more significant half and word 1 the less significant
/// half. Each word is already in native order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Int64(pub [u32; 2]);

impl Int64 {
    pub const fn new(hi: u32, lo: u32) -> Self {
        Self([hi, lo])
    }

    /// The more significant word.
    pub const fn hi(self) -> u32 {
        self.0[0]
    }

    /// The less significant word.
    pub const fn lo(self) -> u32 {
        self.0[1]
    }

    /// Decode eight little-endian bytes at `position` into a word pair.
    pub fn decode<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<Self, B::Error> {
        let lo = uint32(bytes, position)?;
        let hi = uint32(bytes, position + 4)?;

        Ok(Self::new(hi, lo))
    }
}

impl From<[u32; 2]> for Int64 {
    fn from(words: [u32; 2]) -> Self {
        Self(words)
    }
}
