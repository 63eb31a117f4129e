//! Floating point decoders.
//!
//! IEEE-754 values are recovered by reinterpreting their bit pattern, never by
//! decomposing sign, exponent and mantissa arithmetically. The bits are written
//! into a scratch region typed as integers and read back from the same region
//! typed as a float.
//!
//! Two strategies fill the scratch region:
//!
//! - `direct` writes whole integer words in little-endian layout. On a
//! little-endian host this is a plain move.
//!
//! - `shuffled` writes individual bytes, most significant first, and reads the
//! region as a big-endian float. On a big-endian host this is a plain move.
//!
//! Both produce bit-identical results on any host (including for NaN, signed
//! zero and infinities). The [`Reinterpret`] selector picks the cheaper of the
//! two once, from [`Endianness::NATIVE`].
//!
//! Each call fills a fresh scratch region on its own stack, so decoders may be
//! called concurrently without coordination.

use zerocopy::{
    Immutable, IntoBytes,
    byteorder::{big_endian, little_endian},
};

use crate::{bytes::Bytes, int64::Int64, integer::int32};

/// The byte order a host uses for its own integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// The byte order of the host, found by storing `1u32` and inspecting the
    /// first byte of its in-memory representation.
    pub const NATIVE: Self = if 1u32.to_ne_bytes()[0] == 1 {
        Self::Little
    } else {
        Self::Big
    };
}

/// A pair of float reinterpretation strategies.
#[derive(Debug, Clone, Copy)]
pub struct Reinterpret {
    float32: fn(i32) -> f32,
    float64: fn(Int64) -> f64,
}

impl Reinterpret {
    /// The strategies chosen for the host.
    pub const NATIVE: Self = Self::for_host(Endianness::NATIVE);

    /// Choose the strategies cheapest on a host of the given byte order.
    pub const fn for_host(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => Self {
                float32: float32_direct,
                float64: float64_direct,
            },
            Endianness::Big => Self {
                float32: float32_shuffled,
                float64: float64_shuffled,
            },
        }
    }

    #[inline]
    pub fn float32(&self, bits: i32) -> f32 {
        (self.float32)(bits)
    }

    #[inline]
    pub fn float64(&self, bits: Int64) -> f64 {
        (self.float64)(bits)
    }
}

/// Reinterpret a 32-bit pattern, as assembled by [`int32`], as a binary32
/// float.
#[inline]
pub fn float32(bits: i32) -> f32 {
    Reinterpret::NATIVE.float32(bits)
}

/// Reinterpret a 64-bit pattern held as a word pair as a binary64 float.
#[inline]
pub fn float64(bits: Int64) -> f64 {
    Reinterpret::NATIVE.float64(bits)
}

/// Decode a little-endian binary32 float at `position`.
#[inline]
pub fn float32_at<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<f32, B::Error> {
    Ok(float32(int32(bytes, position)?))
}

/// Decode a little-endian binary64 float at `position`.
#[inline]
pub fn float64_at<B: Bytes + ?Sized>(bytes: &B, position: usize) -> Result<f64, B::Error> {
    Ok(float64(Int64::decode(bytes, position)?))
}

/// Reinterpret by writing the pattern as a little-endian integer.
pub fn float32_direct(bits: i32) -> f32 {
    let scratch = little_endian::I32::new(bits);
    let view: little_endian::F32 = zerocopy::transmute!(scratch);

    view.get()
}

/// Reinterpret by writing the pattern byte-by-byte, most significant first.
pub fn float32_shuffled(bits: i32) -> f32 {
    let mut scratch = [0u8; 4];
    write_be(&mut scratch, bits as u32);
    let view: big_endian::F32 = zerocopy::transmute!(scratch);

    view.get()
}

/// Words of a binary64 pattern in little-endian memory order.
#[repr(C)]
#[derive(IntoBytes, Immutable)]
struct WordScratch {
    lo: little_endian::U32,
    hi: little_endian::U32,
}

/// Reinterpret by writing the words as little-endian integers.
pub fn float64_direct(bits: Int64) -> f64 {
    let scratch = WordScratch {
        lo: little_endian::U32::new(bits.lo()),
        hi: little_endian::U32::new(bits.hi()),
    };
    let view: little_endian::F64 = zerocopy::transmute!(scratch);

    view.get()
}

/// Reinterpret by writing the words byte-by-byte, most significant first.
pub fn float64_shuffled(bits: Int64) -> f64 {
    let mut scratch = [0u8; 8];
    let (hi, lo) = scratch.split_at_mut(4);
    write_be(hi, bits.hi());
    write_be(lo, bits.lo());
    let view: big_endian::F64 = zerocopy::transmute!(scratch);

    view.get()
}

/// Write a word into four bytes, most significant first.
#[inline]
fn write_be(r: &mut [u8], word: u32) {
    r[0] = (word >> 24) as u8;
    r[1] = (word >> 16) as u8;
    r[2] = (word >> 8) as u8;
    r[3] = word as u8;
}
