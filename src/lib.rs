#![no_std]

//! Endian-correct decoding of fixed-width little-endian values.
//!
//! Given a byte sequence and a byte offset, the functions in this crate
//! interpret single bits, signed and unsigned 8, 16 and 32-bit integers, and
//! IEEE-754 binary32 and binary64 floats, returning them as native values
//! regardless of the host's byte order.
//!
//! Bytes are read through the [`Bytes`] accessor trait. Bounds are the
//! accessor's concern: slices report [`OutOfBounds`], while [`Trusted`]
//! panics and never returns an error.
//!
//! ```
//! let data = [0x18, 0x4c, 0x1f, 0xd3];
//!
//! assert_eq!(read_data::int32(&data, 0)?, -752923624);
//! assert_eq!(read_data::uint32(&data, 0)?, 3542043672);
//! ```
//!
//! Floats are reinterpreted from integer bit patterns without arithmetic.
//! See the [`float`] module for the two equivalent strategies and how one is
//! selected for the host.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: implement [`Bytes`] for `Vec<u8>` (default).

pub mod bytes;
pub mod float;
pub mod int64;
pub mod integer;

pub use bytes::{Bytes, OutOfBounds, Trusted};
pub use float::{Endianness, Reinterpret, float32, float32_at, float64, float64_at};
pub use int64::Int64;
pub use integer::{bit, int8, int16, int32, uint8, uint16, uint32};
