//! Defines the traits, cursors and errors used to encode and decode OpenFlow 1.3 experimenter
//! records.
//!
//! # Overview
//!
//! Every record on the wire is a sequence of big-endian scalars laid out at fixed offsets, with
//! zero-filled reserved regions in between, optionally followed by a count-free list of
//! fixed-size elements that runs to the end of the payload.
//!
//! - [`GetSize`] reports the encoded size of a value; [`Fixed`] marks records whose size is a
//!   compile-time constant.
//! - [`Encodable`] writes a value through a [`Writer`], which zero-fills padding.
//! - [`Decodable`] reads a value through a [`Cursor`], which checks bounds before every read
//!   and skips padding without interpreting it.
//! - [`seq`] holds the count-free list codec.
//!
//! # Encoding & Decoding
//!
//! - **to_bytes**: Encodes a record into a freshly allocated byte vector.
//! - **to_writer**: Encodes a record into a caller-provided byte slice.
//! - **from_bytes**: Decodes a record from a byte slice.
//!
//! # Error Handling
//!
//! Decoding never reads out of bounds: a short buffer is reported as
//! [`Error::TruncatedInput`] carrying the number of bytes required and the number available.

mod codec;
pub mod seq;

pub use crate::codec::{
    decodable::{Cursor, Decodable},
    encodable::{Encodable, Writer},
    Fixed, GetSize,
};

use std::fmt;

/// Encodes the record into a byte vector of exactly `src.get_size()` bytes.
#[allow(clippy::wrong_self_convention)]
pub fn to_bytes<T: Encodable>(src: &T) -> Result<Vec<u8>, Error> {
    let mut result = vec![0_u8; src.get_size()];
    src.to_bytes(&mut result)?;
    Ok(result)
}

/// Encodes the record to the provided byte slice, returning the number of bytes written.
#[allow(clippy::wrong_self_convention)]
pub fn to_writer<T: Encodable>(src: &T, dst: &mut [u8]) -> Result<usize, Error> {
    src.to_bytes(dst)
}

/// Decodes a record from the provided byte slice.
pub fn from_bytes<T: Decodable>(data: &[u8]) -> Result<T, Error> {
    T::from_bytes(data)
}

/// Errors raised while encoding or decoding a record.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The buffer is shorter than the current decode step requires. Nothing past the end of
    /// the buffer was read.
    TruncatedInput {
        /// Bytes needed, counted from the start of the buffer.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// The destination slice is too small for the encoded record. Params: (required, available).
    WriteError(usize, usize),

    /// An encoded length does not fit in the 16-bit length field that has to carry it.
    LengthOverflow(usize),

    /// A self-reported length field is smaller than the fixed part of its record.
    BadLength {
        /// Length carried on the wire.
        declared: usize,
        /// Smallest length the record can have.
        minimum: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            TruncatedInput { expected, actual } => write!(
                f,
                "Truncated input: expected at least `{}` bytes, got `{}`",
                expected, actual
            ),
            WriteError(expected, actual) => write!(
                f,
                "Write error: record needs `{}` bytes, destination has `{}`",
                expected, actual
            ),
            LengthOverflow(len) => {
                write!(f, "Length `{}` does not fit in a 16-bit length field", len)
            }
            BadLength { declared, minimum } => write!(
                f,
                "Bad length: declared `{}`, minimum is `{}`",
                declared, minimum
            ),
        }
    }
}

impl std::error::Error for Error {}
