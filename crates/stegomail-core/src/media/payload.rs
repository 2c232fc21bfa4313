//! Length prefixed framing of the bytes that get concealed in a carrier.
//!
//! ```text
//! | len: u32 big endian | data: len bytes |
//! ```

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::StegoError;
use crate::result::Result;

/// Size of the length header in bytes
pub const LENGTH_HEADER_LEN: usize = 4;

/// Size of the length header in bits
pub const LENGTH_HEADER_BITS: usize = LENGTH_HEADER_LEN * 8;

/// prepends the big endian length of `data`
pub fn frame(data: &[u8]) -> Result<Vec<u8>> {
    let len = u32::try_from(data.len()).map_err(|_| StegoError::PayloadTooLarge {
        required_bits: data.len().saturating_mul(8),
        capacity_bits: u32::MAX as usize,
    })?;
    let mut framed = Vec::with_capacity(LENGTH_HEADER_LEN + data.len());
    framed.write_u32::<BigEndian>(len)?;
    framed.extend_from_slice(data);

    Ok(framed)
}

/// reads the declared data length from the first 4 bytes
pub fn declared_len(header: &[u8]) -> Result<usize> {
    let mut reader = Cursor::new(header);
    let len = reader
        .read_u32::<BigEndian>()
        .map_err(|_| StegoError::NoSecretData)?;

    Ok(len as usize)
}

/// number of bits a frame with `len` data bytes occupies
pub fn framed_bits(len: usize) -> usize {
    (LENGTH_HEADER_LEN + len) * 8
}

/// strips and checks the length header
pub fn unframe(framed: &[u8]) -> Result<&[u8]> {
    let len = declared_len(framed)?;
    framed
        .get(LENGTH_HEADER_LEN..LENGTH_HEADER_LEN + len)
        .ok_or(StegoError::NoSecretData)
}
