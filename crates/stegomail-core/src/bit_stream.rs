use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::StegoError;
use crate::result::Result;

/// Ordered sequence of single bits (each `0` or `1`), most significant bit of every byte first.
///
/// Once produced it is never altered, codecs only read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<u8>,
}

impl BitStream {
    /// expands every byte into 8 bits, MSB first
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut reader = BitReader::endian(Cursor::new(data), BigEndian);
        let bits = (0..data.len() * 8)
            .map_while(|_| reader.read_bit().ok())
            .map(u8::from)
            .collect();

        Self { bits }
    }

    /// takes already separated bits, anything non-zero counts as `1`
    pub fn from_bits<I: IntoIterator<Item = u8>>(bits: I) -> Self {
        Self {
            bits: bits.into_iter().map(|b| u8::from(b != 0)).collect(),
        }
    }

    /// packs the bits back into bytes, MSB first
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.bits.len() % 8 != 0 {
            return Err(StegoError::IncompleteBitStream {
                bits: self.bits.len(),
            });
        }

        let mut writer = BitWriter::endian(Vec::with_capacity(self.bits.len() / 8), BigEndian);
        for &bit in &self.bits {
            writer.write_bit(bit == 1)?;
        }

        Ok(writer.into_writer())
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }
}

/// bits of `data`, MSB first; `None` is not the same as an empty buffer
pub fn to_bits(data: Option<&[u8]>) -> Result<BitStream> {
    data.map(BitStream::from_bytes).ok_or(StegoError::NilInput)
}

/// groups `bits` into bytes of 8, MSB first
pub fn from_bits(bits: &BitStream) -> Result<Vec<u8>> {
    bits.to_bytes()
}
