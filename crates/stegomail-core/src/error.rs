use thiserror::Error;

pub use stegomail_envelope::EnvelopeError;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a missing input buffer, as opposed to an empty one
    #[error("Input data cannot be absent")]
    NilInput,

    /// Represents a bit stream that does not end on a byte boundary
    #[error("Incomplete bit stream: {bits} bits is not a multiple of 8")]
    IncompleteBitStream { bits: usize },

    /// Represents a pixel or coefficient block that is not 8x8
    #[error("Block size error: expected 8x8, got {rows}x{cols}")]
    BlockSize { rows: usize, cols: usize },

    /// Represents a payload that does not fit into the carrier image
    #[error(
        "Capacity Error: the payload needs {required_bits} bits but the image can only carry {capacity_bits} bits"
    )]
    PayloadTooLarge {
        required_bits: usize,
        capacity_bits: usize,
    },

    /// Represents a block whose concealed bits did not survive the way back to pixels
    #[error("Embedding error: {lost_bits} bits would be lost in the block at ({x}, {y})")]
    BitsLost { x: u32, y: u32, lost_bits: usize },

    /// Represents a slot count outside of the 63 AC coefficients of a block
    #[error("Invalid number of coefficient slots per block: {0} (must be 1-63)")]
    InvalidSlotCount(usize),

    /// Represents a quantization step that is not a finite number >= 1
    #[error("Invalid quantization step: {0} (must be finite and at least 1)")]
    InvalidQuantizationStep(f64),

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an unveil of no secret data. For example when an image did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error of the hybrid encryption layer
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing key")]
    MissingKey,
}
