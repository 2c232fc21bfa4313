pub use rsa::Error as RsaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The operating system random source could not deliver key or nonce bytes
    #[error("Key generation error: random source failed")]
    KeyGeneration(rand::Error),

    /// AES-256-GCM could not be set up with the given key material
    #[error("Cipher initialization error: AES-256-GCM rejected a key of {key_len} bytes")]
    CipherInit { key_len: usize },

    /// AES-256-GCM refused to seal the message
    #[error("Sealing error: AES-256-GCM failed to encrypt {len} bytes")]
    Seal { len: usize },

    /// RSA-OAEP could not wrap the symmetric key, e.g. the modulus is too small for the padding
    #[error("Key wrap error: RSA-OAEP failed for a {modulus_len} byte modulus")]
    Wrap {
        modulus_len: usize,
        source: RsaError,
    },

    /// RSA-OAEP could not unwrap the symmetric key, e.g. wrong private key or damaged data
    #[error("Key unwrap error: RSA-OAEP failed on {wrapped_len} bytes")]
    Unwrap {
        wrapped_len: usize,
        source: RsaError,
    },

    /// The unwrapped symmetric key has not the expected size
    #[error("Invalid AES key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    /// The sealed message is too short to even carry its nonce
    #[error("Malformed ciphertext: length {len} is less than nonce size {nonce_len}")]
    MalformedCiphertext { len: usize, nonce_len: usize },

    /// The authentication tag did not match, the data was tampered with or the key is wrong
    #[error("Authentication error: sealed message was tampered with or the key does not match")]
    Authentication,

    /// RSA could not generate a key pair of the requested size
    #[error("Key pair generation error for {bits} bits")]
    KeyPairGeneration { bits: usize, source: RsaError },

    /// A PEM / DER key could not be parsed or serialized
    #[error("Key encoding error: {0}")]
    KeyEncoding(String),

    /// A PEM block with a label that is not an RSA key
    #[error("Unsupported key format: {0}")]
    UnsupportedKeyFormat(String),

    /// The persisted envelope record could not be (de)serialized
    #[error("Envelope record error")]
    Json(#[from] serde_json::Error),

    /// Represents all cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
