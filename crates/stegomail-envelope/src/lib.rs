//! # Hybrid message envelope
//!
//! A message is sealed with AES-256-GCM under a fresh, single use key. That key
//! is then wrapped with RSA-OAEP (SHA-256) under the recipient's public key.
//! Both halves together form an [`EncryptedEnvelope`].
//!
//! ```rust,no_run
//! use stegomail_envelope::{decrypt, encrypt, keys};
//!
//! let private_key = keys::generate_key_pair(2048).unwrap();
//! let public_key = private_key.to_public_key();
//!
//! let envelope = encrypt(b"hello world", &public_key).unwrap();
//! let plaintext = decrypt(&envelope, &private_key).unwrap();
//! assert_eq!(plaintext, b"hello world");
//! ```

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::traits::PublicKeyParts;
use rsa::Oaep;
use sha2::Sha256;
use zeroize::Zeroizing;

pub mod envelope;
pub mod error;
pub mod keys;

pub use crate::envelope::EncryptedEnvelope;
pub use crate::error::EnvelopeError;
pub use rsa::{RsaPrivateKey, RsaPublicKey};

/// AES-256 key size in bytes
pub const KEY_LEN: usize = 32;
/// AES-GCM nonce size in bytes
pub const NONCE_LEN: usize = 12;
/// AES-GCM authentication tag size in bytes
pub const TAG_LEN: usize = 16;

pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// encrypts `message` with a fresh AES-256-GCM key and wraps that key with RSA-OAEP-SHA256
pub fn encrypt(message: &[u8], public_key: &RsaPublicKey) -> Result<EncryptedEnvelope> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    OsRng
        .try_fill_bytes(&mut key[..])
        .map_err(EnvelopeError::KeyGeneration)?;

    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(EnvelopeError::KeyGeneration)?;

    let cipher = Aes256Gcm::new_from_slice(&key[..])
        .map_err(|_| EnvelopeError::CipherInit { key_len: key.len() })?;
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), message)
        .map_err(|_| EnvelopeError::Seal { len: message.len() })?;

    let mut sealed_message = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed_message.extend_from_slice(&nonce);
    sealed_message.extend_from_slice(&ciphertext);

    let wrapped_key = public_key
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), &key[..])
        .map_err(|source| EnvelopeError::Wrap {
            modulus_len: public_key.size(),
            source,
        })?;

    debug!(
        "sealed {} bytes into {} bytes, wrapped key has {} bytes",
        message.len(),
        sealed_message.len(),
        wrapped_key.len()
    );

    Ok(EncryptedEnvelope {
        sealed_message,
        wrapped_key,
    })
}

/// unwraps the AES key with the private key and opens the sealed message
///
/// Nothing is returned unless the authentication tag verifies.
pub fn decrypt(envelope: &EncryptedEnvelope, private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let key = Zeroizing::new(
        private_key
            .decrypt(Oaep::new::<Sha256>(), &envelope.wrapped_key)
            .map_err(|source| EnvelopeError::Unwrap {
                wrapped_len: envelope.wrapped_key.len(),
                source,
            })?,
    );

    if key.len() != KEY_LEN {
        return Err(EnvelopeError::InvalidKeyLength {
            expected: KEY_LEN,
            got: key.len(),
        });
    }

    let sealed = envelope.sealed_message.as_slice();
    if sealed.len() < NONCE_LEN {
        return Err(EnvelopeError::MalformedCiphertext {
            len: sealed.len(),
            nonce_len: NONCE_LEN,
        });
    }
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new_from_slice(key.as_slice())
        .map_err(|_| EnvelopeError::CipherInit { key_len: key.len() })?;
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| EnvelopeError::Authentication)?;

    debug!("opened {} bytes from the sealed message", plaintext.len());

    Ok(plaintext)
}


#[cfg(test)]
mod tests {
    use super::test_utils::shared_private_key;
    use super::*;

    #[test]
    fn should_encrypt_and_decrypt_hello_world() {
        let private_key = shared_private_key();
        let public_key = private_key.to_public_key();

        let envelope = encrypt(b"hello world", &public_key).unwrap();

        assert_eq!(envelope.wrapped_key.len(), 256);
        assert!(envelope.sealed_message.len() >= NONCE_LEN + TAG_LEN + 11);
        assert_eq!(decrypt(&envelope, private_key).unwrap(), b"hello world");
    }

    #[test]
    fn test_encryption_round_trip() {
        let private_key = shared_private_key();
        let data = b"lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

        let envelope = encrypt(data, &private_key.to_public_key()).unwrap();
        let plaintext = decrypt(&envelope, private_key).unwrap();

        assert_ne!(&envelope.sealed_message[NONCE_LEN..], data.as_slice());
        assert_eq!(plaintext, data);
    }

    #[test]
    fn should_handle_an_empty_message() {
        let private_key = shared_private_key();

        let envelope = encrypt(b"", &private_key.to_public_key()).unwrap();

        assert_eq!(envelope.sealed_message.len(), NONCE_LEN + TAG_LEN);
        assert!(decrypt(&envelope, private_key).unwrap().is_empty());
    }

    #[test]
    fn should_use_a_fresh_nonce_and_key_per_encryption() {
        let public_key = shared_private_key().to_public_key();

        let first = encrypt(b"same same", &public_key).unwrap();
        let second = encrypt(b"same same", &public_key).unwrap();

        assert_eq!(first.nonce().len(), NONCE_LEN);
        assert_ne!(first.nonce(), second.nonce());
        assert_ne!(first.wrapped_key, second.wrapped_key);
    }

    #[test]
    fn should_detect_any_flipped_byte_in_the_sealed_message() {
        let private_key = shared_private_key();
        let envelope = encrypt(b"hello world", &private_key.to_public_key()).unwrap();

        for i in 0..envelope.sealed_message.len() {
            let mut tampered = envelope.clone();
            tampered.sealed_message[i] ^= 0x01;

            match decrypt(&tampered, private_key) {
                Err(EnvelopeError::Authentication) => (),
                other => panic!("byte {i} flipped, expected authentication error, got {other:?}"),
            }
        }
    }

    #[test]
    fn should_reject_a_sealed_message_shorter_than_the_nonce() {
        let private_key = shared_private_key();
        let mut envelope = encrypt(b"hello world", &private_key.to_public_key()).unwrap();
        envelope.sealed_message.truncate(NONCE_LEN - 1);

        match decrypt(&envelope, private_key) {
            Err(EnvelopeError::MalformedCiphertext { len, nonce_len }) => {
                assert_eq!(len, NONCE_LEN - 1);
                assert_eq!(nonce_len, NONCE_LEN);
            }
            other => panic!("expected malformed ciphertext, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_a_wrapped_key_of_the_wrong_size() {
        let private_key = shared_private_key();
        let public_key = private_key.to_public_key();
        let mut envelope = encrypt(b"hello world", &public_key).unwrap();
        envelope.wrapped_key = public_key
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), &[7u8; 16])
            .unwrap();

        match decrypt(&envelope, private_key) {
            Err(EnvelopeError::InvalidKeyLength { expected, got }) => {
                assert_eq!(expected, KEY_LEN);
                assert_eq!(got, 16);
            }
            other => panic!("expected invalid key length, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_to_unwrap_a_damaged_key() {
        let private_key = shared_private_key();
        let mut envelope = encrypt(b"hello world", &private_key.to_public_key()).unwrap();
        envelope.wrapped_key[0] ^= 0xff;

        assert!(matches!(
            decrypt(&envelope, private_key),
            Err(EnvelopeError::Unwrap { wrapped_len: 256, .. })
        ));
    }

    #[test]
    fn should_fail_to_wrap_with_a_modulus_too_small_for_oaep() {
        let tiny_key = keys::generate_key_pair(512).unwrap();

        assert!(matches!(
            encrypt(b"hello world", &tiny_key.to_public_key()),
            Err(EnvelopeError::Wrap {
                modulus_len: 64,
                ..
            })
        ));
    }
}
