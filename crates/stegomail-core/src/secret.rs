//! In memory hide and unveil of an encrypted message.
//!
//! The concealed bytes are a length framed envelope:
//!
//! ```text
//! | len: u32 BE | nonce | ciphertext | tag | wrapped key (modulus size) |
//! ```

use image::RgbaImage;
use log::{debug, info};
use stegomail_envelope::keys::modulus_len;
use stegomail_envelope::{decrypt, encrypt, EncryptedEnvelope, RsaPrivateKey, RsaPublicKey};

use crate::error::StegoError;
use crate::media::image::StegoImageCodec;
use crate::media::payload::{self, LENGTH_HEADER_BITS};
use crate::media::CodecOptions;
use crate::result::Result;

/// Encrypts `message` for the owner of `public_key` and conceals it in a copy of `carrier`.
pub fn seal_into_image(
    carrier: &RgbaImage,
    message: &[u8],
    public_key: &RsaPublicKey,
    options: &CodecOptions,
) -> Result<RgbaImage> {
    let codec = StegoImageCodec::new(options)?;
    let envelope = encrypt(message, public_key)?;
    let framed = payload::frame(&envelope.to_bytes())?;
    debug!(
        "concealing an envelope of {} bytes in a {}x{} carrier",
        framed.len(),
        carrier.width(),
        carrier.height()
    );

    let secret = codec.embed(carrier, &framed)?;
    info!("message of {} bytes hidden", message.len());

    Ok(secret)
}

/// Recovers and decrypts a message concealed by [`seal_into_image`].
pub fn open_from_image(
    image: &RgbaImage,
    private_key: &RsaPrivateKey,
    options: &CodecOptions,
) -> Result<Vec<u8>> {
    let codec = StegoImageCodec::new(options)?;
    let capacity = codec.capacity_of(image);
    if capacity < LENGTH_HEADER_BITS {
        return Err(StegoError::NoSecretData);
    }

    let header = codec.extract(image, LENGTH_HEADER_BITS)?;
    let len = payload::declared_len(&header)?;
    let total_bits = payload::framed_bits(len);
    debug!("declared envelope length is {len} bytes, capacity is {capacity} bits");
    if total_bits > capacity {
        return Err(StegoError::NoSecretData);
    }

    let framed = codec.extract(image, total_bits)?;
    let envelope =
        EncryptedEnvelope::from_bytes(payload::unframe(&framed)?, modulus_len(private_key))?;
    let message = decrypt(&envelope, private_key)?;
    info!("message of {} bytes unveiled", message.len());

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_noise_image, prepare_uniform_image, shared_private_key};
    use stegomail_envelope::EnvelopeError;

    #[test]
    fn should_hide_and_unveil_a_message() {
        let key = shared_private_key();
        let carrier = prepare_noise_image(160, 128);
        let options = CodecOptions::default();

        let secret =
            seal_into_image(&carrier, b"hello world", &key.to_public_key(), &options).unwrap();
        let message = open_from_image(&secret, key, &options).unwrap();

        assert_eq!(message, b"hello world");
    }

    #[test]
    fn should_unveil_from_a_white_carrier() {
        let key = shared_private_key();
        let carrier = prepare_uniform_image(160, 128, 255);
        let options = CodecOptions::default();

        let secret =
            seal_into_image(&carrier, b"hello world", &key.to_public_key(), &options).unwrap();

        assert_eq!(open_from_image(&secret, key, &options).unwrap(), b"hello world");
    }

    #[test]
    fn should_refuse_carriers_that_are_too_small() {
        let key = shared_private_key();
        let carrier = prepare_noise_image(64, 64);

        let result = seal_into_image(
            &carrier,
            b"hello world",
            &key.to_public_key(),
            &CodecOptions::default(),
        );

        assert!(matches!(
            result,
            Err(StegoError::PayloadTooLarge {
                capacity_bits: 512,
                ..
            })
        ));
    }

    #[test]
    fn should_find_no_secret_in_a_plain_image() {
        let key = shared_private_key();
        // the first four blocks declare a length of u32::MAX bytes
        let image = prepare_uniform_image(64, 64, 128);
        let codec = StegoImageCodec::new(&CodecOptions::default()).unwrap();
        let marked = codec.embed(&image, &[0xFF; 4]).unwrap();

        assert!(matches!(
            open_from_image(&marked, key, &CodecOptions::default()),
            Err(StegoError::NoSecretData)
        ));
        assert!(matches!(
            open_from_image(&prepare_noise_image(16, 8), key, &CodecOptions::default()),
            Err(StegoError::NoSecretData)
        ));
    }

    #[test]
    fn should_need_the_same_options_to_unveil() {
        let key = shared_private_key();
        let carrier = prepare_noise_image(160, 128);
        let hidden_with = CodecOptions::default().with_slots_per_block(12);

        let secret =
            seal_into_image(&carrier, b"hi", &key.to_public_key(), &hidden_with).unwrap();

        assert!(open_from_image(&secret, key, &hidden_with).is_ok());
        assert!(open_from_image(&secret, key, &CodecOptions::default()).is_err());
    }

    #[test]
    fn tampered_pixels_should_fail_authentication() {
        let key = shared_private_key();
        let carrier = prepare_noise_image(160, 128);
        let options = CodecOptions::default();
        let secret =
            seal_into_image(&carrier, b"hello world", &key.to_public_key(), &options).unwrap();

        // frame byte 4 is the first nonce byte
        let codec = StegoImageCodec::new(&options).unwrap();
        let mut frame = codec.extract(&secret, 40).unwrap();
        frame[4] ^= 0xFF;
        let tampered = codec.embed(&secret, &frame).unwrap();

        assert!(matches!(
            open_from_image(&tampered, key, &options),
            Err(StegoError::Envelope(EnvelopeError::Authentication))
        ));
    }
}
