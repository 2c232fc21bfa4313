use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use stegomail_envelope::keys::{self, load_private_key, load_public_key};
use stegomail_envelope::EncryptedEnvelope;

use crate::{api, CodecOptions, StegoError};

/// generates an RSA key pair and writes `private.pem` and `public.pem` into `destination`
pub fn generate_keys(destination: &Path, bits: usize) -> Result<(PathBuf, PathBuf), StegoError> {
    let private_key = keys::generate_key_pair(bits)?;
    let paths = keys::write_key_pair(destination, &private_key)?;
    info!("key pair written to {destination:?}");

    Ok(paths)
}

/// encrypts `message` for `public_key` and stores the envelope as JSON in `destination`
pub fn encrypt(message: &[u8], public_key: &Path, destination: &Path) -> Result<(), StegoError> {
    let public_key = load_public_key(public_key)?;
    let envelope = stegomail_envelope::encrypt(message, &public_key)?;
    envelope.save_as(destination)?;
    info!("envelope written to {destination:?}");

    Ok(())
}

/// reads a JSON envelope from `source` and decrypts it with `private_key`
pub fn decrypt(source: &Path, private_key: &Path) -> Result<Vec<u8>, StegoError> {
    let private_key = load_private_key(private_key)?;
    let envelope = EncryptedEnvelope::from_file(source)?;

    Ok(stegomail_envelope::decrypt(&envelope, &private_key)?)
}

pub fn hide(
    carrier: &Path,
    message: &[u8],
    public_key: &Path,
    destination: &Path,
    opts: &CodecOptions,
) -> Result<(), StegoError> {
    api::hide::prepare()
        .with_message_bytes(message)
        .with_image(carrier)
        .with_public_key(public_key)
        .with_output(destination)
        .with_options(opts.clone())
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    private_key: &Path,
    opts: &CodecOptions,
) -> Result<Vec<u8>, StegoError> {
    api::unveil::prepare()
        .with_secret_image(secret_media)
        .with_private_key(private_key)
        .with_options(opts.clone())
        .execute()
}

/// writes unveiled or decrypted data to `destination`
pub fn write_output(data: &[u8], destination: &Path) -> Result<(), StegoError> {
    fs::write(destination, data).map_err(|source| StegoError::WriteError { source })
}
