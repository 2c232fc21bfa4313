//! RSA key pair generation and PEM (de)serialization.
//!
//! Public keys are accepted as PKCS#1 (`RSA PUBLIC KEY`) or PKIX
//! (`PUBLIC KEY`), private keys as PKCS#1 with a PKCS#8 fallback.
//! Generated pairs are always written as PKCS#1.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use rand::rngs::OsRng;
use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding,
};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::EnvelopeError;
use crate::Result;

pub const DEFAULT_KEY_BITS: usize = 2048;
pub const PRIVATE_KEY_FILE: &str = "private.pem";
pub const PUBLIC_KEY_FILE: &str = "public.pem";

const PKCS1_PUBLIC_LABEL: &str = "RSA PUBLIC KEY";
const PKIX_PUBLIC_LABEL: &str = "PUBLIC KEY";

pub fn generate_key_pair(bits: usize) -> Result<RsaPrivateKey> {
    debug!("generating a {bits} bit RSA key pair");
    RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|source| EnvelopeError::KeyPairGeneration { bits, source })
}

/// size of the RSA modulus in bytes, which is also the size of a wrapped key
pub fn modulus_len(key: &impl PublicKeyParts) -> usize {
    key.size()
}

/// writes `private.pem` and `public.pem` (both PKCS#1) into `dir`, returns both paths
pub fn write_key_pair(dir: &Path, private_key: &RsaPrivateKey) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).map_err(|e| {
        error!("Error creating key directory {dir:?}: {e}");
        EnvelopeError::Io(e)
    })?;

    let private_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| EnvelopeError::KeyEncoding(e.to_string()))?;
    let public_pem = private_key
        .to_public_key()
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| EnvelopeError::KeyEncoding(e.to_string()))?;

    let private_path = dir.join(PRIVATE_KEY_FILE);
    let public_path = dir.join(PUBLIC_KEY_FILE);
    fs::write(&private_path, private_pem.as_bytes())?;
    fs::write(&public_path, public_pem.as_bytes())?;

    info!("RSA key pair written to {dir:?}");
    Ok((private_path, public_path))
}

pub fn public_key_from_pem(pem: &str) -> Result<RsaPublicKey> {
    match pem_label(pem) {
        Some(PKCS1_PUBLIC_LABEL) => RsaPublicKey::from_pkcs1_pem(pem)
            .map_err(|e| EnvelopeError::KeyEncoding(format!("PKCS#1 public key: {e}"))),
        Some(PKIX_PUBLIC_LABEL) => RsaPublicKey::from_public_key_pem(pem)
            .map_err(|e| EnvelopeError::KeyEncoding(format!("PKIX public key: {e}"))),
        Some(other) => Err(EnvelopeError::UnsupportedKeyFormat(other.to_string())),
        None => Err(EnvelopeError::UnsupportedKeyFormat(
            "no PEM block found".to_string(),
        )),
    }
}

pub fn private_key_from_pem(pem: &str) -> Result<RsaPrivateKey> {
    if pem_label(pem).is_none() {
        return Err(EnvelopeError::UnsupportedKeyFormat(
            "no PEM block found".to_string(),
        ));
    }

    RsaPrivateKey::from_pkcs1_pem(pem).or_else(|pkcs1_error| {
        debug!("not a PKCS#1 private key ({pkcs1_error}), trying PKCS#8");
        RsaPrivateKey::from_pkcs8_pem(pem)
            .map_err(|e| EnvelopeError::KeyEncoding(format!("private key: {e}")))
    })
}

pub fn load_public_key(path: &Path) -> Result<RsaPublicKey> {
    let key = public_key_from_pem(&read_pem(path)?)?;
    info!("Public key loaded from {path:?}");
    Ok(key)
}

pub fn load_private_key(path: &Path) -> Result<RsaPrivateKey> {
    let key = private_key_from_pem(&read_pem(path)?)?;
    info!("Private key loaded from {path:?}");
    Ok(key)
}

fn read_pem(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        error!("Error reading key file {path:?}: {e}");
        EnvelopeError::Io(e)
    })
}

/// label of the first `-----BEGIN <label>-----` line
fn pem_label(pem: &str) -> Option<&str> {
    pem.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("-----BEGIN "))
        .and_then(|rest| rest.strip_suffix("-----"))
}
