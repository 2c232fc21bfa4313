use std::fs;
use std::path::Path;

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;
use crate::{Result, NONCE_LEN};

/// AES-GCM sealed message together with its RSA-OAEP wrapped AES key
///
/// Persisted as JSON with the byte fields as standard base64:
/// `{"encrypted_message": "...", "encrypted_aes_key": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// nonce ‖ AES-GCM ciphertext ‖ tag
    #[serde(rename = "encrypted_message", with = "base64_bytes")]
    pub sealed_message: Vec<u8>,

    /// the AES key, wrapped with RSA-OAEP-SHA256, as long as the RSA modulus
    #[serde(rename = "encrypted_aes_key", with = "base64_bytes")]
    pub wrapped_key: Vec<u8>,
}

impl EncryptedEnvelope {
    /// the nonce prefix of the sealed message
    pub fn nonce(&self) -> &[u8] {
        &self.sealed_message[..NONCE_LEN.min(self.sealed_message.len())]
    }

    /// the embeddable form: `sealed_message ‖ wrapped_key`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.sealed_message.len() + self.wrapped_key.len());
        bytes.extend_from_slice(&self.sealed_message);
        bytes.extend_from_slice(&self.wrapped_key);
        bytes
    }

    /// splits `sealed_message ‖ wrapped_key` again, `wrapped_key_len` is the RSA modulus size in bytes
    pub fn from_bytes(bytes: &[u8], wrapped_key_len: usize) -> Result<Self> {
        if bytes.len() < wrapped_key_len + NONCE_LEN {
            return Err(EnvelopeError::MalformedCiphertext {
                len: bytes.len().saturating_sub(wrapped_key_len),
                nonce_len: NONCE_LEN,
            });
        }
        let (sealed_message, wrapped_key) = bytes.split_at(bytes.len() - wrapped_key_len);

        Ok(Self {
            sealed_message: sealed_message.to_vec(),
            wrapped_key: wrapped_key.to_vec(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// writes the JSON record, parent directories are created when missing
    pub fn save_as(&self, file: &Path) -> Result<()> {
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(file, self.to_json()?).map_err(|e| {
            error!("Error writing envelope to {file:?}: {e}");
            EnvelopeError::Io(e)
        })?;
        info!("Encrypted data saved to {file:?}");

        Ok(())
    }

    pub fn from_file(file: &Path) -> Result<Self> {
        let json = fs::read_to_string(file).map_err(|e| {
            error!("Error reading envelope from {file:?}: {e}");
            EnvelopeError::Io(e)
        })?;

        Self::from_json(&json)
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
