use std::path::{Path, PathBuf};

use stegomail_envelope::keys::load_private_key;

use crate::media::load_carrier;
use crate::secret::open_from_image;
use crate::{CodecOptions, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    private_key: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn with_secret_image(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// PEM file of the recipient's private key, PKCS#1 or PKCS#8
    pub fn with_private_key(mut self, private_key: impl AsRef<Path>) -> Self {
        self.private_key = Some(private_key.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the decrypted message
    pub fn execute(self) -> Result<Vec<u8>, StegoError> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(private_key) = self.private_key else {
            return Err(StegoError::MissingKey);
        };
        self.options.validate()?;

        let private_key = load_private_key(&private_key)?;
        let image = load_carrier(&secret_image)?;

        open_from_image(&image, &private_key, &self.options)
    }
}
