use std::path::{Path, PathBuf};

use stegomail_envelope::keys::load_public_key;

use crate::media::{load_carrier, save_carrier};
use crate::secret::seal_into_image;
use crate::{CodecOptions, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<Vec<u8>>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    public_key: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.as_bytes().to_vec());
        self
    }

    pub fn with_message_bytes(mut self, message: impl AsRef<[u8]>) -> Self {
        self.message = Some(message.as_ref().to_vec());
        self
    }

    /// PEM file of the recipient's public key, PKCS#1 or PKIX
    pub fn with_public_key<A: AsRef<Path>>(mut self, public_key: A) -> Self {
        self.public_key = Some(public_key.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// target image, must be a PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };
        let Some(public_key) = self.public_key else {
            return Err(StegoError::MissingKey);
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        self.options.validate()?;

        let public_key = load_public_key(&public_key)?;
        let carrier = load_carrier(&image)?;
        let secret = seal_into_image(&carrier, &message, &public_key, &self.options)?;

        save_carrier(&secret, &output)
    }
}
