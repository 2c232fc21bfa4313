use std::path::PathBuf;

use clap::Args;
use stegomail_core::CodecOptions;

use crate::CliResult;

/// Encrypts a message and hides it in an image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image, PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file")]
    pub media: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: String,

    /// Public key of the recipient (PEM)
    #[arg(short = 'k', long = "pubkey", value_name = "public key file")]
    pub public_key: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: PathBuf,
}

impl HideArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<()> {
        stegomail_core::commands::hide(
            &self.media,
            self.message.as_bytes(),
            &self.public_key,
            &self.write_to_file,
            options,
        )
    }
}
