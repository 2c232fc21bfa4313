use std::path::PathBuf;

use clap::Args;
use stegomail_core::CodecOptions;

use crate::CliResult;

/// Unveils and decrypts a message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(short = 'i', long = "in", value_name = "image source file")]
    pub media: PathBuf,

    /// Private key of the recipient (PEM)
    #[arg(short = 'k', long = "prikey", value_name = "private key file")]
    pub private_key: PathBuf,

    /// The message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: &CodecOptions) -> CliResult<()> {
        let message = stegomail_core::commands::unveil(&self.media, &self.private_key, options)?;

        super::emit(&message, self.output_file.as_deref())
    }
}
