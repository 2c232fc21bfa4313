use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Decrypts a JSON envelope
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// JSON envelope created by `encrypt`
    #[arg(short = 'i', long = "in", value_name = "json file")]
    pub envelope: PathBuf,

    /// Private key of the recipient (PEM)
    #[arg(short = 'k', long = "prikey", value_name = "private key file")]
    pub private_key: PathBuf,

    /// The message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl DecryptArgs {
    pub fn run(self) -> CliResult<()> {
        let message = stegomail_core::commands::decrypt(&self.envelope, &self.private_key)?;

        super::emit(&message, self.output_file.as_deref())
    }
}
