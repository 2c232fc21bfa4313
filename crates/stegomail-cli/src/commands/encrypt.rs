use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Encrypts a message into a JSON envelope
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// A text message that will be encrypted
    #[arg(short, long, value_name = "text message")]
    pub message: String,

    /// Public key of the recipient (PEM)
    #[arg(short = 'k', long = "pubkey", value_name = "public key file")]
    pub public_key: PathBuf,

    /// The envelope will be stored as JSON file
    #[arg(short = 'o', long = "out", value_name = "output json file")]
    pub write_to_file: PathBuf,
}

impl EncryptArgs {
    pub fn run(self) -> CliResult<()> {
        stegomail_core::commands::encrypt(
            self.message.as_bytes(),
            &self.public_key,
            &self.write_to_file,
        )
    }
}
