use std::path::PathBuf;

use clap::Args;
use stegomail_core::envelope::keys::DEFAULT_KEY_BITS;

use crate::CliResult;

/// Generates an RSA key pair as private.pem and public.pem
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Folder the key pair is written to
    #[arg(short = 'o', long = "out", value_name = "output folder")]
    pub output_folder: PathBuf,

    /// Size of the RSA modulus in bits
    #[arg(short, long, value_name = "bits", default_value_t = DEFAULT_KEY_BITS)]
    pub bits: usize,
}

impl KeygenArgs {
    pub fn run(self) -> CliResult<()> {
        let (private_key, public_key) =
            stegomail_core::commands::generate_keys(&self.output_folder, self.bits)?;
        println!("private key: {}", private_key.display());
        println!("public key:  {}", public_key.display());

        Ok(())
    }
}
