use clap::Parser;

use stegomail_core::StegoError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Keygen(keygen) => keygen.run(),
        Commands::Encrypt(encrypt) => encrypt.run(),
        Commands::Decrypt(decrypt) => decrypt.run(),
        Commands::Hide(hide) => hide.run(&options),
        Commands::Unveil(unveil) => unveil.run(&options),
    }
}
