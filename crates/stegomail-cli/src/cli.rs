use clap::{Parser, Subcommand};
use stegomail_core::media::{DEFAULT_QUANTIZATION_STEP, DEFAULT_SLOTS_PER_BLOCK};
use stegomail_core::CodecOptions;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: number of AC coefficients per 8x8 block that carry a bit (1-63)
    #[arg(
        long = "x-slots-per-block",
        env = "STEGOMAIL_SLOTS_PER_BLOCK",
        default_value_t = DEFAULT_SLOTS_PER_BLOCK,
        global = true
    )]
    pub slots_per_block: usize,

    /// Experimental: lattice pitch the carrying coefficients are snapped to
    #[arg(
        long = "x-quantization-step",
        env = "STEGOMAIL_QUANTIZATION_STEP",
        default_value_t = DEFAULT_QUANTIZATION_STEP,
        global = true
    )]
    pub quantization_step: f64,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_slots_per_block(self.slots_per_block)
            .with_quantization_step(self.quantization_step)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Keygen(keygen::KeygenArgs),
    Encrypt(encrypt::EncryptArgs),
    Decrypt(decrypt::DecryptArgs),
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
}
