pub mod decrypt;
pub mod encrypt;
pub mod hide;
pub mod keygen;
pub mod unveil;

use std::io::Write;
use std::path::Path;

use stegomail_core::commands::write_output;
use stegomail_core::StegoError;

use crate::CliResult;

/// writes to `out` when given, otherwise to stdout
fn emit(data: &[u8], out: Option<&Path>) -> CliResult<()> {
    match out {
        Some(file) => write_output(data, file),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(data)
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|source| StegoError::WriteError { source })
        }
    }
}
