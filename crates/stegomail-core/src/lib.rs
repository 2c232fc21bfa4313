//! # Stegomail Core API
//!
//! Hides an RSA/AES-GCM encrypted message in the DCT domain of an image and
//! unveils it again. The building blocks live in [`media`], the hybrid
//! encryption in the `stegomail-envelope` crate.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust,no_run
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! stegomail_core::api::hide::prepare()
//!     .with_message("Hello, World!")       // will be encrypted and hidden
//!     .with_public_key("keys/public.pem")  // the recipient's key
//!     .with_image("carrier-image.png")
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust,no_run
//! let message = stegomail_core::api::unveil::prepare()
//!     .with_secret_image("image-with-a-secret.png")
//!     .with_private_key("keys/private.pem")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! println!("{}", String::from_utf8_lossy(&message));
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
// clippy::cast_lossless,
// clippy::if_then_some_else_none,
// clippy::missing_panics_doc,
// clippy::redundant_closure,
    clippy::redundant_else,
// clippy::use_self,
)]

pub mod api;
pub mod bit_stream;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod secret;

pub use crate::bit_stream::BitStream;
pub use crate::error::StegoError;
pub use crate::media::image::StegoImageCodec;
pub use crate::media::CodecOptions;
pub use crate::result::Result;
pub use crate::secret::{open_from_image, seal_into_image};
pub use stegomail_envelope as envelope;
pub use stegomail_envelope::{EncryptedEnvelope, RsaPrivateKey, RsaPublicKey};
