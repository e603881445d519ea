//! Keyseal Cryptography Library
//!
//! RSA key generation and PEM import/export for the sealing key. Every
//! generating call takes its randomness source as a parameter; nothing
//! here reaches for a process-wide RNG.

pub mod asymmetric;
pub mod encoding;
pub mod error;

pub use asymmetric::rsa::{PKCS1_PRIVATE_KEY_LABEL, PKCS8_PRIVATE_KEY_LABEL};
pub use asymmetric::{verify_with_spki_der, RsaKey, MAX_KEY_BITS, MIN_KEY_BITS};
pub use error::{Error, Result};
