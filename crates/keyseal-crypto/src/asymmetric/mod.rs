//! Asymmetric key algorithms

pub mod rsa;

pub use self::rsa::{verify_with_spki_der, RsaKey, MAX_KEY_BITS, MIN_KEY_BITS};
