//! Keyseal PKI
//!
//! Self-signed certificates for the sealing key, plus PEM chain encoding
//! and decoding.

pub mod cert;
pub mod error;

pub use cert::{
    certificate_public_key, encode_chain_pem, parse_certificate, parse_chain_pem, sign_key,
    verify_self_signed, CertificateInfo, CertificateSubject, SigningParams, CERTIFICATE_LABEL,
};
pub use error::{PkiError, Result};
pub use x509_cert::Certificate;
