pub mod cert_utils;
pub mod types;

pub use cert_utils::{
    certificate_public_key, encode_chain_pem, parse_certificate, parse_chain_pem, sign_key,
    verify_self_signed, CERTIFICATE_LABEL,
};
pub use types::{CertificateInfo, CertificateSubject, SigningParams};
