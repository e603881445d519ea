use const_oid::{
    db::{rfc4519, rfc5280, rfc5912},
    ObjectIdentifier,
};
use der::{
    asn1::{SetOfVec, Utf8StringRef},
    Decode, Encode,
};
use keyseal_crypto::{encoding, verify_with_spki_der, RsaKey};
use rand_core::{CryptoRngCore, RngCore};
use rsa::{
    pkcs1v15::{Signature, SigningKey},
    pkcs8::DecodePublicKey,
    RsaPublicKey,
};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use x509_cert::{
    attr::AttributeTypeAndValue,
    builder::{Builder, CertificateBuilder, Profile},
    ext::pkix::BasicConstraints,
    name::{Name, RdnSequence, RelativeDistinguishedName},
    serial_number::SerialNumber,
    spki::SubjectPublicKeyInfoOwned,
    time::{Time, Validity},
    Certificate,
};

use super::types::{CertificateInfo, CertificateSubject, SigningParams};
use crate::error::{PkiError, Result};

/// PEM label of an X.509 certificate
pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";

const SERIAL_NUMBER_LEN: usize = 16;

/// 创建自签名证书
///
/// Subject and issuer are both built from `params.subject`; the subject
/// public key is the public half of `key`. The certificate is a leaf
/// (`CA:FALSE`) limited to digital signature and key encipherment.
/// `rng` supplies the serial number and the signature blinding.
pub fn sign_key<R: CryptoRngCore>(
    rng: &mut R,
    key: &RsaKey,
    params: &SigningParams,
) -> Result<Certificate> {
    let subject = build_distinguished_name(&params.subject)?;

    let mut serial = [0u8; SERIAL_NUMBER_LEN];
    rng.fill_bytes(&mut serial);
    // keep the DER INTEGER positive and non-zero
    serial[0] &= 0x7f;
    serial[SERIAL_NUMBER_LEN - 1] |= 0x01;
    let serial_number = SerialNumber::new(&serial)
        .map_err(|e| PkiError::SigningError(format!("Invalid serial number: {e}")))?;

    let validity = build_validity(params)?;

    let spki = SubjectPublicKeyInfoOwned::from_key(key.public_key())
        .map_err(|e| PkiError::SigningError(format!("Failed to encode public key: {e}")))?;

    let profile = Profile::Leaf {
        issuer: subject.clone(),
        enable_key_agreement: false,
        enable_key_encipherment: true,
    };

    let signer = SigningKey::<Sha256>::new(key.inner().clone());
    let builder = CertificateBuilder::new(profile, serial_number, validity, subject, spki, &signer)
        .map_err(|e| PkiError::SigningError(format!("Failed to prepare certificate: {e}")))?;

    let cert = builder
        .build_with_rng::<Signature>(rng)
        .map_err(|e| PkiError::SigningError(format!("Failed to sign certificate: {e}")))?;

    tracing::debug!(
        subject = %cert.tbs_certificate.subject,
        serial = %hex::encode(serial),
        "self-signed certificate"
    );
    Ok(cert)
}

/// Extract the RSA public key a certificate binds
pub fn certificate_public_key(cert: &Certificate) -> Result<RsaPublicKey> {
    let spki_der = cert
        .tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| PkiError::ParseError(format!("Failed to encode SPKI: {e}")))?;

    RsaPublicKey::from_public_key_der(&spki_der)
        .map_err(|e| PkiError::ParseError(format!("Certificate key is not RSA: {e}")))
}

/// Check that `cert` names itself as issuer and carries a valid
/// sha256WithRSAEncryption signature made by its own key.
pub fn verify_self_signed(cert: &Certificate) -> Result<bool> {
    let tbs = &cert.tbs_certificate;
    if tbs.issuer != tbs.subject {
        return Ok(false);
    }
    if cert.signature_algorithm.oid != rfc5912::SHA_256_WITH_RSA_ENCRYPTION {
        return Ok(false);
    }

    let message = tbs
        .to_der()
        .map_err(|e| PkiError::ParseError(format!("Failed to encode TBS certificate: {e}")))?;
    let spki_der = tbs
        .subject_public_key_info
        .to_der()
        .map_err(|e| PkiError::ParseError(format!("Failed to encode SPKI: {e}")))?;
    let signature = cert
        .signature
        .as_bytes()
        .ok_or_else(|| PkiError::ParseError("Signature has unused bits".to_string()))?;

    Ok(verify_with_spki_der(&spki_der, &message, signature)?)
}

/// Encode a certificate chain as concatenated `CERTIFICATE` PEM blocks,
/// leaf first.
pub fn encode_chain_pem(chain: &[Certificate]) -> Result<String> {
    if chain.is_empty() {
        return Err(PkiError::ExportError("Certificate chain is empty".to_string()));
    }

    let ders = chain
        .iter()
        .map(|cert| cert.to_der())
        .collect::<der::Result<Vec<_>>>()
        .map_err(|e| PkiError::ExportError(format!("Failed to encode certificate: {e}")))?;

    Ok(encoding::to_pem_many(
        ders.iter().map(Vec::as_slice),
        CERTIFICATE_LABEL,
    ))
}

/// Parse every `CERTIFICATE` block in `input`, in file order.
///
/// Blocks with other labels are skipped. Input without any certificate
/// is an error.
pub fn parse_chain_pem(input: &[u8]) -> Result<Vec<Certificate>> {
    let blocks = encoding::from_pem_many(input)
        .map_err(|e| PkiError::ParseError(e.to_string()))?;

    let chain = blocks
        .iter()
        .filter(|(label, _)| label == CERTIFICATE_LABEL)
        .map(|(_, der)| {
            Certificate::from_der(der)
                .map_err(|e| PkiError::ParseError(format!("Failed to parse DER: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    if chain.is_empty() {
        return Err(PkiError::ParseError(
            "No CERTIFICATE blocks found".to_string(),
        ));
    }
    Ok(chain)
}

/// 解析证书内容
pub fn parse_certificate(cert: &Certificate) -> Result<CertificateInfo> {
    let tbs = &cert.tbs_certificate;

    let der = cert
        .to_der()
        .map_err(|e| PkiError::ParseError(format!("Failed to encode certificate: {e}")))?;

    let mut is_ca = false;
    for ext in tbs.extensions.iter().flatten() {
        if ext.extn_id == rfc5280::ID_CE_BASIC_CONSTRAINTS {
            let constraints = BasicConstraints::from_der(ext.extn_value.as_bytes())
                .map_err(|e| PkiError::ParseError(format!("Invalid basic constraints: {e}")))?;
            is_ca = constraints.ca;
        }
    }

    Ok(CertificateInfo {
        serial_number: hex::encode(tbs.serial_number.as_bytes()),
        subject: parse_distinguished_name(&tbs.subject)?,
        issuer: parse_distinguished_name(&tbs.issuer)?,
        not_before: parse_time(&tbs.validity.not_before)?,
        not_after: parse_time(&tbs.validity.not_after)?,
        fingerprint: hex::encode(Sha256::digest(&der)),
        is_ca,
    })
}

fn build_validity(params: &SigningParams) -> Result<Validity> {
    let not_after = params
        .not_before
        .checked_add(params.validity)
        .ok_or_else(|| PkiError::SigningError("Validity window overflows".to_string()))?;

    let not_before = Time::try_from(params.not_before)
        .map_err(|e| PkiError::SigningError(format!("Invalid notBefore: {e}")))?;
    let not_after = Time::try_from(not_after)
        .map_err(|e| PkiError::SigningError(format!("Invalid notAfter: {e}")))?;

    Ok(Validity {
        not_before,
        not_after,
    })
}

fn build_distinguished_name(subject: &CertificateSubject) -> Result<Name> {
    if subject.common_name.is_empty() {
        return Err(PkiError::SigningError(
            "Common Name (CN) is required".to_string(),
        ));
    }

    let mut rdns = vec![rdn(rfc4519::CN, &subject.common_name)?];
    if let Some(org) = &subject.organization {
        rdns.push(rdn(rfc4519::O, org)?);
    }
    Ok(RdnSequence(rdns))
}

fn rdn(oid: ObjectIdentifier, value: &str) -> Result<RelativeDistinguishedName> {
    let value = Utf8StringRef::new(value)
        .map_err(|e| PkiError::SigningError(format!("Invalid {oid} value: {e}")))?;

    let mut set = SetOfVec::new();
    set.insert(AttributeTypeAndValue {
        oid,
        value: der::Any::from(value),
    })
    .map_err(|e| PkiError::SigningError(format!("Failed to add {oid}: {e}")))?;
    Ok(RelativeDistinguishedName(set))
}

fn parse_distinguished_name(name: &Name) -> Result<CertificateSubject> {
    let mut subject = CertificateSubject::new(String::new());

    for attr in name.0.iter().flat_map(|rdn| rdn.0.iter()) {
        let Ok(value) = Utf8StringRef::try_from(&attr.value) else {
            continue;
        };

        if attr.oid == rfc4519::CN {
            subject.common_name = value.as_str().to_string();
        } else if attr.oid == rfc4519::O {
            subject.organization = Some(value.as_str().to_string());
        }
    }

    Ok(subject)
}

fn parse_time(time: &Time) -> Result<OffsetDateTime> {
    let secs = time.to_unix_duration().as_secs();
    OffsetDateTime::from_unix_timestamp(secs as i64)
        .map_err(|e| PkiError::ParseError(format!("Invalid certificate time: {e}")))
}
