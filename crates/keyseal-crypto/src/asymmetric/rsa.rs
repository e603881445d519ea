use rand_core::CryptoRngCore;
use rsa::{
    pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey},
    pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding},
    traits::PublicKeyParts,
    RsaPrivateKey, RsaPublicKey,
};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Smallest modulus that still fits a PKCS#1 v1.5 SHA-256 signature.
pub const MIN_KEY_BITS: usize = 512;
pub const MAX_KEY_BITS: usize = 16384;

/// PEM label of a PKCS#1 `RSAPrivateKey`
pub const PKCS1_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
/// PEM label of a PKCS#8 `PrivateKeyInfo`
pub const PKCS8_PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// An RSA key pair.
///
/// Equality is structural: two keys are equal when modulus, exponents
/// and primes all match.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaKey {
    inner: RsaPrivateKey,
}

impl From<RsaPrivateKey> for RsaKey {
    fn from(value: RsaPrivateKey) -> Self {
        Self { inner: value }
    }
}

impl std::fmt::Debug for RsaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKey")
            .field("bits", &self.size_bits())
            .finish_non_exhaustive()
    }
}

impl RsaKey {
    /// Generate a new RSA key pair of `bits` bits, drawing all entropy from `rng`.
    ///
    /// A seeded `rng` makes the result fully deterministic, which is only
    /// suitable for tests.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, bits: usize) -> Result<Self> {
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) {
            return Err(Error::KeyGeneration(format!(
                "Unsupported RSA key size {bits}, expected {MIN_KEY_BITS}..={MAX_KEY_BITS} bits"
            )));
        }

        let private_key = RsaPrivateKey::new(rng, bits)
            .map_err(|e| Error::KeyGeneration(format!("Failed to generate RSA key: {e}")))?;
        tracing::debug!(bits, "generated RSA key");
        Ok(private_key.into())
    }

    /// Import from PKCS#1 DER
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        Ok(RsaPrivateKey::from_pkcs1_der(der)?.into())
    }

    /// Import from PKCS#8 DER
    pub fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        Ok(RsaPrivateKey::from_pkcs8_der(der)?.into())
    }

    /// Import a private key from PEM.
    ///
    /// Both `RSA PRIVATE KEY` (PKCS#1) and `PRIVATE KEY` (PKCS#8) blocks are
    /// accepted. Any other label is rejected, as is a PKCS#8 body that holds
    /// a non-RSA key.
    pub fn from_pem(pem_bytes: &[u8]) -> Result<Self> {
        let block = pem::parse(pem_bytes)
            .map_err(|e| Error::Decoding(format!("Invalid PEM framing: {e}")))?;

        match block.tag() {
            PKCS1_PRIVATE_KEY_LABEL => Self::from_pkcs1_der(block.contents()),
            PKCS8_PRIVATE_KEY_LABEL => Self::from_pkcs8_der(block.contents()),
            other => Err(Error::UnsupportedKey(other.to_string())),
        }
    }

    pub fn inner(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl RsaKey {
    /// Export private key to PKCS#1 PEM (`RSA PRIVATE KEY`)
    pub fn to_pkcs1_pem(&self) -> Result<String> {
        let pem = self.inner.to_pkcs1_pem(LineEnding::LF)?;
        Ok(pem.to_string())
    }

    /// Export private key to PKCS#8 PEM (`PRIVATE KEY`)
    pub fn to_pkcs8_pem(&self) -> Result<String> {
        let pem = self.inner.to_pkcs8_pem(LineEnding::LF)?;
        Ok(pem.to_string())
    }

    /// Export public key to SPKI DER format
    pub fn to_spki_der(&self) -> Result<Vec<u8>> {
        let der = self.inner.to_public_key().to_public_key_der()?;
        Ok(der.as_bytes().to_vec())
    }

    pub fn public_key(&self) -> RsaPublicKey {
        self.inner.to_public_key()
    }

    /// Get key size in bits
    pub fn size_bits(&self) -> usize {
        self.inner.size() * 8
    }

    /// SHA-256 over the SPKI DER encoding of the public key
    pub fn spki_sha256_fingerprint(&self) -> Result<[u8; 32]> {
        let spki = self.to_spki_der()?;
        Ok(Sha256::digest(&spki).into())
    }
}

/// Verify a PKCS#1 v1.5 SHA-256 signature against an SPKI DER public key
pub fn verify_with_spki_der(spki_der: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let public_key = RsaPublicKey::from_public_key_der(spki_der)?;

    let hashed = Sha256::digest(message);
    Ok(public_key
        .verify(rsa::Pkcs1v15Sign::new::<Sha256>(), &hashed, signature)
        .is_ok())
}
