use std::path::Path;

use keyseal_crypto::{MAX_KEY_BITS, MIN_KEY_BITS};
use keyseal_pki::SigningParams;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Parameters for issuing a sealing key, supplied by the controller.
///
/// Every field is optional in the TOML source; missing ones fall back to
/// [`KeyConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// RSA modulus size
    pub key_bits: usize,
    /// Certificate lifetime in days
    pub validity_days: u32,
    /// Subject CN of the self-signed certificate
    pub common_name: String,
    /// Value of the sealing key label on created records
    pub label: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            key_bits: 4096,
            validity_days: 3650,
            common_name: "keyseal".to_string(),
            label: "active".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::Config(format!("Invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&self.key_bits) {
            return Err(Error::Config(format!(
                "key_bits must be within {MIN_KEY_BITS}..={MAX_KEY_BITS}, got {}",
                self.key_bits
            )));
        }
        if self.validity_days == 0 {
            return Err(Error::Config("validity_days must be positive".to_string()));
        }
        if self.common_name.is_empty() {
            return Err(Error::Config("common_name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Signing parameters with a window starting now
    pub fn signing_params(&self) -> SigningParams {
        SigningParams::new(self.common_name.clone(), self.validity_days)
    }
}
