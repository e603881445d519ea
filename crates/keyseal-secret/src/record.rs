//! Namespaced secret records
//!
//! A [`SecretRecord`] has the same shape as a cluster `Secret` manifest, so
//! it can be exported to JSON and read back without loss. Field values are
//! raw bytes in memory and base64 strings on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reserved field holding the PEM private key
pub const TLS_PRIVATE_KEY_KEY: &str = "tls.key";
/// Reserved field holding the PEM certificate chain
pub const TLS_CERT_KEY: &str = "tls.crt";

const API_VERSION: &str = "v1";
const KIND: &str = "Secret";

/// Declared type of a secret record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecretType {
    /// TLS key pair: `tls.key` + `tls.crt`
    #[serde(rename = "kubernetes.io/tls")]
    Tls,
    #[default]
    Opaque,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRecord {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(rename = "type", default)]
    pub secret_type: SecretType,
    #[serde(default, with = "base64_data")]
    pub data: BTreeMap<String, Vec<u8>>,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    KIND.to_string()
}

impl SecretRecord {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, secret_type: SecretType) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta {
                name: name.into(),
                namespace: namespace.into(),
                labels: BTreeMap::new(),
            },
            secret_type,
            data: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_data(mut self, field: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.data.insert(field.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.metadata.labels.get(key).map(String::as_str)
    }

    pub fn field(&self, field: &str) -> Option<&[u8]> {
        self.data.get(field).map(Vec::as_slice)
    }

    /// Serialize as a `Secret` manifest
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Encoding(format!("Failed to serialize secret: {e}")))
    }

    /// Parse a `Secret` manifest
    pub fn from_json(json: &str) -> Result<Self> {
        let record: Self = serde_json::from_str(json)
            .map_err(|e| Error::Decoding(format!("Failed to parse secret: {e}")))?;
        if record.kind != KIND {
            return Err(Error::Decoding(format!(
                "Expected kind {KIND}, got {}",
                record.kind
            )));
        }
        Ok(record)
    }
}

mod base64_data {
    use std::collections::BTreeMap;

    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &BTreeMap<String, Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(data.len()))?;
        for (field, value) in data {
            map.serialize_entry(field, &STANDARD.encode(value))?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, String>::deserialize(deserializer)?
            .into_iter()
            .map(|(field, value)| {
                STANDARD
                    .decode(value.as_bytes())
                    .map(|bytes| (field, bytes))
                    .map_err(de::Error::custom)
            })
            .collect()
    }
}
