mod memory;

use std::fmt;

pub use memory::MemorySecretStore;

use crate::error::StoreResult;
use crate::record::SecretRecord;

/// Resource name recorded for every secret action
pub const SECRETS_RESOURCE: &str = "secrets";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Create,
    Get,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Create => f.write_str("create"),
            Verb::Get => f.write_str("get"),
        }
    }
}

/// One request issued against a store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreAction {
    pub verb: Verb,
    pub resource: &'static str,
    pub namespace: String,
    pub name: String,
}

/// Trait for namespaced secret storage backends (synchronous)
///
/// Implementations must reject a `create` whose (namespace, name) is
/// already taken instead of overwriting it.
pub trait SecretStore: Send + Sync {
    /// Create a new record, returning it as stored
    fn create(&self, record: SecretRecord) -> StoreResult<SecretRecord>;

    /// Fetch a record by namespace and name
    fn get(&self, namespace: &str, name: &str) -> StoreResult<SecretRecord>;
}
