use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use super::{SecretStore, StoreAction, Verb, SECRETS_RESOURCE};
use crate::error::{StoreError, StoreResult};
use crate::record::SecretRecord;

/// Records keyed by (namespace, name)
type SecretStorage = Arc<RwLock<HashMap<(String, String), SecretRecord>>>;

/// In-memory secret store.
///
/// Every request is appended to an action log before it is served, failed
/// requests included, so tests can assert on what was asked of the store.
#[derive(Clone, Default)]
pub struct MemorySecretStore {
    secrets: SecretStorage,
    actions: Arc<RwLock<Vec<StoreAction>>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records without logging actions
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SecretRecord>,
    {
        let secrets = records
            .into_iter()
            .map(|r| ((r.namespace().to_string(), r.name().to_string()), r))
            .collect();
        Self {
            secrets: Arc::new(RwLock::new(secrets)),
            actions: Arc::default(),
        }
    }

    /// All actions seen so far, oldest first
    pub fn actions(&self) -> Vec<StoreAction> {
        self.actions
            .read()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }

    /// First action matching `verb` on `resource`
    pub fn find_action(&self, verb: Verb, resource: &str) -> Option<StoreAction> {
        self.actions()
            .into_iter()
            .find(|a| a.verb == verb && a.resource == resource)
    }

    pub fn len(&self) -> usize {
        self.secrets.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, verb: Verb, namespace: &str, name: &str) -> StoreResult<()> {
        let mut actions = self
            .actions
            .write()
            .map_err(|_| StoreError::lock_error("Failed to acquire action log lock"))?;
        actions.push(StoreAction {
            verb,
            resource: SECRETS_RESOURCE,
            namespace: namespace.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }
}

impl SecretStore for MemorySecretStore {
    fn create(&self, record: SecretRecord) -> StoreResult<SecretRecord> {
        self.record(Verb::Create, record.namespace(), record.name())?;

        if record.namespace().is_empty() || record.name().is_empty() {
            return Err(StoreError::Invalid(
                "namespace and name are required".to_string(),
            ));
        }

        let mut secrets = self
            .secrets
            .write()
            .map_err(|_| StoreError::lock_error("Failed to acquire write lock"))?;

        let key = (record.namespace().to_string(), record.name().to_string());
        if secrets.contains_key(&key) {
            return Err(StoreError::already_exists(&key.0, &key.1));
        }

        secrets.insert(key, record.clone());
        Ok(record)
    }

    fn get(&self, namespace: &str, name: &str) -> StoreResult<SecretRecord> {
        self.record(Verb::Get, namespace, name)?;

        let secrets = self
            .secrets
            .read()
            .map_err(|_| StoreError::lock_error("Failed to acquire read lock"))?;

        secrets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(namespace, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SecretType;

    fn record(namespace: &str, name: &str, value: &[u8]) -> SecretRecord {
        SecretRecord::new(namespace, name, SecretType::Opaque).with_data("value", value.to_vec())
    }

    #[test]
    fn test_memory_store_basic_operations() {
        let store = MemorySecretStore::new();

        store.create(record("myns", "mykey", b"one")).unwrap();
        assert_eq!(store.len(), 1);

        let fetched = store.get("myns", "mykey").unwrap();
        assert_eq!(fetched.field("value"), Some(&b"one"[..]));

        let actions = store.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].verb, Verb::Create);
        assert_eq!(actions[1].verb, Verb::Get);
        assert!(actions.iter().all(|a| a.namespace == "myns" && a.resource == "secrets"));
    }

    #[test]
    fn test_memory_store_duplicate_secret() {
        let store = MemorySecretStore::new();
        store.create(record("myns", "mykey", b"one")).unwrap();

        let err = store.create(record("myns", "mykey", b"two")).unwrap_err();
        assert_eq!(err, StoreError::already_exists("myns", "mykey"));

        // original left untouched
        let fetched = store.get("myns", "mykey").unwrap();
        assert_eq!(fetched.field("value"), Some(&b"one"[..]));
    }

    #[test]
    fn test_same_name_in_other_namespace() {
        let store = MemorySecretStore::new();
        store.create(record("a", "mykey", b"one")).unwrap();
        store.create(record("b", "mykey", b"two")).unwrap();

        assert_eq!(store.get("b", "mykey").unwrap().field("value"), Some(&b"two"[..]));
    }

    #[test]
    fn test_missing_secret() {
        let store = MemorySecretStore::new();
        let err = store.get("myns", "nope").unwrap_err();
        assert_eq!(err, StoreError::not_found("myns", "nope"));
        assert!(store.find_action(Verb::Get, SECRETS_RESOURCE).is_some());
    }

    #[test]
    fn test_rejects_unnamed_records() {
        let store = MemorySecretStore::new();
        let err = store.create(record("", "mykey", b"x")).unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_seeded_store_has_no_actions() {
        let store = MemorySecretStore::with_records([record("myns", "mykey", b"one")]);
        assert!(store.actions().is_empty());
        assert!(store.find_action(Verb::Create, SECRETS_RESOURCE).is_none());
        assert!(store.get("myns", "mykey").is_ok());
    }
}
