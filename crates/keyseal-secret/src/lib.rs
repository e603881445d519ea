//! Keyseal secret storage
//!
//! Stores a sealing key and its certificate chain as a TLS secret record
//! in a namespaced store, and reads them back.
//!
//! ```no_run
//! use keyseal_secret::{issue_key, load_key, KeyConfig, MemorySecretStore};
//! use rand::rngs::OsRng;
//!
//! let store = MemorySecretStore::new();
//! let issued = issue_key(&store, &mut OsRng, &KeyConfig::default(), "keyseal", "sealing-key").unwrap();
//! let (key, chain) = load_key(&store, "keyseal", "sealing-key").unwrap();
//! assert_eq!(key, issued.key);
//! assert_eq!(chain[0], issued.certificate);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod store;

pub use codec::{issue_key, load_key, read_key, write_key, IssuedKey, SEALING_KEY_LABEL};
pub use config::KeyConfig;
pub use error::{Error, Result, StoreError, StoreResult};
pub use record::{ObjectMeta, SecretRecord, SecretType, TLS_CERT_KEY, TLS_PRIVATE_KEY_KEY};
pub use store::{MemorySecretStore, SecretStore, StoreAction, Verb, SECRETS_RESOURCE};
