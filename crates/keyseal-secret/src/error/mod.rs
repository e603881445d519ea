mod store;

use thiserror::Error;

/// 存储后端的错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 记录已存在
    #[error("secret {namespace}/{name} already exists")]
    AlreadyExists { namespace: String, name: String },

    /// 记录未找到
    #[error("secret {namespace}/{name} not found")]
    NotFound { namespace: String, name: String },

    #[error("invalid secret: {0}")]
    Invalid(String),

    #[error("lock error: {0}")]
    Lock(String),
}

/// Errors raised while issuing, storing or loading a sealing key
#[derive(Error, Debug)]
pub enum Error {
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Passed through unchanged from the store
    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;

pub type StoreResult<T> = std::result::Result<T, StoreError>;
