use thiserror::Error;

/// PKI模块的错误类型
#[derive(Error, Debug)]
pub enum PkiError {
    /// 签名错误
    #[error("Signing error: {0}")]
    SigningError(String),

    /// 解析错误
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 导出错误
    #[error("Export error: {0}")]
    ExportError(String),

    /// 密钥错误
    #[error("Key error: {0}")]
    KeyError(#[from] keyseal_crypto::Error),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, PkiError>;
