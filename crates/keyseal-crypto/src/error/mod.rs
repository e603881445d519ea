use thiserror::Error;

/// Crypto模块的错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// 密钥生成失败（参数非法或随机源耗尽）
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    /// PEM 标签不是 RSA 私钥
    #[error("Unsupported key type: {0}")]
    UnsupportedKey(String),

    #[error("PKCS1 error: {0}")]
    Pkcs1Error(#[from] rsa::pkcs1::Error),

    #[error("PKCS8 error: {0}")]
    Pkcs8Error(#[from] rsa::pkcs8::Error),

    #[error("SPKI error: {0}")]
    SpkiError(#[from] rsa::pkcs8::spki::Error),
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
