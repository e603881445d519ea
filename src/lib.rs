//! # Keyseal
//!
//! Sealing key issuance for the controller: generate an RSA key, self-sign
//! it and keep both in a TLS secret record.
//!
//! ## 模块
//!
//! - `keyseal_crypto` - RSA 密钥生成与 PEM 编解码
//! - `keyseal_pki` - 自签名证书
//! - `keyseal_secret` - TLS secret 记录的写入与读取

pub use keyseal_crypto;
pub use keyseal_pki;
pub use keyseal_secret;
