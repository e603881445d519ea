use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// 证书主体信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CertificateSubject {
    /// 通用名称 (CN)
    pub common_name: String,
    /// 组织 (O)
    pub organization: Option<String>,
}

impl CertificateSubject {
    pub fn new(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            organization: None,
        }
    }
}

/// Parameters for a self-signed certificate.
///
/// The validity window runs from `not_before` for `validity`.
#[derive(Debug, Clone)]
pub struct SigningParams {
    pub subject: CertificateSubject,
    pub not_before: SystemTime,
    pub validity: Duration,
}

impl SigningParams {
    /// Window starting now and lasting `validity_days` days
    pub fn new(common_name: impl Into<String>, validity_days: u32) -> Self {
        Self {
            subject: CertificateSubject::new(common_name),
            not_before: SystemTime::now(),
            validity: Duration::from_secs(u64::from(validity_days) * 24 * 60 * 60),
        }
    }

    pub fn with_not_before(mut self, not_before: SystemTime) -> Self {
        self.not_before = not_before;
        self
    }
}

/// 证书信息结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateInfo {
    /// 序列号 (hex)
    pub serial_number: String,
    /// 证书主体
    pub subject: CertificateSubject,
    /// 颁发者
    pub issuer: CertificateSubject,
    /// 生效时间
    #[serde(with = "time::serde::rfc3339")]
    pub not_before: OffsetDateTime,
    /// 过期时间
    #[serde(with = "time::serde::rfc3339")]
    pub not_after: OffsetDateTime,
    /// SHA-256 over the DER certificate (hex)
    pub fingerprint: String,
    /// 是否为CA证书
    pub is_ca: bool,
}

impl CertificateInfo {
    /// 检查证书是否在有效期内
    pub fn is_valid_at(&self, time: OffsetDateTime) -> bool {
        time >= self.not_before && time <= self.not_after
    }

    /// 检查证书当前是否有效
    pub fn is_currently_valid(&self) -> bool {
        self.is_valid_at(OffsetDateTime::now_utc())
    }

    pub fn is_self_issued(&self) -> bool {
        self.subject == self.issuer
    }
}
