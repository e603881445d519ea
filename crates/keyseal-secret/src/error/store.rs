use super::StoreError;

/// 存储相关的错误扩展
impl StoreError {
    pub fn already_exists(namespace: &str, name: &str) -> Self {
        StoreError::AlreadyExists {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }

    pub fn not_found(namespace: &str, name: &str) -> Self {
        StoreError::NotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }

    /// 锁错误
    pub fn lock_error(msg: impl std::fmt::Display) -> Self {
        StoreError::Lock(msg.to_string())
    }
}
