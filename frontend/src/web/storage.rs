//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现领域层的 [`KeyValueStore`]。

use bookviz_shared::{GateError, GateResult, KeyValueStore};

/// 浏览器 LocalStorage
///
/// 零大小类型，可随意复制；每次操作时重新获取 `window.localStorage`，
/// 存储被禁用时返回 `StorageUnavailable` 而不是 panic。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage(operation: &'static str) -> GateResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| GateError::storage(operation, "no window object"))?;
        window
            .local_storage()
            .map_err(|e| GateError::storage(operation, format!("{e:?}")))?
            .ok_or_else(|| GateError::storage(operation, "localStorage is disabled"))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        Self::storage("get")?
            .get_item(key)
            .map_err(|e| GateError::storage("get", format!("{key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> GateResult<()> {
        Self::storage("set")?
            .set_item(key, value)
            .map_err(|e| GateError::storage("set", format!("{key}: {e:?}")))
    }

    fn remove(&self, key: &str) -> GateResult<()> {
        Self::storage("remove")?
            .remove_item(key)
            .map_err(|e| GateError::storage("remove", format!("{key}: {e:?}")))
    }
}
