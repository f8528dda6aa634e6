//! 持久化键值存储接口
//!
//! 浏览器中由 `localStorage` 实现，测试中由内存实现替代。

use crate::error::GateResult;

/// 同步的本地键值存储
///
/// 所有方法都是同步且本地的，不涉及网络。
pub trait KeyValueStore {
    /// 读取键值，键不存在时返回 `Ok(None)`
    fn get(&self, key: &str) -> GateResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> GateResult<()>;

    /// 删除键值，键不存在视为成功
    fn remove(&self, key: &str) -> GateResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GateResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> GateResult<()> {
        (**self).remove(key)
    }
}
