use thiserror::Error;

/// 路由守卫层的错误
///
/// 这里的错误都不是致命的：最坏的结果是重定向到登录页。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// 持久化存储无法读写（配额耗尽、被禁用等）
    #[error("storage unavailable during {operation}: {detail}")]
    StorageUnavailable { operation: &'static str, detail: String },

    /// 路由表中没有该路径，交给外层路由的 404 处理
    #[error("no route registered for `{0}`")]
    UnknownRoute(String),

    /// 登录凭据不可用（如空令牌），会话保持未认证
    #[error("invalid session grant: {0}")]
    InvalidGrant(String),

    /// 菜单动作不在定义的枚举范围内
    #[error("unrecognized menu action `{0}`")]
    InvalidMenuAction(String),
}

impl GateError {
    pub fn storage(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            operation,
            detail: detail.into(),
        }
    }
}

pub type GateResult<T> = Result<T, GateError>;
