//! BookViz 领域层
//!
//! 不依赖 DOM 或 `web_sys` 的纯业务逻辑：
//! - `route`: 路由表与访问守卫（Route Gate）
//! - `session`: 会话状态持有者（Session State Holder）
//! - `menu`: 账户菜单动作分发
//! - `storage` / `navigation`: 由前端注入的持久化存储与整页跳转接口
//! - `protocol`: 与后端交互的请求/响应定义

pub mod error;
pub mod menu;
pub mod navigation;
pub mod protocol;
pub mod route;
pub mod session;
pub mod storage;

#[cfg(test)]
pub(crate) mod mock;

pub use error::{GateError, GateResult};
pub use menu::{MenuAction, dispatch};
pub use navigation::Navigator;
pub use route::{RenderDecision, RouteEntry, View, resolve};
pub use session::{Session, SessionGrant, SessionHolder, SessionState};
pub use storage::KeyValueStore;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话令牌的持久化键（由登录流程写入）
pub const KEY_SESSION_TOKEN: &str = "token";
/// 账户显示名的持久化键（仅用于展示）
pub const KEY_DISPLAY_NAME: &str = "username";

/// 未登录或未知用户时显示的名称
pub const GUEST_LABEL: &str = "Guest";

/// 登录入口，所有被拒绝的访问都重定向到这里
pub const PATH_LOGIN: &str = "/login";
pub const PATH_REGISTER: &str = "/register";
pub const PATH_HOME: &str = "/";
pub const PATH_PROFILE: &str = "/profile";
