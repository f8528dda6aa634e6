//! 会话状态模块
//!
//! `Session` 是唯一的有状态实体，由应用根实例独占持有；
//! `SessionHolder` 是修改它的唯一入口，同时负责与持久化存储保持一致。

use log::{info, warn};

use crate::error::{GateError, GateResult};
use crate::navigation::Navigator;
use crate::storage::KeyValueStore;
use crate::{GUEST_LABEL, KEY_DISPLAY_NAME, KEY_SESSION_TOKEN, PATH_LOGIN};


/// 会话状态机的两个状态，可无限循环切换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// 会话
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    display_name: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn state(&self) -> SessionState {
        if self.authenticated {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// 账户菜单上显示的名称，没有存储显示名时为 `"Guest"`
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(GUEST_LABEL)
    }
}

/// 登录成功后后端发放的凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub token: String,
    pub display_name: Option<String>,
}

/// 会话状态持有者
///
/// 通过注入的存储和导航实现与浏览器解耦。本身不持有 `Session`，
/// 只对调用方传入的会话做状态转换，保证会话的所有权留在应用根部。
#[derive(Debug, Clone, Copy)]
pub struct SessionHolder<S, N> {
    store: S,
    navigator: N,
}

impl<S: KeyValueStore, N: Navigator> SessionHolder<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// 从持久化存储初始化会话
    ///
    /// 令牌存在且非空即视为已认证。读取失败按未认证处理。
    pub fn initialize(&self) -> Session {
        let authenticated = match self.store.get(KEY_SESSION_TOKEN) {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                warn!("[Auth] {e}; starting anonymous");
                false
            }
        };

        let session = Session {
            authenticated,
            display_name: self.read_display_name(),
        };
        info!("[Auth] Session initialized as {:?}", session.state());
        session
    }

    /// 标记为已认证（幂等）
    pub fn mark_authenticated(&self, session: &mut Session) {
        if !session.authenticated {
            info!("[Auth] Session authenticated.");
        }
        session.authenticated = true;
        session.display_name = self.read_display_name();
    }

    /// 持久化登录凭据，然后标记为已认证
    ///
    /// 令牌写入失败时会话保持未认证，保证认证状态与存储中的令牌一致。
    pub fn establish(&self, session: &mut Session, grant: &SessionGrant) -> GateResult<()> {
        if grant.token.is_empty() {
            return Err(GateError::InvalidGrant("empty session token".to_string()));
        }
        self.store.set(KEY_SESSION_TOKEN, &grant.token)?;

        let name_result = match grant.display_name.as_deref() {
            Some(name) if !name.is_empty() => self.store.set(KEY_DISPLAY_NAME, name),
            _ => self.store.remove(KEY_DISPLAY_NAME),
        };
        if let Err(e) = name_result {
            warn!("[Auth] {e}; display name not cached");
        }

        self.mark_authenticated(session);
        Ok(())
    }

    /// 清除会话并整页跳转到登录页
    ///
    /// 存储删除失败不会阻止登出：状态仍切换为未认证，失败仅记录警告。
    pub fn clear(&self, session: &mut Session) {
        for key in [KEY_SESSION_TOKEN, KEY_DISPLAY_NAME] {
            if let Err(e) = self.store.remove(key) {
                warn!("[Auth] {e}; logging out anyway");
            }
        }
        session.authenticated = false;
        session.display_name = None;
        info!("[Auth] Session cleared.");

        self.navigator.hard_navigate(PATH_LOGIN);
    }

    fn read_display_name(&self) -> Option<String> {
        match self.store.get(KEY_DISPLAY_NAME) {
            Ok(name) => name.filter(|n| !n.is_empty()),
            Err(e) => {
                warn!("[Auth] {e}; falling back to guest label");
                None
            }
        }
    }
}
