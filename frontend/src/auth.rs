//! 认证模块
//!
//! 把领域层的 `SessionHolder` 接入 Leptos 的响应式系统。
//! 会话由 `App` 根部独占创建，其他组件只能通过 `AuthContext` 的方法修改它；
//! 路由服务通过注入的会话信号检查认证状态。

use bookviz_shared::{GateResult, MenuAction, Session, SessionGrant, SessionHolder, dispatch};
use leptos::prelude::*;

use crate::web::{BrowserNavigator, LocalStorage};

type BrowserSessionHolder = SessionHolder<LocalStorage, BrowserNavigator>;

/// 认证上下文
///
/// 包含会话的读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话（只读）
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    holder: BrowserSessionHolder,
}

impl AuthContext {
    /// 创建认证上下文并从 LocalStorage 同步初始化会话
    ///
    /// 必须在首次渲染前调用，且只调用一次。
    pub fn init() -> Self {
        let holder = SessionHolder::new(LocalStorage, BrowserNavigator);
        let (session, set_session) = signal(holder.initialize());
        Self {
            session,
            set_session,
            holder,
        }
    }

    /// 获取会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<Session> {
        let session = self.session;
        Signal::derive(move || session.get())
    }

    /// 账户菜单显示的名称
    pub fn display_label(&self) -> String {
        self.session.with(|s| s.display_label().to_string())
    }

    /// 登录成功回调：保存凭据并标记为已认证
    ///
    /// 登录页在每次成功登录时调用一次。
    pub fn establish(&self, grant: &SessionGrant) -> GateResult<()> {
        let holder = self.holder;
        let mut result = Ok(());
        self.set_session.update(|s| result = holder.establish(s, grant));
        result
    }

    /// 分发账户菜单动作
    pub fn dispatch(&self, action: MenuAction) {
        let holder = self.holder;
        self.set_session.update(|s| dispatch(action, &holder, s));
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
