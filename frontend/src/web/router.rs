//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API 与 Location API：
//! 所有对 window.history / window.location 的操作都集中在此模块。
//! 实现了"监听 -> 守卫 -> 渲染 -> 同步地址栏"的导航流程，
//! 守卫本身由领域层的 [`resolve`] 完成。

use bookviz_shared::route::{RouteEntry, normalize_path};
use bookviz_shared::{GateError, GateResult, Navigator, RenderDecision, Session, View, resolve};
use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| normalize_path(&p).to_string())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（软导航）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向，不产生新的历史记录）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 浏览器整页跳转
///
/// 设置 `location.href`，丢弃当前应用的全部内存状态。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_navigate(&self, path: &str) {
        info!("[Router] Hard navigation to {path}");
        let Some(window) = web_sys::window() else {
            warn!("[Router] No window object; cannot navigate to {path}");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            warn!("[Router] Hard navigation to {path} failed: {e:?}");
        }
    }
}

/// 路由器服务
///
/// 记录用户请求的路径，并通过注入的会话信号实时计算守卫结果。
/// 会话变化（登录/登出）时守卫结果自动重新计算，无需刷新页面。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 用户请求的路径（只读信号）
    requested: ReadSignal<String>,
    /// 设置请求路径（写入信号）
    set_requested: WriteSignal<String>,
    /// 当前路径在当前会话下的守卫结果
    decision: Memo<GateResult<RenderDecision>>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `session` - 会话信号，由外部注入实现解耦
    fn new(session: Signal<Session>) -> Self {
        let (requested, set_requested) = signal(current_path());
        let decision =
            Memo::new(move |_| requested.with(|path| session.with(|s| resolve(path, s))));

        Self {
            requested,
            set_requested,
            decision,
        }
    }

    pub fn requested(&self) -> ReadSignal<String> {
        self.requested
    }

    pub fn decision(&self) -> Memo<GateResult<RenderDecision>> {
        self.decision
    }

    /// **核心方法：软导航**
    ///
    /// 只更新请求路径，守卫结果由 `decision` 自动推导。
    pub fn navigate(&self, path: &str) {
        let path = normalize_path(path).to_string();
        if self.requested.with_untracked(|current| *current == path) {
            return;
        }
        debug!("[Router] Navigating to {path}");
        push_history_state(&path);
        self.set_requested.set(path);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_requested = self.set_requested;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_requested.set(current_path());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 让地址栏跟随守卫结果
    ///
    /// 重定向时显示登录页地址，但保留请求路径；
    /// 登录后守卫放行，地址栏恢复为原请求路径。
    fn sync_address_bar(&self) {
        let requested = self.requested;
        let decision = self.decision;

        Effect::new(move |_| {
            let Ok(outcome) = decision.get() else {
                return;
            };
            requested.with_untracked(|path| {
                let location = outcome.location(path);
                if current_path() != location {
                    if outcome.is_redirect() {
                        info!("[Router] Access denied to {path}. Showing login.");
                    } else {
                        info!("[Router] Access granted to {path}.");
                    }
                    replace_history_state(location);
                }
            });
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: Signal<Session>) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.sync_address_bar();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 会话信号
    session: Signal<Session>,
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 根据守卫结果渲染对应的视图；未注册的路径交给 `fallback`。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收视图，返回对应组件
    matcher: fn(View) -> AnyView,
    /// 未知路径时的视图
    fallback: fn() -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.decision().get() {
        Ok(RenderDecision::Render(target)) => matcher(target),
        Ok(RenderDecision::Redirect(target)) => match RouteEntry::lookup(target) {
            Some(entry) => matcher(entry.view),
            None => fallback(),
        },
        Err(GateError::UnknownRoute(path)) => {
            debug!("[Router] No route for {path}");
            fallback()
        }
        Err(e) => {
            warn!("[Router] {e}");
            fallback()
        }
    }
}

/// 软导航链接
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
