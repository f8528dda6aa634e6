//! BookViz 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `bookviz_shared::route`: 路由表与守卫（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod layout;
    pub mod login;
    pub mod register;
    pub mod views;
}
mod config;

use crate::auth::AuthContext;
use crate::components::layout::AppShell;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::views::{NotFound, ViewPlaceholder};

use bookviz_shared::View;
use leptos::prelude::*;

// 浏览器原生 API 封装模块
// 对 History / Location / LocalStorage 的访问都集中在这里。
pub(crate) mod web {
    pub mod router;
    mod storage;

    pub use router::BrowserNavigator;
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 守卫放行后，根据视图返回对应的组件。
fn route_matcher(target: View) -> AnyView {
    match target {
        View::Login => view! { <LoginPage /> }.into_any(),
        View::Register => view! { <RegisterPage /> }.into_any(),
        View::Books
        | View::BooksByDecadeChart
        | View::BooksByYearChart
        | View::BooksByPublisherChart
        | View::ScatterPlotByYearAndRating
        | View::WordCloud
        | View::Dialogue
        | View::Profile => view! { <ViewPlaceholder target=target /> }.into_any(),
    }
}

fn not_found() -> AnyView {
    view! { <NotFound /> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（首次渲染前同步读取 LocalStorage）
    let auth_ctx = AuthContext::init();
    provide_context(auth_ctx);

    // 2. 获取会话信号，用于注入路由服务（解耦！）
    let session = auth_ctx.session_signal();

    view! {
        // 3. 路由器组件：注入会话信号实现守卫
        <Router session=session>
            <AppShell>
                <RouterOutlet matcher=route_matcher fallback=not_found />
            </AppShell>
        </Router>
    }
}
