//! 页面框架：顶栏、账户菜单、侧边导航

use crate::auth::use_auth;
use crate::web::router::Link;
use bookviz_shared::{MenuAction, View};
use leptos::prelude::*;
use log::error;
use wasm_bindgen::JsCast;

/// 侧边栏中直接展示的视图
const SIDEBAR_TOP: &[View] = &[View::Books];
/// "数据分析" 分组
const SIDEBAR_ANALYSIS: &[View] = &[View::BooksByDecadeChart, View::BooksByYearChart];
const SIDEBAR_REST: &[View] = &[
    View::BooksByPublisherChart,
    View::ScatterPlotByYearAndRating,
    View::WordCloud,
    View::Profile,
];

fn nav_items(views: &'static [View]) -> impl IntoView {
    views
        .iter()
        .map(|v| {
            view! {
                <li>
                    <Link to=v.path()>{v.title()}</Link>
                </li>
            }
        })
        .collect_view()
}

/// 从点击事件中找到菜单项的 `data-action`
fn clicked_action_key(ev: &leptos::ev::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    target
        .closest("[data-action]")
        .ok()??
        .get_attribute("data-action")
}

/// 账户下拉菜单
///
/// 菜单项只携带动作键，点击时解析为 [`MenuAction`] 再分发。
/// 无法识别的键不会被执行。
#[component]
fn AccountMenu() -> impl IntoView {
    let auth = use_auth();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(key) = clicked_action_key(&ev) else {
            return;
        };
        ev.prevent_default();
        match key.parse::<MenuAction>() {
            Ok(action) => auth.dispatch(action),
            Err(e) => {
                error!("[Menu] {e}");
                if cfg!(debug_assertions) {
                    panic!("account menu produced an undefined action: {e}");
                }
            }
        }
    };

    view! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost text-white">
                {move || auth.display_label()} " ▾"
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-40" on:click=on_click>
                {MenuAction::ALL
                    .into_iter()
                    .map(|action| view! {
                        <li><a data-action=action.key()>{action.label()}</a></li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// 应用外框
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <header class="navbar bg-neutral text-neutral-content px-5 justify-between">
                <div class="text-xl font-bold">"豆瓣读书数据可视化"</div>
                <AccountMenu />
            </header>
            <div class="flex flex-1">
                <aside class="w-52 bg-base-100">
                    <ul class="menu">
                        {nav_items(SIDEBAR_TOP)}
                        <li>
                            <details open>
                                <summary>"数据分析"</summary>
                                <ul>{nav_items(SIDEBAR_ANALYSIS)}</ul>
                            </details>
                        </li>
                        {nav_items(SIDEBAR_REST)}
                    </ul>
                </aside>
                <main class="flex-1 px-12 py-4">{children()}</main>
            </div>
        </div>
    }
}
