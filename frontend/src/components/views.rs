//! 受保护的数据视图
//!
//! 图表渲染由独立的可视化组件负责，这里只提供挂载点。

use bookviz_shared::View;
use leptos::prelude::*;

#[component]
pub fn ViewPlaceholder(target: View) -> impl IntoView {
    view! {
        <section class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{target.title()}</h2>
                <div id=format!("view-{}", target.path().trim_start_matches('/')) class="min-h-96"></div>
            </div>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"页面未找到"</p>
            </div>
        </div>
    }
}
