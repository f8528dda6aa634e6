use crate::api::BookVizApi;
use crate::config::AppConfig;
use crate::web::router::{Link, use_router};
use bookviz_shared::PATH_LOGIN;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();
    let api = BookVizApi::new(&AppConfig::from_env());

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("请输入用户名和密码".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let (name, secret) = (username.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match api.register(name, secret).await {
                Ok(()) => router.navigate(PATH_LOGIN),
                Err(e) => set_error_msg.set(Some(format!("注册失败: {}", e))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"注册"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <input
                            type="text"
                            placeholder="用户名"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="input input-bordered"
                            required
                        />
                        <input
                            type="password"
                            placeholder="密码"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                            required
                        />
                        <button class="btn btn-primary mt-4" disabled=move || is_submitting.get()>
                            "注册"
                        </button>
                        <p class="text-sm text-center">
                            <Link to=PATH_LOGIN class="link">"返回登录"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
