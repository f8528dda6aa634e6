use crate::api::BookVizApi;
use crate::auth::use_auth;
use crate::config::AppConfig;
use crate::web::router::{Link, use_router};
use bookviz_shared::{PATH_HOME, PATH_LOGIN, PATH_REGISTER, SessionGrant};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
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
            match api.login(name, secret).await {
                Ok(resp) => match auth.establish(&SessionGrant::from(resp)) {
                    Ok(()) => {
                        // Came here directly: go home. Otherwise the gated path re-resolves in place.
                        if router.requested().get_untracked() == PATH_LOGIN {
                            router.navigate(PATH_HOME);
                        }
                    }
                    Err(e) => set_error_msg.set(Some(format!("登录失败: {}", e))),
                },
                Err(e) => set_error_msg.set(Some(format!("登录失败: {}", e))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"登录"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "还没有账户？ "
                            <Link to=PATH_REGISTER class="link link-primary">"注册"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
