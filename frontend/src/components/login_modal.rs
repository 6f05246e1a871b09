//! 登录模态框组件
//!
//! 全局唯一的登录/注册入口，由认证上下文的可见标志驱动。
//! 登录与注册共用一个表单，切换模式时清空全部字段。

use crate::auth::{login, signup, use_auth};
use crate::components::icons::{Close, LogIn, UserRound};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = use_auth();

    let (is_sign_up, set_is_sign_up) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // 登录字段
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    // 注册字段
    let (firstname, set_firstname) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (country, set_country) = signal(String::new());

    let switch_mode = move |_| {
        set_is_sign_up.update(|v| *v = !*v);
        set_error_msg.set(None);
        set_username.set(String::new());
        set_password.set(String::new());
        set_firstname.set(String::new());
        set_lastname.set(String::new());
        set_email.set(String::new());
        set_country.set(String::new());
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_is_submitting.set(true);

        spawn_local(async move {
            let result = if is_sign_up.get_untracked() {
                signup(
                    &auth,
                    &firstname.get_untracked(),
                    &lastname.get_untracked(),
                    &email.get_untracked(),
                    &username.get_untracked(),
                    &password.get_untracked(),
                    &country.get_untracked(),
                )
                .await
            } else {
                login(&auth, &username.get_untracked(), &password.get_untracked()).await
            };

            if let Err(e) = result {
                set_error_msg.set(Some(e));
            }
            set_is_submitting.set(false);
        });
    };

    let visible = move || auth.state.get().show_login_modal;

    view! {
        <Show when=visible>
            <div class="fixed inset-0 z-50 flex items-center justify-center px-6 py-6">
                // 背景遮罩，点击关闭
                <div
                    class="fixed inset-0 bg-black/30 backdrop-blur-sm"
                    on:click=move |_| auth.close_login_modal()
                ></div>

                <div class="card bg-base-100 shadow-2xl p-10 w-full max-w-md relative">
                    <button
                        class="btn btn-ghost btn-sm btn-circle absolute top-4 right-4"
                        on:click=move |_| auth.close_login_modal()
                    >
                        <Close attr:class="h-5 w-5" />
                    </button>

                    <div class="text-center mb-8">
                        {move || if is_sign_up.get() {
                            view! { <UserRound attr:class="h-12 w-12 mx-auto mb-4 text-base-content/70" /> }.into_any()
                        } else {
                            view! { <LogIn attr:class="h-12 w-12 mx-auto mb-4 text-base-content/70" /> }.into_any()
                        }}
                        <h2 class="text-3xl font-semibold">
                            {move || if is_sign_up.get() { "Sign Up" } else { "Sign In" }}
                        </h2>
                        <p class="text-base-content/50 mt-2">
                            {move || if is_sign_up.get() {
                                "Create an account to contribute"
                            } else {
                                "Sign in to upvote games"
                            }}
                        </p>
                    </div>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-6">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form class="space-y-5" on:submit=on_submit>
                        <Show when=move || is_sign_up.get()>
                            <div class="grid grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label" for="firstname">
                                        <span class="label-text">"First Name"</span>
                                    </label>
                                    <input
                                        id="firstname"
                                        type="text"
                                        placeholder="John"
                                        required
                                        on:input=move |ev| set_firstname.set(event_target_value(&ev))
                                        prop:value=firstname
                                        class="input input-bordered w-full"
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="lastname">
                                        <span class="label-text">"Last Name"</span>
                                    </label>
                                    <input
                                        id="lastname"
                                        type="text"
                                        placeholder="Doe"
                                        required
                                        on:input=move |ev| set_lastname.set(event_target_value(&ev))
                                        prop:value=lastname
                                        class="input input-bordered w-full"
                                    />
                                </div>
                            </div>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="you@example.com"
                                    required
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered w-full"
                                />
                            </div>

                            <div class="form-control">
                                <label class="label" for="country">
                                    <span class="label-text">"Country"</span>
                                </label>
                                <input
                                    id="country"
                                    type="text"
                                    placeholder="Your country"
                                    on:input=move |ev| set_country.set(event_target_value(&ev))
                                    prop:value=country
                                    class="input input-bordered w-full"
                                />
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="username"
                                required
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                required
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered w-full"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || is_submitting.get()
                            class="btn btn-primary w-full mt-2"
                        >
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Loading..." }.into_any()
                            } else if is_sign_up.get() {
                                "Sign Up".into_any()
                            } else {
                                "Sign In".into_any()
                            }}
                        </button>
                    </form>

                    <p class="text-center text-base-content/40 text-sm mt-6">
                        {move || if is_sign_up.get() {
                            "Already have an account? "
                        } else {
                            "Don't have an account? "
                        }}
                        <button class="link link-hover" on:click=switch_mode>
                            {move || if is_sign_up.get() { "Sign in" } else { "Sign up" }}
                        </button>
                    </p>
                </div>
            </div>
        </Show>
    }
}
