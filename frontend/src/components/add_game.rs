//! 投稿页面组件
//!
//! 表单选项来自元数据接口，接口不可用时退回内置选项，
//! 页面照常可用。提交需要登录，匿名提交只打开登录模态框。
//! 成功后把规范化的新记录并入目录并跳转世界金库。

pub mod form_state;

use crate::api::WtgApi;
use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Check};
use crate::games::use_games;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use form_state::GameFormState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wtg_shared::{Game, GameMetadata, GameType};

#[component]
pub fn AddGamePage() -> impl IntoView {
    let auth = use_auth();
    let games_ctx = use_games();
    let router = use_router();

    let form = GameFormState::new();
    let (metadata, set_metadata) = signal(GameMetadata::fallback());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // 选项列表以服务端元数据为准，失败保留内置回退
    spawn_local(async move {
        if let Ok(fetched) = WtgApi::get_game_metadata().await {
            set_metadata.set(fetched);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if !auth.is_logged_in_untracked() {
            auth.open_login_modal();
            return;
        }

        set_error_msg.set(None);
        set_is_submitting.set(true);
        let request = form.to_request();

        spawn_local(async move {
            match WtgApi::create_game(&request).await {
                Ok(record) => {
                    games_ctx.games.update(|list| list.push(Game::from_record(record)));
                    form.reset();
                    router.navigate(AppRoute::WorldVault);
                }
                Err(e) => {
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let on_min_players = move |ev: leptos::web_sys::Event| {
        if let Ok(n) = event_target_value(&ev).parse::<u32>() {
            form.min_players.set(n);
        }
    };
    let on_max_players = move |ev: leptos::web_sys::Event| {
        if let Ok(n) = event_target_value(&ev).parse::<u32>() {
            form.max_players.set(n);
        }
    };

    view! {
        <div class="w-full min-h-screen px-6 py-10 md:px-12">
            <div class="max-w-2xl mx-auto">
                <header class="mb-10">
                    <Link to=AppRoute::Home class="inline-flex items-center gap-2 text-base-content/40 hover:text-base-content transition-colors mb-6">
                        <ArrowLeft attr:class="h-4 w-4" />
                        "Home"
                    </Link>
                    <h1 class="text-4xl font-semibold tracking-tight">"Add a Game"</h1>
                    <p class="text-base-content/50 mt-2">
                        "Share a game worth remembering with the community"
                    </p>
                </header>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2 mb-6">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <form class="space-y-6" on:submit=on_submit>
                    <div class="grid grid-cols-[1fr_6rem] gap-4">
                        <div class="form-control">
                            <label class="label" for="game-name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="game-name"
                                type="text"
                                placeholder="Werewolf"
                                required
                                on:input=move |ev| form.name.set(event_target_value(&ev))
                                prop:value=form.name
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="game-emoji">
                                <span class="label-text">"Emoji"</span>
                            </label>
                            <input
                                id="game-emoji"
                                type="text"
                                placeholder="🎲"
                                on:input=move |ev| form.emoji.set(event_target_value(&ev))
                                prop:value=form.emoji
                                class="input input-bordered w-full text-center"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="game-description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="game-description"
                            placeholder="One or two sentences about the game"
                            required
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                            prop:value=form.description
                            class="textarea textarea-bordered w-full h-20"
                        ></textarea>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="game-type">
                                <span class="label-text">"Type"</span>
                            </label>
                            <select
                                id="game-type"
                                required
                                on:change=move |ev| form.game_type.set(event_target_value(&ev))
                                prop:value=form.game_type
                                class="select select-bordered w-full"
                            >
                                <option value="" disabled selected>"Pick a type"</option>
                                {move || {
                                    metadata
                                        .get()
                                        .game_types
                                        .into_iter()
                                        .map(|value| {
                                            let label = GameType::parse(&value)
                                                .map(|t| t.label().to_string())
                                                .unwrap_or_else(|| value.clone());
                                            view! { <option value=value>{label}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="game-age">
                                <span class="label-text">"Age rating"</span>
                            </label>
                            <select
                                id="game-age"
                                required
                                on:change=move |ev| form.age_rating.set(event_target_value(&ev))
                                prop:value=form.age_rating
                                class="select select-bordered w-full"
                            >
                                <option value="" disabled selected>"Pick a rating"</option>
                                {move || {
                                    metadata
                                        .get()
                                        .age_ratings
                                        .into_iter()
                                        .map(|value| {
                                            let label = value.clone();
                                            view! { <option value=value>{label}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                    </div>

                    <div class="grid grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label" for="game-min-players">
                                <span class="label-text">"Min players"</span>
                            </label>
                            <input
                                id="game-min-players"
                                type="number"
                                min="1"
                                required
                                on:input=on_min_players
                                prop:value=move || form.min_players.get().to_string()
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="game-max-players">
                                <span class="label-text">"Max players"</span>
                            </label>
                            <input
                                id="game-max-players"
                                type="number"
                                min="1"
                                required
                                on:input=on_max_players
                                prop:value=move || form.max_players.get().to_string()
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="game-duration">
                                <span class="label-text">"Duration"</span>
                            </label>
                            <input
                                id="game-duration"
                                type="text"
                                placeholder="30 min"
                                on:input=move |ev| form.duration.set(event_target_value(&ev))
                                prop:value=form.duration
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <span class="label-text mb-2 block">"Equipment"</span>
                        <div class="flex gap-2 flex-wrap">
                            {move || {
                                metadata
                                    .get()
                                    .equipment
                                    .into_iter()
                                    .map(|item| {
                                        let toggle_item = item.clone();
                                        let check_item = item.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    let selected = form
                                                        .equipment
                                                        .with(|l| l.iter().any(|e| *e == check_item));
                                                    if selected {
                                                        "btn btn-primary btn-sm"
                                                    } else {
                                                        "btn btn-ghost btn-sm text-base-content/60"
                                                    }
                                                }
                                                on:click=move |_| form.toggle_equipment(&toggle_item)
                                            >
                                                {item}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>

                    <div class="form-control">
                        <span class="label-text mb-2 block">"Themes"</span>
                        <div class="flex gap-2 flex-wrap">
                            {move || {
                                metadata
                                    .get()
                                    .themes
                                    .into_iter()
                                    .map(|item| {
                                        let toggle_item = item.clone();
                                        let check_item = item.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    let selected = form
                                                        .themes
                                                        .with(|l| l.iter().any(|t| *t == check_item));
                                                    if selected {
                                                        "btn btn-primary btn-sm"
                                                    } else {
                                                        "btn btn-ghost btn-sm text-base-content/60"
                                                    }
                                                }
                                                on:click=move |_| form.toggle_theme(&toggle_item)
                                            >
                                                {item}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="game-rules">
                            <span class="label-text">"How to play"</span>
                        </label>
                        <textarea
                            id="game-rules"
                            placeholder="Explain the rules step by step"
                            required
                            on:input=move |ev| form.rules.set(event_target_value(&ev))
                            prop:value=form.rules
                            class="textarea textarea-bordered w-full h-36"
                        ></textarea>
                    </div>

                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="checkbox"
                            prop:checked=form.is_public
                            on:change=move |_| form.is_public.update(|v| *v = !*v)
                        />
                        <span class="label-text">"List this game in the World Vault"</span>
                    </label>

                    <button
                        type="submit"
                        disabled=move || is_submitting.get() || !form.is_complete()
                        class="btn btn-primary w-full gap-2"
                    >
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Submitting..." }
                                .into_any()
                        } else {
                            view! { <Check attr:class="h-4 w-4" /> "Add Game" }.into_any()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
