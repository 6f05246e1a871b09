//! 我的金库组件
//!
//! 两个标签：自己的投稿（公开与私有，需登录，单独拉取）和
//! 浏览器本地的收藏。投稿支持删除与公开/私有切换，
//! 操作结果通过短暂的 toast 提示。

use crate::api::WtgApi;
use crate::auth::use_auth;
use crate::components::game_card::GameCard;
use crate::components::icons::{ArrowLeft, Eye, EyeOff, LogIn, Trash2};
use crate::games::use_games;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::web::Dom;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use wtg_shared::Game;

/// 投稿列表单次拉取的上限
const MY_GAMES_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VaultTab {
    Creations,
    Saved,
}

#[component]
pub fn MyVaultPage() -> impl IntoView {
    let auth = use_auth();
    let games_ctx = use_games();

    let (tab, set_tab) = signal(VaultTab::Creations);
    let (my_games, set_my_games) = signal(Vec::<Game>::new());
    let (loading_mine, set_loading_mine) = signal(false);
    let (notice, set_notice) = signal(Option::<String>::None);

    // 登录态就绪后拉取自己的投稿；注销时清空
    Effect::new(move |_| {
        if !auth.is_logged_in() {
            set_my_games.set(Vec::new());
            return;
        }
        set_loading_mine.set(true);
        spawn_local(async move {
            match WtgApi::get_my_games(0, MY_GAMES_LIMIT).await {
                Ok(records) => {
                    set_my_games.set(records.into_iter().map(Game::from_record).collect());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch my games: {e}").into());
                }
            }
            set_loading_mine.set(false);
        });
    });

    let show_notice = move |message: String| {
        set_notice.set(Some(message));
        set_timeout(move || set_notice.set(None), Duration::from_secs(3));
    };

    let on_delete = move |game: Game| {
        if !Dom::confirm(&format!("Delete \"{}\"? This cannot be undone.", game.name)) {
            return;
        }
        spawn_local(async move {
            match WtgApi::delete_game(&game.id).await {
                Ok(()) => {
                    set_my_games.update(|list| list.retain(|g| g.id != game.id));
                    games_ctx.remove_game(&game.id);
                    show_notice(format!("\"{}\" deleted", game.name));
                }
                Err(e) => show_notice(e.to_string()),
            }
        });
    };

    let on_toggle_visibility = move |game: Game| {
        let make_public = !game.is_public;
        spawn_local(async move {
            match WtgApi::set_game_visibility(&game.id, make_public).await {
                Ok(record) => {
                    let updated = Game::from_record(record);
                    set_my_games.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|g| g.id == updated.id) {
                            *slot = updated.clone();
                        }
                    });
                    show_notice(if make_public {
                        format!("\"{}\" is now public", game.name)
                    } else {
                        format!("\"{}\" is now private", game.name)
                    });
                }
                Err(e) => show_notice(e.to_string()),
            }
        });
    };

    let creations = move || -> AnyView {
        if !auth.is_logged_in() {
            return view! {
                <div class="card bg-base-100 shadow p-12 text-center">
                    <p class="text-base-content/50 text-lg mb-6">
                        "Sign in to see your own creations"
                    </p>
                    <button
                        class="btn btn-primary gap-2 mx-auto"
                        on:click=move |_| auth.open_login_modal()
                    >
                        <LogIn attr:class="h-4 w-4" />
                        "Sign In"
                    </button>
                </div>
            }
            .into_any();
        }
        if loading_mine.get() {
            return view! {
                <div class="text-center py-24">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            }
            .into_any();
        }
        let games = my_games.get();
        if games.is_empty() {
            return view! {
                <div class="text-center py-24 text-base-content/40 text-lg">
                    "You haven't added any games yet"
                </div>
            }
            .into_any();
        }
        view! {
            <div class="space-y-5">
                {games
                    .into_iter()
                    .map(|game| {
                        let delete_target = game.clone();
                        let visibility_target = game.clone();
                        let summary = format!(
                            "{}-{} players · {}",
                            game.player_count.min, game.player_count.max, game.duration
                        );
                        view! {
                            <div class="card bg-base-100 shadow p-6 flex-row items-center gap-6">
                                <Link
                                    to=AppRoute::GameDetail(game.id.clone())
                                    class="flex-1 flex items-center gap-6 cursor-pointer"
                                >
                                    <span class="text-4xl">{game.emoji.clone()}</span>
                                    <div>
                                        <h3 class="font-semibold text-lg">{game.name.clone()}</h3>
                                        <p class="text-base-content/40 mt-1">{summary}</p>
                                    </div>
                                </Link>
                                <div class="flex items-center gap-2">
                                    <span class=if game.is_public {
                                        "badge badge-ghost"
                                    } else {
                                        "badge badge-neutral"
                                    }>
                                        {if game.is_public { "Public" } else { "Private" }}
                                    </span>
                                    <button
                                        class="btn btn-ghost btn-sm btn-circle"
                                        title=if game.is_public { "Make private" } else { "Make public" }
                                        on:click=move |_| on_toggle_visibility(visibility_target.clone())
                                    >
                                        {if game.is_public {
                                            view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                                        } else {
                                            view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                                        }}
                                    </button>
                                    <button
                                        class="btn btn-ghost btn-sm btn-circle text-error"
                                        title="Delete"
                                        on:click=move |_| on_delete(delete_target.clone())
                                    >
                                        <Trash2 attr:class="h-4 w-4" />
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let saved = move || -> AnyView {
        let games = games_ctx.saved_games();
        if games.is_empty() {
            return view! {
                <div class="text-center py-24 text-base-content/40 text-lg">
                    "No saved games yet. Find some in the World Vault!"
                </div>
            }
            .into_any();
        }
        view! {
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-5">
                {games
                    .into_iter()
                    .map(|game| view! { <GameCard game=game /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="w-full min-h-screen px-6 py-10 md:px-12">
            <div class="max-w-6xl mx-auto">
                <header class="mb-10">
                    <Link to=AppRoute::Home class="inline-flex items-center gap-2 text-base-content/40 hover:text-base-content transition-colors mb-6">
                        <ArrowLeft attr:class="h-4 w-4" />
                        "Home"
                    </Link>
                    <h1 class="text-4xl font-semibold tracking-tight">"My Vault"</h1>
                    <p class="text-base-content/50 mt-2">"Your creations and saved games"</p>
                </header>

                <div role="tablist" class="tabs tabs-border mb-10">
                    <a
                        role="tab"
                        class=move || {
                            if tab.get() == VaultTab::Creations { "tab tab-active" } else { "tab" }
                        }
                        on:click=move |_| set_tab.set(VaultTab::Creations)
                    >
                        "My Creations"
                    </a>
                    <a
                        role="tab"
                        class=move || {
                            if tab.get() == VaultTab::Saved { "tab tab-active" } else { "tab" }
                        }
                        on:click=move |_| set_tab.set(VaultTab::Saved)
                    >
                        "Saved"
                    </a>
                </div>

                {move || match tab.get() {
                    VaultTab::Creations => creations(),
                    VaultTab::Saved => saved(),
                }}

                <Show when=move || notice.get().is_some()>
                    <div class="toast toast-end z-40">
                        <div class="alert alert-info shadow-lg">
                            <span>{move || notice.get().unwrap_or_default()}</span>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
