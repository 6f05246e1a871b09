//! 首页组件
//!
//! 概要页：本周游戏、"因为你赞了"推荐、收藏预览（最多三条）、
//! 两个金库入口、投稿入口和主题设置。

use crate::auth::{logout, use_auth};
use crate::components::icons::{ArrowUp, ChevronRight, Globe, Lock, LogIn, LogOut, Plus};
use crate::games::use_games;
use crate::theme::{Theme, use_theme};
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use wtg_shared::Game;

/// 收藏预览最多展示的条数
const SAVED_PREVIEW_LIMIT: usize = 3;

/// 收藏数超出预览条数时才显示"查看全部"入口
fn saved_overflows(total: usize) -> bool {
    total > SAVED_PREVIEW_LIMIT
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let games_ctx = use_games();
    let theme_ctx = use_theme();

    let username = move || {
        auth.state
            .with(|s| s.user.as_ref().map(|u| u.username.clone()))
            .unwrap_or_default()
    };

    let game_of_the_week = move || -> AnyView {
        if games_ctx.loading.get() {
            return view! {
                <div class="card bg-base-100 shadow p-10 text-center text-base-content/40">
                    <span class="loading loading-spinner loading-lg mx-auto"></span>
                </div>
            }
            .into_any();
        }
        match games_ctx.game_of_the_week() {
            Some(game) => {
                let upvotes = game.upvotes;
                view! {
                    <Link to=AppRoute::GameDetail(game.id.clone()) class="block">
                        <div class="card bg-base-100 shadow-xl p-10 cursor-pointer">
                            <div class="text-7xl text-center py-8">{game.emoji}</div>
                            <h3 class="text-3xl font-semibold text-center mt-4">{game.name}</h3>
                            <p class="text-base-content/50 text-center text-lg mt-3">
                                {game.description}
                            </p>
                            <div class="flex items-center justify-center gap-2 mt-8 text-base-content/30">
                                <ArrowUp attr:class="h-4 w-4" />
                                <span>{upvotes} " upvotes"</span>
                            </div>
                        </div>
                    </Link>
                }
                .into_any()
            }
            None => view! {
                <div class="card bg-base-100 shadow p-10 text-center text-base-content/40">
                    "No games yet. Be the first to add one!"
                </div>
            }
            .into_any(),
        }
    };

    // 推荐只有在存在点赞种子且有匹配时才出现
    let suggestion = move || -> Option<AnyView> {
        let seed = games_ctx.last_upvoted_game()?;
        let game = games_ctx.suggested_game()?;
        Some(
            view! {
                <section>
                    <h2 class="text-sm font-medium uppercase tracking-wider text-base-content/40 mb-5 px-1">
                        "Because you liked " {seed.name.clone()}
                    </h2>
                    <SavedPreviewRow game=game />
                </section>
            }
            .into_any(),
        )
    };

    let saved_preview = move || -> AnyView {
        let saved = games_ctx.saved_games();
        if saved.is_empty() {
            return view! {
                <div class="card bg-base-100 shadow p-10 text-center text-base-content/40 text-lg">
                    "No saved games yet"
                </div>
            }
            .into_any();
        }

        let total = saved.len();
        let preview: Vec<Game> = saved.into_iter().take(SAVED_PREVIEW_LIMIT).collect();
        view! {
            <div class="space-y-6">
                {preview
                    .into_iter()
                    .map(|game| view! { <SavedPreviewRow game=game /> })
                    .collect_view()}
                <Show when=move || saved_overflows(total)>
                    <Link to=AppRoute::SavedGames class="block">
                        <div class="text-center text-base-content/40 py-4 hover:text-base-content transition-colors">
                            "View all " {total} " saved games →"
                        </div>
                    </Link>
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="w-full min-h-screen flex flex-col items-center px-6 py-12 md:px-10 md:py-16">
            <div class="w-full max-w-lg">
                <header class="py-8 mb-12">
                    <div class="flex justify-end mb-4">
                        {move || if auth.is_logged_in() {
                            view! {
                                <button class="btn btn-ghost btn-sm gap-2" on:click=move |_| logout(&auth)>
                                    <LogOut attr:class="h-4 w-4" />
                                    <span>{username()}</span>
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button class="btn btn-ghost btn-sm gap-2" on:click=move |_| auth.open_login_modal()>
                                    <LogIn attr:class="h-4 w-4" />
                                    <span>"Sign In"</span>
                                </button>
                            }
                            .into_any()
                        }}
                    </div>
                    <div class="text-center">
                        <h1 class="text-5xl md:text-6xl font-semibold tracking-tight mb-4">
                            "What's That Game"
                        </h1>
                        <p class="text-base-content/50 text-xl">"Discover games worth playing"</p>
                    </div>
                </header>

                <div class="space-y-10">
                    <section>
                        <h2 class="text-sm font-medium uppercase tracking-wider text-base-content/40 mb-5 px-1">
                            "Game of the Week"
                        </h2>
                        {game_of_the_week}
                    </section>

                    {suggestion}

                    <section>
                        <h2 class="text-sm font-medium uppercase tracking-wider text-base-content/40 mb-5 px-1">
                            "Saved Games"
                        </h2>
                        {saved_preview}
                    </section>

                    <section>
                        <h2 class="text-sm font-medium uppercase tracking-wider text-base-content/40 mb-5 px-1">
                            "Vaults"
                        </h2>
                        <div class="space-y-6">
                            <Link to=AppRoute::MyVault class="block">
                                <div class="card bg-base-100 shadow p-8 cursor-pointer">
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <h3 class="font-semibold text-xl">"My Vault"</h3>
                                            <p class="text-base-content/40 mt-2">
                                                "Your personal game collection"
                                            </p>
                                        </div>
                                        <Lock attr:class="h-10 w-10 text-base-content/70" />
                                    </div>
                                </div>
                            </Link>
                            <Link to=AppRoute::WorldVault class="block">
                                <div class="card bg-base-100 shadow p-8 cursor-pointer">
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <h3 class="font-semibold text-xl">"World Vault"</h3>
                                            <p class="text-base-content/40 mt-2">
                                                "Discover community games"
                                            </p>
                                        </div>
                                        <Globe attr:class="h-10 w-10 text-base-content/70" />
                                    </div>
                                </div>
                            </Link>
                        </div>
                    </section>

                    <section>
                        <h2 class="text-sm font-medium uppercase tracking-wider text-base-content/40 mb-5 px-1">
                            "Theme"
                        </h2>
                        <div class="flex gap-3 flex-wrap">
                            {Theme::ALL
                                .iter()
                                .copied()
                                .map(|theme| {
                                    view! {
                                        <button
                                            class=move || {
                                                if theme_ctx.theme.get() == theme {
                                                    "btn btn-primary btn-sm"
                                                } else {
                                                    "btn btn-ghost btn-sm text-base-content/60"
                                                }
                                            }
                                            on:click=move |_| theme_ctx.set_theme(theme)
                                        >
                                            {theme.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <Link to=AppRoute::AddGame class="block mt-12">
                        <div class="card bg-base-100 shadow p-6 cursor-pointer flex-row items-center justify-center gap-3">
                            <Plus attr:class="h-5 w-5" />
                            <span class="font-semibold text-lg">"Add a Game"</span>
                        </div>
                    </Link>
                </div>

                <footer class="text-center text-base-content/30 mt-20 pb-10">
                    "A repository of games worth remembering"
                </footer>
            </div>
        </div>
    }
}

/// 收藏预览/推荐共用的单行条目
#[component]
fn SavedPreviewRow(game: Game) -> impl IntoView {
    let summary = format!(
        "{}-{} players · {}",
        game.player_count.min, game.player_count.max, game.duration
    );

    view! {
        <Link to=AppRoute::GameDetail(game.id.clone()) class="block">
            <div class="card bg-base-100 shadow p-6 flex-row items-center gap-6 cursor-pointer">
                <span class="text-4xl">{game.emoji}</span>
                <div class="flex-1">
                    <h3 class="font-semibold text-lg">{game.name}</h3>
                    <p class="text-base-content/40 mt-1">{summary}</p>
                </div>
                <ChevronRight attr:class="h-6 w-6 text-base-content/30" />
            </div>
        </Link>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_all_link_needs_more_than_the_preview() {
        assert!(!saved_overflows(0));
        assert!(!saved_overflows(SAVED_PREVIEW_LIMIT));
        assert!(saved_overflows(SAVED_PREVIEW_LIMIT + 1));
    }
}
