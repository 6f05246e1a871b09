//! 游戏卡片组件
//!
//! 目录网格里的单张卡片：emoji、名称、人数时长摘要和点赞按钮。
//! 纯渲染，点赞意图转发给游戏集合上下文。

use crate::auth::use_auth;
use crate::components::icons::ArrowUp;
use crate::games::use_games;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use wtg_shared::Game;

#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let games_ctx = use_games();
    let auth = use_auth();

    let id = game.id.clone();
    let count_id = game.id.clone();
    let voted_id = game.id.clone();
    let link_to = AppRoute::GameDetail(game.id.clone());

    let vote_count = move || games_ctx.upvotes_for(&count_id);
    let has_upvoted = move || games_ctx.has_upvoted(&voted_id);

    // 卡片整体是链接，点赞按钮需要拦截冒泡
    let on_upvote = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        games_ctx.toggle_upvote(&auth, id.clone());
    };

    let summary = format!(
        "{}-{} players · {}",
        game.player_count.min, game.player_count.max, game.duration
    );

    view! {
        <Link to=link_to class="block">
            <div class="card bg-base-100 shadow-sm hover:shadow-lg hover:-translate-y-1 transition-all cursor-pointer aspect-[2.5/3.5]">
                <div class="card-body items-center justify-between p-5">
                    <div class="flex-1 flex items-center justify-center">
                        <span class="text-7xl drop-shadow-sm">{game.emoji}</span>
                    </div>

                    <div class="text-center space-y-1">
                        <h2 class="text-sm font-bold leading-tight">{game.name}</h2>
                        <p class="text-[11px] text-base-content/40">{summary}</p>
                    </div>

                    <button
                        on:click=on_upvote
                        class=move || {
                            if has_upvoted() {
                                "btn btn-primary btn-xs rounded-full gap-1.5"
                            } else {
                                "btn btn-ghost btn-xs rounded-full gap-1.5 text-base-content/50"
                            }
                        }
                    >
                        <ArrowUp attr:class="h-3 w-3" />
                        <span>{vote_count}</span>
                    </button>
                </div>
            </div>
        </Link>
    }
}
