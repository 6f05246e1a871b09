//! 收藏列表组件
//!
//! 展示全部收藏，顺序跟随目录顺序。收藏为空时引导去世界金库。

use crate::components::game_card::GameCard;
use crate::components::icons::{ArrowLeft, Star};
use crate::games::use_games;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn SavedGamesPage() -> impl IntoView {
    let games_ctx = use_games();

    view! {
        <div class="w-full min-h-screen px-6 py-10 md:px-12">
            <div class="max-w-6xl mx-auto">
                <header class="mb-10">
                    <Link to=AppRoute::Home class="inline-flex items-center gap-2 text-base-content/40 hover:text-base-content transition-colors mb-6">
                        <ArrowLeft attr:class="h-4 w-4" />
                        "Home"
                    </Link>
                    <h1 class="text-4xl font-semibold tracking-tight">"Saved Games"</h1>
                    <p class="text-base-content/50 mt-2">"Games you've starred for later"</p>
                </header>

                {move || {
                    let games = games_ctx.saved_games();
                    if games.is_empty() {
                        return view! {
                            <div class="card bg-base-100 shadow p-14 text-center">
                                <Star attr:class="h-10 w-10 mx-auto mb-5 text-base-content/30" />
                                <p class="text-base-content/50 text-lg mb-6">
                                    "Nothing saved yet"
                                </p>
                                <Link to=AppRoute::WorldVault class="mx-auto">
                                    <span class="btn btn-primary">"Browse the World Vault"</span>
                                </Link>
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
                }}
            </div>
        </div>
    }
}
