//! 世界金库组件
//!
//! 公开目录页：文本搜索、类型筛选、聚会人数筛选和
//! 全部/最新/热门三个标签，全部在内存列表上即时计算。
//! "随机来一个"在当前筛选结果内等概率挑选并跳转详情。

use crate::components::game_card::GameCard;
use crate::components::icons::{ArrowLeft, Search, Shuffle};
use crate::games::use_games;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use wtg_shared::{Game, GameType};

/// 目录排序标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VaultTab {
    All,
    New,
    Trending,
}

impl VaultTab {
    const ALL: [VaultTab; 3] = [VaultTab::All, VaultTab::New, VaultTab::Trending];

    const fn label(&self) -> &'static str {
        match self {
            VaultTab::All => "All",
            VaultTab::New => "New",
            VaultTab::Trending => "Trending",
        }
    }
}

/// 按当前筛选条件求可见列表
///
/// 搜索对名称与描述做大小写不敏感的子串匹配；人数筛选要求
/// 聚会人数落在游戏的人数区间内；标签只改变排序，`New` 按
/// 创建时间倒序（缺失时间的排后），`Trending` 按赞数倒序。
fn visible_games(
    games: &[Game],
    query: &str,
    type_filter: Option<GameType>,
    party_size: Option<u32>,
    tab: VaultTab,
) -> Vec<Game> {
    let query = query.trim().to_lowercase();

    let mut result: Vec<Game> = games
        .iter()
        .filter(|g| {
            if !query.is_empty()
                && !g.name.to_lowercase().contains(&query)
                && !g.description.to_lowercase().contains(&query)
            {
                return false;
            }
            if let Some(t) = type_filter {
                if g.game_type != t {
                    return false;
                }
            }
            if let Some(n) = party_size {
                if !g.player_count.fits(n) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    match tab {
        VaultTab::All => {}
        VaultTab::New => {
            result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        VaultTab::Trending => {
            result.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
        }
    }
    result
}

#[component]
pub fn WorldVaultPage() -> impl IntoView {
    let games_ctx = use_games();
    let router = use_router();

    let (query, set_query) = signal(String::new());
    let (type_filter, set_type_filter) = signal(Option::<GameType>::None);
    let (party_size_input, set_party_size_input) = signal(String::new());
    let (tab, set_tab) = signal(VaultTab::All);

    let party_size = move || party_size_input.get().trim().parse::<u32>().ok();

    let filtered = move || {
        games_ctx.games.with(|games| {
            visible_games(games, &query.get(), type_filter.get(), party_size(), tab.get())
        })
    };

    // 随机跳转在筛选结果内取样，空结果时无动作
    let on_random = move |_| {
        let candidates = filtered();
        if candidates.is_empty() {
            return;
        }
        let index = (js_sys::Math::random() * candidates.len() as f64) as usize;
        let index = index.min(candidates.len() - 1);
        router.navigate(AppRoute::GameDetail(candidates[index].id.clone()));
    };

    view! {
        <div class="w-full min-h-screen px-6 py-10 md:px-12">
            <div class="max-w-6xl mx-auto">
                <header class="mb-10">
                    <Link to=AppRoute::Home class="inline-flex items-center gap-2 text-base-content/40 hover:text-base-content transition-colors mb-6">
                        <ArrowLeft attr:class="h-4 w-4" />
                        "Home"
                    </Link>
                    <div class="flex items-center justify-between gap-4 flex-wrap">
                        <div>
                            <h1 class="text-4xl font-semibold tracking-tight">"World Vault"</h1>
                            <p class="text-base-content/50 mt-2">"Games from the community"</p>
                        </div>
                        <button class="btn btn-ghost gap-2" on:click=on_random>
                            <Shuffle attr:class="h-4 w-4" />
                            "Surprise me"
                        </button>
                    </div>
                </header>

                <div class="space-y-5 mb-10">
                    <label class="input input-bordered flex items-center gap-3 w-full max-w-xl">
                        <Search attr:class="h-4 w-4 text-base-content/40" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Search games..."
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            prop:value=query
                        />
                    </label>

                    <div class="flex items-center gap-2 flex-wrap">
                        <button
                            class=move || {
                                if type_filter.get().is_none() {
                                    "btn btn-primary btn-sm"
                                } else {
                                    "btn btn-ghost btn-sm text-base-content/60"
                                }
                            }
                            on:click=move |_| set_type_filter.set(None)
                        >
                            "All types"
                        </button>
                        {GameType::ALL
                            .iter()
                            .copied()
                            .map(|game_type| {
                                view! {
                                    <button
                                        class=move || {
                                            if type_filter.get() == Some(game_type) {
                                                "btn btn-primary btn-sm"
                                            } else {
                                                "btn btn-ghost btn-sm text-base-content/60"
                                            }
                                        }
                                        on:click=move |_| set_type_filter.set(Some(game_type))
                                    >
                                        {game_type.label()}
                                    </button>
                                }
                            })
                            .collect_view()}

                        <input
                            type="number"
                            min="1"
                            class="input input-bordered input-sm w-36 ml-auto"
                            placeholder="Party size"
                            on:input=move |ev| set_party_size_input.set(event_target_value(&ev))
                            prop:value=party_size_input
                        />
                    </div>

                    <div role="tablist" class="tabs tabs-border">
                        {VaultTab::ALL
                            .iter()
                            .copied()
                            .map(|t| {
                                view! {
                                    <a
                                        role="tab"
                                        class=move || {
                                            if tab.get() == t { "tab tab-active" } else { "tab" }
                                        }
                                        on:click=move |_| set_tab.set(t)
                                    >
                                        {t.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {move || {
                    if games_ctx.loading.get() {
                        return view! {
                            <div class="text-center py-24">
                                <span class="loading loading-spinner loading-lg"></span>
                            </div>
                        }
                        .into_any();
                    }
                    let games = filtered();
                    if games.is_empty() {
                        return view! {
                            <div class="text-center py-24 text-base-content/40 text-lg">
                                "No games match your filters"
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use wtg_shared::PlayerRange;

    fn game(id: &str, upvotes: u32, game_type: GameType, day: u32) -> Game {
        Game {
            id: id.to_string(),
            name: format!("Game {id}"),
            emoji: "🎲".to_string(),
            description: format!("Description of {id}"),
            age_rating: "12+".to_string(),
            game_type,
            player_count: PlayerRange { min: 2, max: 6 },
            duration: "30 min".to_string(),
            equipment: vec![],
            themes: vec![],
            rules: String::new(),
            upvotes,
            downvotes: 0,
            contributor_name: "tester".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).single(),
            is_public: true,
        }
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let games = vec![game("a", 0, GameType::Card, 1), game("b", 0, GameType::Dice, 2)];
        let hits = visible_games(&games, "GAME A", None, None, VaultTab::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");

        let hits = visible_games(&games, "description of b", None, None, VaultTab::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn type_and_party_size_filters_compose() {
        let mut narrow = game("a", 0, GameType::Card, 1);
        narrow.player_count = PlayerRange { min: 2, max: 4 };
        let games = vec![narrow, game("b", 0, GameType::Card, 2), game("c", 0, GameType::Dice, 3)];

        let hits = visible_games(&games, "", Some(GameType::Card), Some(5), VaultTab::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn trending_sorts_by_upvotes_descending() {
        let games = vec![
            game("a", 3, GameType::Card, 1),
            game("b", 9, GameType::Card, 2),
            game("c", 5, GameType::Card, 3),
        ];
        let ids: Vec<String> = visible_games(&games, "", None, None, VaultTab::Trending)
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn new_sorts_by_created_at_descending_with_missing_last() {
        let mut undated = game("u", 0, GameType::Card, 1);
        undated.created_at = None;
        let games = vec![undated, game("old", 0, GameType::Card, 1), game("new", 0, GameType::Card, 9)];
        let ids: Vec<String> = visible_games(&games, "", None, None, VaultTab::New)
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, ["new", "old", "u"]);
    }

    #[test]
    fn all_tab_keeps_fetch_order() {
        let games = vec![
            game("a", 1, GameType::Card, 3),
            game("b", 9, GameType::Card, 1),
        ];
        let ids: Vec<String> = visible_games(&games, "", None, None, VaultTab::All)
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
