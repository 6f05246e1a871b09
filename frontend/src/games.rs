//! 游戏集合模块
//!
//! 唯一持有内存中游戏列表及其客户端派生状态的容器。
//! 列表在应用加载时整体拉取一次并规范化；此后唯一的本地变更是
//! 投票响应对 `upvotes` 字段的覆盖，以及"我的金库"删除成功后的
//! 移除。收藏 id 与最近点赞 id 持久化在 LocalStorage，
//! 纯浏览器本地，不与账号同步。

use crate::api::WtgApi;
use crate::auth::AuthContext;
use crate::web::LocalStorage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use wtg_shared::derive;
use wtg_shared::{Game, VoteOutcome};

/// 收藏 id 列表的 LocalStorage 键（JSON 数组）
const STORAGE_SAVED_KEY: &str = "savedGames";
/// 最近点赞 id 的 LocalStorage 键（裸字符串）
const STORAGE_LAST_UPVOTED_KEY: &str = "lastUpvotedGameId";

/// 游戏集合上下文
///
/// 字段使用 `RwSignal` 以便整个上下文保持 `Copy`，
/// 可以直接被事件闭包捕获。
#[derive(Clone, Copy)]
pub struct GameContext {
    /// 权威的内存游戏列表（视图模型）
    pub games: RwSignal<Vec<Game>>,
    /// 首次列表拉取是否仍在进行
    pub loading: RwSignal<bool>,
    /// 收藏的游戏 id（保序列表）
    pub saved_game_ids: RwSignal<Vec<String>>,
    /// 本会话内各游戏的点赞方向
    pub user_upvotes: RwSignal<HashMap<String, bool>>,
    /// 最近一次点赞的游戏 id（推荐种子）
    pub last_upvoted_game_id: RwSignal<Option<String>>,
}

impl GameContext {
    /// 创建新的游戏集合上下文
    ///
    /// 收藏列表与最近点赞 id 从 LocalStorage 恢复；点赞映射随
    /// 刷新重置，仅从最近点赞 id 重建对应的一项。
    pub fn new() -> Self {
        let saved_game_ids: Vec<String> =
            LocalStorage::get_json(STORAGE_SAVED_KEY).unwrap_or_default();
        let last_upvoted_game_id = LocalStorage::get(STORAGE_LAST_UPVOTED_KEY);

        let mut user_upvotes = HashMap::new();
        if let Some(id) = &last_upvoted_game_id {
            user_upvotes.insert(id.clone(), true);
        }

        Self {
            games: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            saved_game_ids: RwSignal::new(saved_game_ids),
            user_upvotes: RwSignal::new(user_upvotes),
            last_upvoted_game_id: RwSignal::new(last_upvoted_game_id),
        }
    }

    // -----------------------------------------------------
    // 变更
    // -----------------------------------------------------

    /// 幂等的收藏切换，变更同步持久化到 LocalStorage
    pub fn toggle_saved(&self, game_id: &str) {
        self.saved_game_ids.update(|ids| {
            derive::toggle_id(ids, game_id);
            LocalStorage::set_json(STORAGE_SAVED_KEY, ids);
        });
    }

    /// 点赞切换
    ///
    /// 匿名用户只打开登录模态框，不做任何变更——这是全系统唯一的
    /// 访问控制闸门。已登录时按本地映射决定方向，计数以服务端
    /// 返回值整体覆盖；仅新增方向会更新推荐种子。
    pub fn toggle_upvote(&self, auth: &AuthContext, game_id: String) {
        if !auth.is_logged_in_untracked() {
            auth.open_login_modal();
            return;
        }

        let direction =
            self.user_upvotes.with_untracked(|m| derive::next_vote_direction(m, &game_id));

        let games = self.games;
        let user_upvotes = self.user_upvotes;
        let last_upvoted = self.last_upvoted_game_id;

        spawn_local(async move {
            match WtgApi::upvote_game(&game_id, direction.remove_flag()).await {
                Ok(counts) => {
                    let outcome = VoteOutcome { counts, direction };

                    // 计数、方向映射和推荐种子作为一个结果原子地消费，
                    // 合并逻辑是共享层的纯函数
                    games.update(|list| {
                        user_upvotes.update(|map| {
                            last_upvoted.update(|seed| {
                                if derive::apply_vote_outcome(list, map, seed, &game_id, outcome) {
                                    LocalStorage::set(STORAGE_LAST_UPVOTED_KEY, &game_id);
                                }
                            });
                        });
                    });
                }
                Err(e) => {
                    // 失败静默不动：按钮状态保持原样
                    web_sys::console::error_1(&format!("Failed to upvote: {e}").into());
                }
            }
        });
    }

    /// 从内存列表移除一个游戏（服务端删除确认之后调用）
    pub fn remove_game(&self, game_id: &str) {
        self.games.update(|list| list.retain(|g| g.id != game_id));
    }

    // -----------------------------------------------------
    // 派生值（每次渲染重算的纯函数）
    // -----------------------------------------------------

    /// 游戏 id 到当前赞数的映射
    pub fn upvote_index(&self) -> HashMap<String, u32> {
        self.games.with(|g| derive::upvote_index(g))
    }

    /// 单个游戏的当前赞数（不在列表中为 0）
    pub fn upvotes_for(&self, game_id: &str) -> u32 {
        self.games.with(|list| {
            list.iter()
                .find(|g| g.id == game_id)
                .map(|g| g.upvotes)
                .unwrap_or(0)
        })
    }

    /// 本会话是否已点赞该游戏
    pub fn has_upvoted(&self, game_id: &str) -> bool {
        self.user_upvotes
            .with(|m| m.get(game_id).copied().unwrap_or(false))
    }

    /// 该游戏是否在收藏中
    pub fn is_saved(&self, game_id: &str) -> bool {
        self.saved_game_ids.with(|ids| ids.iter().any(|id| id == game_id))
    }

    /// 收藏子集，顺序跟随列表顺序
    pub fn saved_games(&self) -> Vec<Game> {
        self.games.with(|games| {
            self.saved_game_ids
                .with(|ids| derive::saved_games(games, ids).into_iter().cloned().collect())
        })
    }

    /// 本周游戏；列表为空时为 None
    pub fn game_of_the_week(&self) -> Option<Game> {
        self.games.with(|g| derive::game_of_the_week(g).cloned())
    }

    /// 最近点赞的游戏；id 缺失或已不在列表中时为 None
    pub fn last_upvoted_game(&self) -> Option<Game> {
        self.games.with(|games| {
            self.last_upvoted_game_id
                .with(|id| derive::last_upvoted_game(games, id.as_deref()).cloned())
        })
    }

    /// "因为你赞了 X" 推荐
    pub fn suggested_game(&self) -> Option<Game> {
        self.games.with(|games| {
            self.last_upvoted_game_id
                .with(|id| derive::suggested_game(games, id.as_deref()).cloned())
        })
    }

    /// 按 id 查找游戏
    pub fn game_by_id(&self, game_id: &str) -> Option<Game> {
        self.games
            .with(|list| list.iter().find(|g| g.id == game_id).cloned())
    }
}

/// 从 Context 获取游戏集合上下文
pub fn use_games() -> GameContext {
    use_context::<GameContext>().expect("GameContext should be provided")
}

/// 初始化游戏集合：拉取一次公开列表并规范化
///
/// 失败只记录日志，列表保持为空；无论成败 loading 标志都会清除，
/// 没有重试。
pub fn init_games(ctx: &GameContext) {
    let games = ctx.games;
    let loading = ctx.loading;

    spawn_local(async move {
        match WtgApi::get_games(&[]).await {
            Ok(records) => {
                games.set(records.into_iter().map(Game::from_record).collect());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch games: {e}").into());
            }
        }
        loading.set(false);
    });
}
