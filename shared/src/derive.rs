//! 派生状态模块
//!
//! 游戏列表之上的全部客户端派生逻辑，均为输入到输出的纯函数：
//! 无缓存、无失效问题，每次渲染直接重算。
//!
//! 排序约定：并列与"第一个匹配"均取服务端返回顺序中靠前者，
//! 上游未承诺稳定排序，此处行为属实现定义（见 DESIGN.md）。

use crate::model::{Game, VoteCounts};
use std::collections::HashMap;

// =========================================================
// 列表派生 (List Derivations)
// =========================================================

/// 游戏 id 到当前赞数的映射
pub fn upvote_index(games: &[Game]) -> HashMap<String, u32> {
    games.iter().map(|g| (g.id.clone(), g.upvotes)).collect()
}

/// 收藏子集，顺序跟随 `games` 的顺序而非收藏顺序
pub fn saved_games<'a>(games: &'a [Game], saved_ids: &[String]) -> Vec<&'a Game> {
    games.iter().filter(|g| saved_ids.contains(&g.id)).collect()
}

/// 本周游戏：赞数最高者，并列时取列表中靠前者；空列表为 None
pub fn game_of_the_week(games: &[Game]) -> Option<&Game> {
    games
        .iter()
        .reduce(|best, next| if next.upvotes > best.upvotes { next } else { best })
}

/// 最近一次点赞的游戏；id 缺失或已不在列表中时为 None
pub fn last_upvoted_game<'a>(games: &'a [Game], last_id: Option<&str>) -> Option<&'a Game> {
    let id = last_id?;
    games.iter().find(|g| g.id == id)
}

/// "因为你赞了 X" 推荐
///
/// 列表顺序中第一个满足以下条件的游戏：
/// - 不是最近点赞的游戏本身，也不是本周游戏
/// - 与最近点赞的游戏同类型，或共享至少一个主题
///
/// 没有点赞种子或没有匹配时为 None。非评分推荐器，仅内容重合。
pub fn suggested_game<'a>(games: &'a [Game], last_id: Option<&str>) -> Option<&'a Game> {
    let seed = last_upvoted_game(games, last_id)?;
    let week_id = game_of_the_week(games).map(|g| g.id.as_str());

    games.iter().find(|g| {
        g.id != seed.id
            && Some(g.id.as_str()) != week_id
            && (g.game_type == seed.game_type
                || g.themes.iter().any(|t| seed.themes.contains(t)))
    })
}

// =========================================================
// 收藏切换 (Saved Toggle)
// =========================================================

/// 幂等的收藏切换：存在则移除，不存在则追加到末尾
///
/// 返回切换后该 id 是否处于收藏状态。
pub fn toggle_id(ids: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = ids.iter().position(|x| x == id) {
        ids.remove(pos);
        false
    } else {
        ids.push(id.to_string());
        true
    }
}

// =========================================================
// 投票合并 (Vote Reconciliation)
// =========================================================

/// 一次投票请求的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    /// 新增一票（此前未点赞）
    Added,
    /// 撤回一票（此前已点赞）
    Removed,
}

impl VoteDirection {
    /// 发给服务端的 `remove` 查询参数
    pub const fn remove_flag(&self) -> bool {
        matches!(self, VoteDirection::Removed)
    }

    pub const fn is_added(&self) -> bool {
        matches!(self, VoteDirection::Added)
    }
}

/// 一次成功投票的结果：服务端权威计数 + 客户端请求的方向
///
/// 消费方用它一次性地更新计数和本地布尔映射，计数绝不在本地做
/// 固定增量，只整体覆盖为服务端返回值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    pub counts: VoteCounts,
    pub direction: VoteDirection,
}

/// 根据本地点赞映射决定下一次切换的方向
///
/// 未记录视为未点赞，即默认方向为 `Added`。
pub fn next_vote_direction(user_upvotes: &HashMap<String, bool>, game_id: &str) -> VoteDirection {
    if user_upvotes.get(game_id).copied().unwrap_or(false) {
        VoteDirection::Removed
    } else {
        VoteDirection::Added
    }
}

/// 把一次成功投票的结果并入本地状态
///
/// 列表中对应游戏的计数整体覆盖为服务端值（绝不做本地增量），
/// 点赞映射记录方向；仅 `Added` 会更新推荐种子。
/// 返回种子是否变化，调用方据此决定是否持久化。
pub fn apply_vote_outcome(
    games: &mut [Game],
    user_upvotes: &mut HashMap<String, bool>,
    last_upvoted: &mut Option<String>,
    game_id: &str,
    outcome: VoteOutcome,
) -> bool {
    if let Some(game) = games.iter_mut().find(|g| g.id == game_id) {
        game.upvotes = outcome.counts.upvotes;
        game.downvotes = outcome.counts.downvotes;
    }
    user_upvotes.insert(game_id.to_string(), outcome.direction.is_added());

    if outcome.direction.is_added() {
        *last_upvoted = Some(game_id.to_string());
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests;
