//! What's That Game 共享领域层
//!
//! 前端视图模型与服务端线格式之间的共享定义，以及纯函数形式的
//! 派生状态逻辑（本周游戏、同类推荐、投票结果合并）。
//! 本 crate 不依赖 DOM，可在原生目标上直接测试。

pub mod derive;
pub mod model;

pub use derive::{VoteDirection, VoteOutcome};
pub use model::{
    CreateGameRequest, EquipmentEntry, FALLBACK_EMOJI, Game, GameMetadata, GameRecord, GameType,
    PlayerCount, PlayerRange, RegisterRequest, ReportRequest, ThemeEntry, TokenResponse, User,
    VisibilityRequest, VoteCounts,
};
