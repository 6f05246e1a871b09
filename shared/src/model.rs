//! 领域模型模块
//!
//! 分为两层：
//! - 线格式（`GameRecord` 等）：与 REST API 的 JSON 字段一一对应
//! - 视图模型（`Game`）：字段重命名、嵌套展平后的前端内部形状
//!
//! 规范化只发生在一个方向（`Game::from_record`）：列表在加载时
//! 整体转换一次，此后前端只操作视图模型。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

// =========================================================
// 游戏类型 (Game Types)
// =========================================================

/// 游戏类型枚举
///
/// 线格式为小写字符串（`"card"`、`"party"` 等）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Card,
    Dice,
    Board,
    Party,
    Strategy,
    Drinking,
}

impl GameType {
    pub const ALL: [GameType; 6] = [
        GameType::Card,
        GameType::Dice,
        GameType::Board,
        GameType::Party,
        GameType::Strategy,
        GameType::Drinking,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            GameType::Card => "card",
            GameType::Dice => "dice",
            GameType::Board => "board",
            GameType::Party => "party",
            GameType::Strategy => "strategy",
            GameType::Drinking => "drinking",
        }
    }

    /// 解析服务端元数据中的类型字符串
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// 用于展示的首字母大写形式
    pub const fn label(&self) -> &'static str {
        match self {
            GameType::Card => "Card",
            GameType::Dice => "Dice",
            GameType::Board => "Board",
            GameType::Party => "Party",
            GameType::Strategy => "Strategy",
            GameType::Drinking => "Drinking",
        }
    }
}

impl Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =========================================================
// 线格式 (Wire Format)
// =========================================================

/// 玩家人数（线格式）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCount {
    pub min_players: u32,
    pub max_players: u32,
}

/// 装备条目（线格式，`{"equipment_name": ...}`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub equipment_name: String,
}

/// 主题条目（线格式，`{"theme_name": ...}`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub theme_name: String,
}

/// 贡献者（线格式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub username: String,
}

/// 服务端返回的完整游戏记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub age_rating: String,
    pub game_type: GameType,
    pub player_count: PlayerCount,
    pub duration: String,
    pub equipment: Vec<EquipmentEntry>,
    pub themes: Vec<ThemeEntry>,
    pub rules: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub contributor: Contributor,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_public: Option<bool>,
}

// =========================================================
// 视图模型 (View Model)
// =========================================================

/// 玩家人数范围（视图模型）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRange {
    pub min: u32,
    pub max: u32,
}

impl PlayerRange {
    /// 某个聚会人数是否落在该范围内
    pub const fn fits(&self, n: u32) -> bool {
        self.min <= n && n <= self.max
    }
}

/// 前端内部使用的游戏视图模型
///
/// 除 `upvotes` 会被投票响应覆盖外，其余字段加载后只读。
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub age_rating: String,
    pub game_type: GameType,
    pub player_count: PlayerRange,
    pub duration: String,
    pub equipment: Vec<String>,
    pub themes: Vec<String>,
    pub rules: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub contributor_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub is_public: bool,
}

/// 没有图标时的占位 emoji
pub const FALLBACK_EMOJI: &str = "🎲";

impl Game {
    /// 将服务端记录规范化为视图模型
    ///
    /// 重命名字段、展平 `player_count`/`equipment`/`themes`/`contributor`，
    /// 缺失的 `image_url` 回退为占位 emoji。
    pub fn from_record(record: GameRecord) -> Self {
        Game {
            id: record.id,
            name: record.name,
            emoji: record
                .image_url
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| FALLBACK_EMOJI.to_string()),
            description: record.description,
            age_rating: record.age_rating,
            game_type: record.game_type,
            player_count: PlayerRange {
                min: record.player_count.min_players,
                max: record.player_count.max_players,
            },
            duration: record.duration,
            equipment: record.equipment.into_iter().map(|e| e.equipment_name).collect(),
            themes: record.themes.into_iter().map(|t| t.theme_name).collect(),
            rules: record.rules,
            upvotes: record.upvotes,
            downvotes: record.downvotes,
            contributor_name: record.contributor.username,
            created_at: record.created_at,
            is_public: record.is_public.unwrap_or(true),
        }
    }
}

// =========================================================
// 认证负载 (Auth Payloads)
// =========================================================

/// 当前登录用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub country_of_origin: String,
}

/// `POST /auth/token` 的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// `POST /users/register` 的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub country_of_origin: String,
}

// =========================================================
// 游戏操作负载 (Game Payloads)
// =========================================================

/// `POST /games/` 的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
    pub description: String,
    pub age_rating: String,
    pub game_type: GameType,
    pub player_count: PlayerCount,
    pub duration: String,
    pub equipment: Vec<EquipmentEntry>,
    pub themes: Vec<ThemeEntry>,
    pub rules: String,
    pub image_url: String,
    pub is_public: bool,
}

/// 投票接口返回的最新计数（服务端为计数的唯一权威）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub upvotes: u32,
    pub downvotes: u32,
}

/// `GET /games/metadata` 的响应：表单与筛选用的枚举列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    pub game_types: Vec<String>,
    pub age_ratings: Vec<String>,
    pub equipment: Vec<String>,
    pub themes: Vec<String>,
}

impl GameMetadata {
    /// 元数据接口不可用时的内置回退选项
    pub fn fallback() -> Self {
        GameMetadata {
            game_types: GameType::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            age_ratings: ["3+", "7+", "12+", "16+", "18+"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            equipment: [
                "Standard deck of cards",
                "Dice",
                "Pen and paper",
                "Timer",
                "Tokens or chips",
                "Cups",
                "Ball",
                "Nothing needed",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            themes: ["Social", "Strategy", "Bluffing", "Trivia", "Speed", "Luck"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// `POST /games/{id}/report` 的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub reason: String,
}

/// `PATCH /games/{id}/visibility` 的请求体
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VisibilityRequest {
    pub is_public: bool,
}

#[cfg(test)]
mod tests;
