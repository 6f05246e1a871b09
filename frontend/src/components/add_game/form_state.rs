//! 投稿表单状态
//!
//! 字段用独立的 `RwSignal` 承载，整个状态保持 `Copy`，
//! 输入控件各自绑定自己的字段。提交时由 `to_request` 统一
//! 换回线格式并补齐回退值。

use leptos::prelude::*;
use wtg_shared::derive;
use wtg_shared::{CreateGameRequest, EquipmentEntry, GameType, PlayerCount, ThemeEntry, FALLBACK_EMOJI};

/// 时长留空时的回退文案
const FALLBACK_DURATION: &str = "Varies";

/// 投稿表单状态
#[derive(Clone, Copy)]
pub struct GameFormState {
    pub name: RwSignal<String>,
    pub emoji: RwSignal<String>,
    pub description: RwSignal<String>,
    pub age_rating: RwSignal<String>,
    /// 线格式的类型字符串，由元数据选项填充
    pub game_type: RwSignal<String>,
    pub min_players: RwSignal<u32>,
    pub max_players: RwSignal<u32>,
    pub duration: RwSignal<String>,
    pub equipment: RwSignal<Vec<String>>,
    pub themes: RwSignal<Vec<String>>,
    pub rules: RwSignal<String>,
    pub is_public: RwSignal<bool>,
}

impl GameFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            emoji: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            age_rating: RwSignal::new(String::new()),
            game_type: RwSignal::new(String::new()),
            min_players: RwSignal::new(2),
            max_players: RwSignal::new(6),
            duration: RwSignal::new(String::new()),
            equipment: RwSignal::new(Vec::new()),
            themes: RwSignal::new(Vec::new()),
            rules: RwSignal::new(String::new()),
            is_public: RwSignal::new(true),
        }
    }

    /// 清空所有字段回到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.emoji.set(String::new());
        self.description.set(String::new());
        self.age_rating.set(String::new());
        self.game_type.set(String::new());
        self.min_players.set(2);
        self.max_players.set(6);
        self.duration.set(String::new());
        self.equipment.set(Vec::new());
        self.themes.set(Vec::new());
        self.rules.set(String::new());
        self.is_public.set(true);
    }

    /// 勾选/取消一项装备
    pub fn toggle_equipment(&self, item: &str) {
        self.equipment.update(|list| {
            derive::toggle_id(list, item);
        });
    }

    /// 勾选/取消一个主题
    pub fn toggle_theme(&self, item: &str) {
        self.themes.update(|list| {
            derive::toggle_id(list, item);
        });
    }

    /// 表单是否可提交（响应式）
    ///
    /// 名称、描述、规则、年龄分级和类型必填，人数区间必须有效，
    /// 装备和主题各至少选一项。emoji 和时长可留空，提交时回退。
    pub fn is_complete(&self) -> bool {
        !self.name.with(|s| s.trim().is_empty())
            && !self.description.with(|s| s.trim().is_empty())
            && !self.rules.with(|s| s.trim().is_empty())
            && !self.age_rating.with(|s| s.trim().is_empty())
            && !self.game_type.with(|s| s.trim().is_empty())
            && self.min_players.get() >= 1
            && self.min_players.get() <= self.max_players.get()
            && !self.equipment.with(|l| l.is_empty())
            && !self.themes.with(|l| l.is_empty())
    }

    /// 换回线格式
    ///
    /// emoji 留空回退为占位骰子，时长留空回退为 "Varies"，
    /// 无法识别的类型字符串按 Party 提交。
    pub fn to_request(&self) -> CreateGameRequest {
        let emoji = self.emoji.get_untracked();
        let emoji = if emoji.trim().is_empty() {
            FALLBACK_EMOJI.to_string()
        } else {
            emoji
        };
        let duration = self.duration.get_untracked();
        let duration = if duration.trim().is_empty() {
            FALLBACK_DURATION.to_string()
        } else {
            duration
        };

        CreateGameRequest {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            age_rating: self.age_rating.get_untracked(),
            game_type: self
                .game_type
                .with_untracked(|s| GameType::parse(s))
                .unwrap_or(GameType::Party),
            player_count: PlayerCount {
                min_players: self.min_players.get_untracked(),
                max_players: self.max_players.get_untracked(),
            },
            duration,
            equipment: self
                .equipment
                .get_untracked()
                .into_iter()
                .map(|equipment_name| EquipmentEntry { equipment_name })
                .collect(),
            themes: self
                .themes
                .get_untracked()
                .into_iter()
                .map(|theme_name| ThemeEntry { theme_name })
                .collect(),
            rules: self.rules.get_untracked(),
            image_url: emoji,
            is_public: self.is_public.get_untracked(),
        }
    }
}

#[cfg(test)]
mod tests;
