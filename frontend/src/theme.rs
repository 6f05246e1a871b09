//! 主题模块
//!
//! 持有固定集合中的一个配色主题，持久化到 LocalStorage，
//! 并通过文档根元素的 `data-theme` 属性反映到页面。
//! 纯外观状态，没有业务逻辑。

use crate::web::{Dom, LocalStorage};
use leptos::prelude::*;

/// 主题的 LocalStorage 键
const STORAGE_THEME_KEY: &str = "theme";

/// 配色主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    PurpleYellow,
    GreenBlue,
    RedOrange,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Default,
        Theme::PurpleYellow,
        Theme::GreenBlue,
        Theme::RedOrange,
    ];

    /// 持久化与 `data-theme` 属性使用的 id
    pub const fn id(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::PurpleYellow => "purple-yellow",
            Theme::GreenBlue => "green-blue",
            Theme::RedOrange => "red-orange",
        }
    }

    /// 设置界面上的展示名
    pub const fn label(&self) -> &'static str {
        match self {
            Theme::Default => "Classic",
            Theme::PurpleYellow => "Purple & Yellow",
            Theme::GreenBlue => "Green & Blue",
            Theme::RedOrange => "Red & Orange",
        }
    }

    /// 解析持久化的主题 id，未知值视为未设置
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == s)
    }
}

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// 创建主题上下文，初始值从 LocalStorage 恢复
    pub fn new() -> Self {
        let theme = LocalStorage::get(STORAGE_THEME_KEY)
            .and_then(|s| Theme::parse(&s))
            .unwrap_or_default();
        Self {
            theme: RwSignal::new(theme),
        }
    }

    /// 切换主题：持久化并立即反映到文档根
    pub fn set_theme(&self, theme: Theme) {
        LocalStorage::set(STORAGE_THEME_KEY, theme.id());
        apply(theme);
        self.theme.set(theme);
    }
}

/// 从 Context 获取主题上下文
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// 初始化：把恢复的主题应用到文档根
pub fn init_theme(ctx: &ThemeContext) {
    apply(ctx.theme.get_untracked());
}

/// `default` 清除 `data-theme` 属性，其余主题设置为自身 id
fn apply(theme: Theme) {
    match theme {
        Theme::Default => Dom::set_root_theme(None),
        other => Dom::set_root_theme(Some(other.id())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.id()), Some(theme));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(Theme::parse("neon-pink"), None);
        assert_eq!(Theme::parse(""), None);
    }
}
