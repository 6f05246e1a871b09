//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由及 path 的双向转换。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 世界金库：全部公开游戏
    WorldVault,
    /// 我的金库：自己的投稿与收藏
    MyVault,
    /// 游戏详情页，携带服务端 id
    GameDetail(String),
    /// 收藏列表
    SavedGames,
    /// 投稿表单
    AddGame,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/world-vault" => Self::WorldVault,
            "/my-vault" => Self::MyVault,
            "/saved" => Self::SavedGames,
            "/add" => Self::AddGame,
            _ => match path.strip_prefix("/game/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::GameDetail(id.to_string())
                }
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::WorldVault => "/world-vault".to_string(),
            Self::MyVault => "/my-vault".to_string(),
            Self::GameDetail(id) => format!("/game/{id}"),
            Self::SavedGames => "/saved".to_string(),
            Self::AddGame => "/add".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::WorldVault,
            AppRoute::MyVault,
            AppRoute::SavedGames,
            AppRoute::AddGame,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn game_detail_carries_id() {
        let route = AppRoute::from_path("/game/g-42");
        assert_eq!(route, AppRoute::GameDetail("g-42".to_string()));
        assert_eq!(route.to_path(), "/game/g-42");
    }

    #[test]
    fn malformed_game_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/game/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/game/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nonsense"), AppRoute::NotFound);
    }
}
