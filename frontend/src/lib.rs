//! What's That Game 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `games`: 游戏集合与派生状态
//! - `theme`: 配色主题
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod add_game;
    mod game_card;
    pub mod game_detail;
    pub mod home;
    mod icons;
    pub mod login_modal;
    pub mod my_vault;
    pub mod saved_games;
    pub mod world_vault;
}
mod games;
mod theme;

use crate::auth::{AuthContext, init_auth};
use crate::components::add_game::AddGamePage;
use crate::components::game_detail::GameDetailPage;
use crate::components::home::HomePage;
use crate::components::login_modal::LoginModal;
use crate::components::my_vault::MyVaultPage;
use crate::components::saved_games::SavedGamesPage;
use crate::components::world_vault::WorldVaultPage;
use crate::games::{GameContext, init_games};
use crate::theme::{ThemeContext, init_theme};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器部分原生 API 的轻量级封装，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod document;
    pub mod route;
    pub mod router;
    mod storage;

    pub use document::Dom;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::WorldVault => view! { <WorldVaultPage /> }.into_any(),
        AppRoute::MyVault => view! { <MyVaultPage /> }.into_any(),
        AppRoute::GameDetail(id) => view! { <GameDetailPage id=id /> }.into_any(),
        AppRoute::SavedGames => view! { <SavedGamesPage /> }.into_any(),
        AppRoute::AddGame => view! { <AddGamePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 主题上下文：恢复并应用到文档根
    let theme_ctx = ThemeContext::new();
    provide_context(theme_ctx);
    init_theme(&theme_ctx);

    // 2. 认证上下文：校验存量 token
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. 游戏集合上下文：拉取一次公开目录
    let games_ctx = GameContext::new();
    provide_context(games_ctx);
    init_games(&games_ctx);

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
            // 登录模态框全局挂载，任何页面都能触发
            <LoginModal />
        </Router>
    }
}
