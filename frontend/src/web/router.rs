//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在
//! 此模块。本应用没有路由级守卫：唯一的访问控制是匿名点赞时弹出的
//! 登录模态框，由各功能自行触发。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    /// 创建新的路由服务，初始路由从当前 URL 解析
    fn new() -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到指定路由，推入 History 并更新 UI
    pub fn navigate(&self, route: AppRoute) {
        push_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 浏览器后退，popstate 监听会随后更新路由状态
    pub fn back(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router();

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接组件
///
/// 渲染 `<a>` 标签但拦截点击走 History 导航，保持 SPA 行为。
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.to_path();
    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
