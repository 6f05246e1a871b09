//! 认证模块
//!
//! 管理当前用户与登录模态框的全局可见标志。
//! 状态机：`unknown`（启动时校验存量 token）→ `anonymous` 或
//! `authenticated`。面向表单的 `login`/`signup` 返回 `Result` 而非
//! panic，表单侧无需异常处理即可渲染内联错误。

use crate::api::WtgApi;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wtg_shared::{RegisterRequest, User};

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（未登录时为 None）
    pub user: Option<User>,
    /// 是否仍在启动时的会话校验阶段
    pub is_loading: bool,
    /// 登录模态框是否可见（全局 UI 状态）
    pub show_login_modal: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文，初始处于会话校验中
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// 是否已登录（响应式读取）
    pub fn is_logged_in(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    /// 是否已登录（非响应式，用于事件处理器内的判定）
    pub fn is_logged_in_untracked(&self) -> bool {
        self.state.with_untracked(|s| s.user.is_some())
    }

    /// 打开登录模态框（任何需要登录的功能都可调用）
    pub fn open_login_modal(&self) {
        self.set_state.update(|s| s.show_login_modal = true);
    }

    /// 关闭登录模态框
    pub fn close_login_modal(&self) {
        self.set_state.update(|s| s.show_login_modal = false);
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 有存量 token 时尝试拉取当前用户；任何失败都丢弃 token 并回落为
/// 匿名态，不视为硬错误。
pub fn init_auth(ctx: &AuthContext) {
    let set_state = ctx.set_state;

    spawn_local(async move {
        let mut user = None;
        if WtgApi::stored_token().is_some() {
            user = WtgApi::get_current_user().await;
            if user.is_none() {
                // token 失效，清除后视为未登录
                WtgApi::logout();
            }
        }
        set_state.update(|s| {
            s.user = user;
            s.is_loading = false;
        });
    });
}

/// 登录
///
/// 成功后加载用户资料并关闭登录模态框。
pub async fn login(ctx: &AuthContext, username: &str, password: &str) -> Result<(), String> {
    WtgApi::login(username, password)
        .await
        .map_err(|e| e.to_string())?;

    let user = WtgApi::get_current_user().await;
    ctx.set_state.update(|s| {
        s.user = user;
        s.show_login_modal = false;
    });
    Ok(())
}

/// 注册并自动登录
///
/// 国家留空时按 "Unknown" 注册。
pub async fn signup(
    ctx: &AuthContext,
    firstname: &str,
    lastname: &str,
    email: &str,
    username: &str,
    password: &str,
    country: &str,
) -> Result<(), String> {
    let request = RegisterRequest {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        country_of_origin: if country.trim().is_empty() {
            "Unknown".to_string()
        } else {
            country.to_string()
        },
    };

    WtgApi::register(&request).await.map_err(|e| e.to_string())?;

    // 注册成功后用同一组凭据直接登录
    login(ctx, username, password).await
}

/// 注销并清除状态
///
/// 同步完成，不需要任何服务端调用。
pub fn logout(ctx: &AuthContext) {
    WtgApi::logout();
    ctx.set_state.update(|s| s.user = None);
}
