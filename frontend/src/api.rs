//! API 客户端模块
//!
//! 把类型化的意图翻译为对后端 REST API 的 HTTP 请求。
//! Bearer token 存取全部经由 LocalStorage，无缓存层，
//! 每次调用都是一次新的网络往返。

use crate::web::LocalStorage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use wtg_shared::{
    CreateGameRequest, GameMetadata, GameRecord, RegisterRequest, ReportRequest, TokenResponse,
    User, VisibilityRequest, VoteCounts,
};

/// 后端基地址（内置常量，无环境变量）
const API_URL: &str = "http://localhost:8001";

/// Bearer token 的 LocalStorage 键
const STORAGE_TOKEN_KEY: &str = "token";

// =========================================================
// 错误类型
// =========================================================

/// API 调用错误
#[derive(Debug, Clone)]
pub enum ApiError {
    /// 网络请求失败或请求构建失败
    Network(String),
    /// 非 2xx 响应，携带状态码与面向用户的消息
    Status(u16, String),
    /// 响应体解析失败
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(_, msg) => write!(f, "{msg}"),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// 服务端错误响应中的 `detail` 字段
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: Option<String>,
}

/// 非 2xx 响应转为带固定消息的错误
fn status_error(res: &Response, message: &str) -> ApiError {
    ApiError::Status(res.status(), message.to_string())
}

/// 解析 JSON 响应体
async fn decode<T: serde::de::DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    res.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// =========================================================
// 客户端
// =========================================================

/// What's That Game API 客户端
///
/// 无实例状态：token 每次调用时从 LocalStorage 读取，
/// 因此登录态变化无需重建客户端。
pub struct WtgApi;

impl WtgApi {
    fn url(path: &str) -> String {
        format!("{API_URL}{path}")
    }

    /// 当前持久化的 Bearer token
    pub fn stored_token() -> Option<String> {
        LocalStorage::get(STORAGE_TOKEN_KEY)
    }

    /// 为请求附加 Authorization 头（有 token 时）
    fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match Self::stored_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    // -----------------------------------------------------
    // 认证
    // -----------------------------------------------------

    /// 登录：表单编码的凭据换取 access token 并持久化
    pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
        let body = format!(
            "username={}&password={}",
            String::from(js_sys::encode_uri_component(username)),
            String::from(js_sys::encode_uri_component(password)),
        );

        let res = Request::post(&Self::url("/auth/token"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Login failed"));
        }

        let token: TokenResponse = decode(res).await?;
        LocalStorage::set(STORAGE_TOKEN_KEY, &token.access_token);
        Ok(())
    }

    /// 注册新用户，失败时尽量透出服务端的 detail 消息
    pub async fn register(user_data: &RegisterRequest) -> Result<User, ApiError> {
        let res = Request::post(&Self::url("/users/register"))
            .json(user_data)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            let status = res.status();
            let detail = res
                .json::<ErrorDetail>()
                .await
                .ok()
                .and_then(|e| e.detail)
                .unwrap_or_else(|| "Registration failed".to_string());
            return Err(ApiError::Status(status, detail));
        }

        decode(res).await
    }

    /// 获取当前登录用户
    ///
    /// 任何失败（无 token、非 2xx、解析失败）都返回 `None`：
    /// "没有会话"是正常状态而不是错误。
    pub async fn get_current_user() -> Option<User> {
        Self::stored_token()?;

        let res = Self::with_auth(Request::get(&Self::url("/users/me")))
            .send()
            .await
            .ok()?;

        if !res.ok() {
            return None;
        }
        res.json::<User>().await.ok()
    }

    /// 注销：仅清除本地 token，无网络调用
    pub fn logout() {
        LocalStorage::delete(STORAGE_TOKEN_KEY);
    }

    // -----------------------------------------------------
    // 游戏目录
    // -----------------------------------------------------

    /// 获取公开游戏列表，可选查询参数过滤
    pub async fn get_games(filters: &[(&str, &str)]) -> Result<Vec<GameRecord>, ApiError> {
        let res = Request::get(&Self::url("/games/"))
            .query(filters.iter().copied())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to fetch games"));
        }
        decode(res).await
    }

    /// 提交新游戏
    pub async fn create_game(game_data: &CreateGameRequest) -> Result<GameRecord, ApiError> {
        let res = Self::with_auth(Request::post(&Self::url("/games/")))
            .json(game_data)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to create game"));
        }
        decode(res).await
    }

    /// 获取调用者自己的投稿（公开与私有）
    pub async fn get_my_games(skip: u32, limit: u32) -> Result<Vec<GameRecord>, ApiError> {
        let skip = skip.to_string();
        let limit = limit.to_string();
        let res = Self::with_auth(
            Request::get(&Self::url("/games/mine"))
                .query([("skip", skip.as_str()), ("limit", limit.as_str())]),
        )
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to fetch your games"));
        }
        decode(res).await
    }

    /// 获取表单/筛选用的枚举元数据
    pub async fn get_game_metadata() -> Result<GameMetadata, ApiError> {
        let res = Request::get(&Self::url("/games/metadata"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to fetch metadata"));
        }
        decode(res).await
    }

    /// 删除自己的游戏
    pub async fn delete_game(game_id: &str) -> Result<(), ApiError> {
        let res = Self::with_auth(Request::delete(&Self::url(&format!("/games/{game_id}"))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to delete game"));
        }
        Ok(())
    }

    // -----------------------------------------------------
    // 投票与举报
    // -----------------------------------------------------

    /// 点赞或撤回点赞，返回服务端最新计数
    pub async fn upvote_game(game_id: &str, remove: bool) -> Result<VoteCounts, ApiError> {
        Self::vote(game_id, "upvote", remove).await
    }

    /// 点踩或撤回点踩，返回服务端最新计数
    pub async fn downvote_game(game_id: &str, remove: bool) -> Result<VoteCounts, ApiError> {
        Self::vote(game_id, "downvote", remove).await
    }

    async fn vote(game_id: &str, action: &str, remove: bool) -> Result<VoteCounts, ApiError> {
        let path = format!("/games/{game_id}/{action}?remove={remove}");
        let res = Self::with_auth(Request::post(&Self::url(&path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to vote"));
        }
        decode(res).await
    }

    /// 举报游戏，附自由文本原因
    pub async fn report_game(game_id: &str, reason: &str) -> Result<(), ApiError> {
        let payload = ReportRequest {
            reason: reason.to_string(),
        };
        let res = Self::with_auth(Request::post(&Self::url(&format!("/games/{game_id}/report"))))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to report game"));
        }
        Ok(())
    }

    /// 切换自己投稿的公开/私有状态，返回更新后的记录
    pub async fn set_game_visibility(
        game_id: &str,
        is_public: bool,
    ) -> Result<GameRecord, ApiError> {
        let payload = VisibilityRequest { is_public };
        let res = Self::with_auth(Request::patch(&Self::url(&format!(
            "/games/{game_id}/visibility"
        ))))
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(&res, "Failed to update visibility"));
        }
        decode(res).await
    }
}
