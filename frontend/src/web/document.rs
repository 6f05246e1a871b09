//! 文档级 Web API 封装模块
//!
//! 主题属性、确认对话框与剪贴板等零散的 `window`/`document` 操作
//! 集中在此，组件层不直接触碰 `web_sys`。

/// 文档级操作封装
pub struct Dom;

impl Dom {
    fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    /// 在文档根元素上设置或清除 `data-theme` 属性
    ///
    /// `None` 表示默认主题，清除属性。
    pub fn set_root_theme(theme_id: Option<&str>) {
        let root = Self::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = match theme_id {
                Some(id) => root.set_attribute("data-theme", id),
                None => root.remove_attribute("data-theme"),
            };
        }
    }

    /// 原生确认对话框，无法弹出时视为取消
    pub fn confirm(message: &str) -> bool {
        Self::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    /// 把文本写入剪贴板（不等待写入完成）
    pub fn copy_to_clipboard(text: &str) {
        if let Some(window) = Self::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }

    /// 当前完整 URL，用于分享链接
    pub fn current_url() -> Option<String> {
        Self::window()?.location().href().ok()
    }
}
