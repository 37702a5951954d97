//! 导航宿主（Navigator）协议
//!
//! 接受一个路径并切换应用的可见位置，同时报告当前位置的路径。
//! `NavigationCommand` 的 `execute` 调用 `navigate`，`is_selected` 读取 `current_path`。
//!
pub mod navigator_inmemory;

pub use navigator_inmemory::InMemoryNavigator;

/// 导航宿主：由外部（浏览器历史、桌面窗口路由等）实现
pub trait Navigator: Send + Sync {
    /// 切换到指定路径
    fn navigate(&self, path: &str);

    /// 当前位置的路径（每次调用都应反映最新状态）
    fn current_path(&self) -> String;
}
