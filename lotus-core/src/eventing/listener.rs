//! 事件监听器（EventListener）
//!
//! 定义对某一事件键的同步处理逻辑与元信息（名称）。
//! 任何 `Fn(&UiEvent) -> anyhow::Result<()>` 闭包都自动成为监听器。
//!
use super::UiEvent;

/// 事件监听器：处理某一键的事件
pub trait EventListener: Send + Sync {
    /// 监听器名称（用于日志）
    fn listener_name(&self) -> &str {
        "anonymous"
    }

    /// 处理事件；返回错误仅会被记录，不会中断对其他监听器的投递
    fn handle(&self, event: &UiEvent) -> anyhow::Result<()>;
}

impl<F> EventListener for F
where
    F: Fn(&UiEvent) -> anyhow::Result<()> + Send + Sync,
{
    fn handle(&self, event: &UiEvent) -> anyhow::Result<()> {
        self(event)
    }
}
