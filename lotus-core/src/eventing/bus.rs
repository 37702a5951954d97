//! 事件总线（EventBus）协议
//!
//! 定义“投递具名事件”与“监听具名事件”的统一抽象。
//! 投递是同步的“发出即忘”：无确认、无重试。
//!
use super::{EventListener, UiEvent};
use crate::error::CoreResult as Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 监听器订阅标识，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// 事件总线：负责投递事件与管理监听器
pub trait EventBus: Send + Sync {
    /// 投递事件，返回收到事件的监听器数量
    fn dispatch(&self, event: &UiEvent) -> Result<usize>;

    /// 为某一事件键注册监听器
    fn subscribe(&self, key: &str, listener: Arc<dyn EventListener>) -> ListenerId;

    /// 取消订阅；未找到时返回 `false`
    fn unsubscribe(&self, id: ListenerId) -> bool;
}
