//! 核心层统一错误定义
//!
//! 命令的 `execute` 从不向外抛出错误；这里的错误只出现在可失败的构造函数
//! （负载序列化、路由解析）与事件总线的投递接口上，由命令在内部吸收并记录日志。
//!
use thiserror::Error;

/// 统一错误类型（核心层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CoreError {
    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 事件系统 ---
    #[error("invalid event: {reason}")]
    InvalidEvent { reason: String },
    #[error("event listener error: listener={listener}, reason={reason}")]
    EventListener { listener: String, reason: String },

    // --- 路由 ---
    #[error("invalid route: {reason}")]
    InvalidRoute { reason: String },
}

impl CoreError {
    pub fn invalid_event(reason: impl Into<String>) -> Self {
        CoreError::InvalidEvent {
            reason: reason.into(),
        }
    }

    pub fn invalid_route(reason: impl Into<String>) -> Self {
        CoreError::InvalidRoute {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type CoreResult<T> = Result<T, CoreError>;
