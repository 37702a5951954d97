//! 命令服务配置
//!
//! 重复名称的 `add` 总是“后写覆盖”，这里只决定被覆盖条目在有序列表中的位置。
//!
use crate::error::AppError;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 同名命令再次注册时的位置策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// 保留原有位置，只替换内容
    #[default]
    ReplaceInPlace,
    /// 移除原条目后追加到末尾
    MoveToEnd,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandServiceConfig {
    #[builder(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// 替换已有条目时是否通知订阅者
    #[builder(default = true)]
    pub notify_on_replace: bool,
}

impl Default for CommandServiceConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            notify_on_replace: true,
        }
    }
}

impl CommandServiceConfig {
    /// 从宿主的 JSON 配置片段加载，缺省字段取默认值
    pub fn from_json_str(input: &str) -> Result<Self, AppError> {
        serde_json::from_str(input).map_err(|e| AppError::Config {
            reason: e.to_string(),
        })
    }
}
