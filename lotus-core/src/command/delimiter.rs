//! 分隔命令（DelimiterCommand）
//!
//! 仅作为有序命令列表中的哨兵，供渲染层插入视觉分隔。
//! 分隔符可能被误接到可点击控件上，因此 `execute` 强制为空操作且 `can_execute` 恒为 `false`。
//!
//! 注册表按名称去重，`default()` / `unique()` 每次生成不同的名称（`delimiter-0`、`delimiter-1`……），
//! 同一个列表中可以反复使用默认分隔符。
//!
use super::{Command, CommandParameter};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DELIMITER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelimiterCommand {
    name: String,
}

impl DelimiterCommand {
    /// 自动生成名称的前缀
    pub const NAME_PREFIX: &'static str = "delimiter";

    /// 以显式名称创建；同名分隔符在注册表中会互相覆盖
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 以进程内唯一的名称创建
    pub fn unique() -> Self {
        let n = NEXT_DELIMITER.fetch_add(1, Ordering::Relaxed);
        Self::new(format!("{}-{n}", Self::NAME_PREFIX))
    }
}

impl Default for DelimiterCommand {
    fn default() -> Self {
        Self::unique()
    }
}

impl Command for DelimiterCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute_with(&self, _parameter: Option<&CommandParameter>) {}

    fn can_execute(&self) -> bool {
        false
    }

    fn is_selected(&self) -> bool {
        false
    }
}
