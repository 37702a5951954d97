//! 内存版导航宿主（InMemoryNavigator）
//!
//! 以历史栈模拟浏览器位置：`navigate` 压栈，`back` 出栈，`set_location` 模拟外部位置变更。
//! 典型用途：测试环境、示例与无界面运行。

use super::Navigator;
use parking_lot::RwLock;

/// 简单的内存导航宿主实现
#[derive(Debug)]
pub struct InMemoryNavigator {
    history: RwLock<Vec<String>>,
}

impl Default for InMemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl InMemoryNavigator {
    /// 以初始位置创建
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: RwLock::new(vec![initial.into()]),
        }
    }

    /// 外部位置变更（如用户直接修改地址栏），替换当前位置而不新增历史
    pub fn set_location(&self, path: impl Into<String>) {
        let mut history = self.history.write();
        match history.last_mut() {
            Some(current) => *current = path.into(),
            None => history.push(path.into()),
        }
    }

    /// 回到上一个位置；已在最早位置时返回 `false`
    pub fn back(&self) -> bool {
        let mut history = self.history.write();
        if history.len() <= 1 {
            return false;
        }
        history.pop();
        true
    }

    /// 历史位置快照（最早的在前）
    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }
}

impl Navigator for InMemoryNavigator {
    fn navigate(&self, path: &str) {
        tracing::trace!(path, "navigate");
        self.history.write().push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.history.read().last().cloned().unwrap_or_default()
    }
}
