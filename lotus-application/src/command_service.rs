use lotus_core::command::{Command, CommandParameter, UiCommand};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 注册表变更通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryChange {
    Added { name: String },
    Replaced { name: String },
    Removed { name: String },
    /// 整个列表被一次性替换或清空，`count` 为替换后的条目数
    Reset { count: usize },
}

impl RegistryChange {
    /// 单条目变更对应的命令名称；`Reset` 没有名称
    pub fn name(&self) -> Option<&str> {
        match self {
            RegistryChange::Added { name }
            | RegistryChange::Replaced { name }
            | RegistryChange::Removed { name } => Some(name),
            RegistryChange::Reset { .. } => None,
        }
    }
}

/// 注册表变更的订阅者
pub type RegistryListener = Arc<dyn Fn(&RegistryChange) + Send + Sync>;

/// 订阅标识，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// 按名称执行的结果，仅供调用方参考，忽略它不会丢失任何错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    Executed,
    NotFound,
    Disabled,
}

impl ExecuteOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, ExecuteOutcome::Executed)
    }
}

/// 命令服务（Command Service）
///
/// - 以命令名称为键的内存注册表，保留插入顺序以便确定性渲染；
/// - 同名 `add` 为“后写覆盖”，从不报错；
/// - 查找失败不是错误：`find` 返回 `None`，`execute_by_name` 静默跳过；
/// - 实现不得在持有内部锁时调用命令或订阅者，以容忍回调中的重入修改。
pub trait CommandService: Send + Sync {
    /// 插入或替换 `command.name()` 对应的条目
    fn add_shared(&self, command: Arc<UiCommand>);

    /// 插入或替换，接受任意命令变体
    fn add<C>(&self, command: C)
    where
        C: Into<UiCommand>,
        Self: Sized,
    {
        self.add_shared(Arc::new(command.into()));
    }

    /// 删除条目；不存在时为空操作
    fn remove(&self, name: &str);

    /// 以给定的有序列表整体替换注册表（含分隔符），只发出一次 `Reset` 通知；
    /// 列表内的同名命令按配置的重复策略处理
    fn set_all(&self, commands: Vec<Arc<UiCommand>>);

    /// 整体替换，接受任意命令变体
    fn set_commands<I, C>(&self, commands: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<UiCommand>,
        Self: Sized,
    {
        self.set_all(
            commands
                .into_iter()
                .map(|c| Arc::new(c.into()))
                .collect(),
        );
    }

    /// 清空注册表；原本非空时发出一次 `Reset` 通知
    fn clear(&self);

    fn find(&self, name: &str) -> Option<Arc<UiCommand>>;

    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// 按插入顺序返回已注册命令的快照（含分隔符）
    fn get_all(&self) -> Vec<Arc<UiCommand>>;

    /// 找到且 `can_execute()` 为真时以给定参数执行，否则静默跳过
    fn execute_by_name(&self, name: &str, parameter: Option<&CommandParameter>)
    -> ExecuteOutcome;

    fn subscribe(&self, listener: RegistryListener) -> SubscriptionId;

    /// 取消订阅；未找到时返回 `false`
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// 命令名称列表（按给定顺序）
pub fn command_names(commands: &[Arc<UiCommand>]) -> Vec<&str> {
    commands.iter().map(|c| c.name()).collect()
}
