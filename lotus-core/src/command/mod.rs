//! 命令（Command）
//!
//! 具名的行为单元，对外暴露统一的能力契约：
//! - `execute` / `execute_with`：执行命令效果；
//! - `can_execute`：当前是否允许执行，渲染层据此禁用控件；
//! - `is_selected`：命令是否代表 UI 的“当前”状态，用于高亮样式。
//!
//! 变体是一个封闭集合（`UiCommand`）：
//! - `BaseCommand`：空骨架，可用闭包覆盖默认行为；
//! - `NavigationCommand`：基于路由的导航；
//! - `EventCommand`：投递具名应用事件；
//! - `DelimiterCommand`：不可交互的分隔标记。
//!
//! 任何命令的 `execute` 都不会 panic，也不会向外返回错误；配置错误的命令只表现为惰性控件。
//!
pub mod base;
pub mod delimiter;
pub mod event;
pub mod navigation;

pub use base::BaseCommand;
pub use delimiter::DelimiterCommand;
pub use event::EventCommand;
pub use navigation::NavigationCommand;

use serde::{Deserialize, Serialize};

/// 调用方提供的不透明参数，原样随执行传递
pub type CommandParameter = serde_json::Value;

/// 命令能力契约
pub trait Command: Send + Sync {
    /// 命令名称（在同一个 CommandService 内唯一）
    fn name(&self) -> &str;

    /// 构造时绑定的参数
    fn parameter(&self) -> Option<&CommandParameter> {
        None
    }

    /// 菜单上显示的文字
    fn label(&self) -> Option<&str> {
        None
    }

    fn icon(&self) -> Option<&str> {
        None
    }

    /// 以命令自身的参数执行
    fn execute(&self) {
        self.execute_with(None);
    }

    /// 以本次调用的参数执行；未提供时回落到命令自身的参数
    fn execute_with(&self, parameter: Option<&CommandParameter>);

    fn can_execute(&self) -> bool {
        true
    }

    fn is_selected(&self) -> bool {
        false
    }
}

/// 展示用元数据，不参与命令标识
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

pub(crate) fn effective_parameter<'a>(
    call: Option<&'a CommandParameter>,
    own: Option<&'a CommandParameter>,
) -> Option<&'a CommandParameter> {
    call.or(own)
}

/// 命令变体的封闭集合
#[derive(Debug, Clone)]
pub enum UiCommand {
    Base(BaseCommand),
    Navigation(NavigationCommand),
    Event(EventCommand),
    Delimiter(DelimiterCommand),
}

impl UiCommand {
    /// 变体名称（用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            UiCommand::Base(_) => "base",
            UiCommand::Navigation(_) => "navigation",
            UiCommand::Event(_) => "event",
            UiCommand::Delimiter(_) => "delimiter",
        }
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(self, UiCommand::Delimiter(_))
    }

    fn inner(&self) -> &dyn Command {
        match self {
            UiCommand::Base(c) => c,
            UiCommand::Navigation(c) => c,
            UiCommand::Event(c) => c,
            UiCommand::Delimiter(c) => c,
        }
    }
}

impl Command for UiCommand {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn parameter(&self) -> Option<&CommandParameter> {
        self.inner().parameter()
    }

    fn label(&self) -> Option<&str> {
        self.inner().label()
    }

    fn icon(&self) -> Option<&str> {
        self.inner().icon()
    }

    fn execute_with(&self, parameter: Option<&CommandParameter>) {
        self.inner().execute_with(parameter);
    }

    fn can_execute(&self) -> bool {
        self.inner().can_execute()
    }

    fn is_selected(&self) -> bool {
        self.inner().is_selected()
    }
}

/// 命令按名称比较，而非按数据结构比较
impl PartialEq for UiCommand {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for UiCommand {}

impl From<BaseCommand> for UiCommand {
    fn from(c: BaseCommand) -> Self {
        UiCommand::Base(c)
    }
}

impl From<NavigationCommand> for UiCommand {
    fn from(c: NavigationCommand) -> Self {
        UiCommand::Navigation(c)
    }
}

impl From<EventCommand> for UiCommand {
    fn from(c: EventCommand) -> Self {
        UiCommand::Event(c)
    }
}

impl From<DelimiterCommand> for UiCommand {
    fn from(c: DelimiterCommand) -> Self {
        UiCommand::Delimiter(c)
    }
}
