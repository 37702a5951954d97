//! 基础命令（BaseCommand）
//!
//! 默认行为：`execute` 为空操作、`can_execute` 恒为 `true`、`is_selected` 恒为 `false`。
//! 界面搭建代码可通过闭包逐项覆盖这些默认行为。
//!
use super::{Command, CommandMeta, CommandParameter, effective_parameter};
use std::fmt;
use std::sync::Arc;

type ExecuteFn = Arc<dyn Fn(Option<&CommandParameter>) + Send + Sync>;
type PredicateFn = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
pub struct BaseCommand {
    name: String,
    parameter: Option<CommandParameter>,
    meta: CommandMeta,
    on_execute: Option<ExecuteFn>,
    can_execute: Option<PredicateFn>,
    is_selected: Option<PredicateFn>,
}

impl BaseCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: None,
            meta: CommandMeta::default(),
            on_execute: None,
            can_execute: None,
            is_selected: None,
        }
    }

    pub fn with_parameter(mut self, parameter: CommandParameter) -> Self {
        self.parameter = Some(parameter);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.meta.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.meta.icon = Some(icon.into());
        self
    }

    /// 覆盖 `execute`；闭包收到本次执行的有效参数
    pub fn on_execute<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&CommandParameter>) + Send + Sync + 'static,
    {
        self.on_execute = Some(Arc::new(f));
        self
    }

    /// 覆盖 `can_execute`
    pub fn can_execute_when<F>(mut self, f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.can_execute = Some(Arc::new(f));
        self
    }

    /// 覆盖 `is_selected`
    pub fn selected_when<F>(mut self, f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.is_selected = Some(Arc::new(f));
        self
    }

    pub fn meta(&self) -> &CommandMeta {
        &self.meta
    }
}

impl Command for BaseCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter(&self) -> Option<&CommandParameter> {
        self.parameter.as_ref()
    }

    fn label(&self) -> Option<&str> {
        self.meta.label.as_deref()
    }

    fn icon(&self) -> Option<&str> {
        self.meta.icon.as_deref()
    }

    fn execute_with(&self, parameter: Option<&CommandParameter>) {
        if let Some(f) = &self.on_execute {
            f(effective_parameter(parameter, self.parameter.as_ref()));
        }
    }

    fn can_execute(&self) -> bool {
        self.can_execute.as_ref().is_none_or(|f| f())
    }

    fn is_selected(&self) -> bool {
        self.is_selected.as_ref().is_some_and(|f| f())
    }
}

impl fmt::Debug for BaseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseCommand")
            .field("name", &self.name)
            .field("parameter", &self.parameter)
            .field("meta", &self.meta)
            .field("on_execute", &self.on_execute.is_some())
            .finish_non_exhaustive()
    }
}
