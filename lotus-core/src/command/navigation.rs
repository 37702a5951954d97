//! 导航命令（NavigationCommand）
//!
//! - `execute`：调用导航宿主切换到 `route.path`，命令自身状态不变；
//! - `is_selected`：当前路径与 `route.path` 完全相等时为 `true`
//!   （区分大小写、不处理尾部斜杠、不做前缀匹配），每次调用都重新读取；
//! - 未提供路由时 `execute` 为空操作、`is_selected` 恒为 `false`。
//!
use super::{Command, CommandMeta, CommandParameter};
use crate::navigation::Navigator;
use crate::route::Route;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct NavigationCommand {
    name: String,
    route: Option<Route>,
    navigator: Arc<dyn Navigator>,
    parameter: Option<CommandParameter>,
    meta: CommandMeta,
}

impl NavigationCommand {
    pub fn new(
        name: impl Into<String>,
        route: impl Into<Option<Route>>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            navigator,
            parameter: None,
            meta: CommandMeta::default(),
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

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }
}

impl Command for NavigationCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter(&self) -> Option<&CommandParameter> {
        self.parameter.as_ref()
    }

    /// 未设置标签时使用路由标题
    fn label(&self) -> Option<&str> {
        self.meta
            .label
            .as_deref()
            .or_else(|| self.route.as_ref().and_then(Route::title))
    }

    fn icon(&self) -> Option<&str> {
        self.meta.icon.as_deref()
    }

    fn execute_with(&self, _parameter: Option<&CommandParameter>) {
        match &self.route {
            Some(route) => self.navigator.navigate(route.path()),
            None => tracing::debug!(command = %self.name, "navigation command has no route"),
        }
    }

    fn is_selected(&self) -> bool {
        self.route
            .as_ref()
            .is_some_and(|route| self.navigator.current_path() == route.path())
    }
}

impl fmt::Debug for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationCommand")
            .field("name", &self.name)
            .field("route", &self.route)
            .field("parameter", &self.parameter)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}
