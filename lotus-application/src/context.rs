use crate::error::AppError;
use lotus_core::eventing::EventBus;
use lotus_core::navigation::Navigator;
use lotus_core::{EventCommand, NavigationCommand, Route};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// 应用外壳上下文（Shell Context）
///
/// 承载一个逻辑 UI 作用域（例如一个应用外壳）内命令所需的协作者：
/// - 导航宿主（`Navigator`）：切换可见位置、报告当前路径；
/// - 事件总线（`EventBus`）：投递具名应用事件。
///
/// 典型用法：
/// ```rust
/// use lotus_application::context::ShellContext;
/// use lotus_application::{CommandService, InMemoryCommandService};
/// use lotus_core::eventing::InMemoryEventBus;
/// use lotus_core::navigation::InMemoryNavigator;
/// use lotus_core::Route;
/// use std::sync::Arc;
///
/// let ctx = ShellContext::new(
///     Arc::new(InMemoryNavigator::new("/")),
///     Arc::new(InMemoryEventBus::new()),
/// );
/// let service = InMemoryCommandService::new();
/// service.add(ctx.navigation("home", Route::new("/")));
/// assert!(service.find("home").is_some());
/// ```
#[derive(Clone)]
pub struct ShellContext {
    navigator: Arc<dyn Navigator>,
    event_bus: Arc<dyn EventBus>,
}

impl ShellContext {
    pub fn new(navigator: Arc<dyn Navigator>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            navigator,
            event_bus,
        }
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn event_bus(&self) -> &Arc<dyn EventBus> {
        &self.event_bus
    }

    /// 构造绑定本上下文导航宿主的导航命令
    pub fn navigation(
        &self,
        name: impl Into<String>,
        route: impl Into<Option<Route>>,
    ) -> NavigationCommand {
        NavigationCommand::new(name, route, self.navigator.clone())
    }

    /// 构造绑定本上下文事件总线的事件命令
    pub fn event(
        &self,
        name: impl Into<String>,
        event_key: impl Into<String>,
        event_data: Value,
    ) -> EventCommand {
        EventCommand::new(name, event_key, event_data, self.event_bus.clone())
    }

    /// 以可序列化负载构造事件命令
    pub fn event_with_payload<T: Serialize>(
        &self,
        name: impl Into<String>,
        event_key: impl Into<String>,
        payload: &T,
    ) -> Result<EventCommand, AppError> {
        Ok(EventCommand::with_payload(
            name,
            event_key,
            payload,
            self.event_bus.clone(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotus_core::Command;
    use lotus_core::eventing::InMemoryEventBus;
    use lotus_core::navigation::InMemoryNavigator;
    use serde::ser::{Error as _, Serializer};
    use serde_json::json;

    fn context() -> (ShellContext, Arc<InMemoryNavigator>) {
        let nav = Arc::new(InMemoryNavigator::new("/"));
        let ctx = ShellContext::new(nav.clone(), Arc::new(InMemoryEventBus::new()));
        (ctx, nav)
    }

    #[test]
    fn navigation_uses_context_navigator() {
        let (ctx, nav) = context();
        let cmd = ctx.navigation("about", Route::new("/about"));

        cmd.execute();
        assert_eq!(nav.current_path(), "/about");
        assert_eq!(ctx.navigator().current_path(), "/about");
        assert!(cmd.is_selected());
    }

    #[test]
    fn event_with_payload_serializes() {
        let (ctx, _) = context();
        let cmd = ctx
            .event_with_payload("open", "settings:open", &json!({ "tab": "profile" }))
            .unwrap();
        assert_eq!(cmd.event_data(), &json!({ "tab": "profile" }));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    #[test]
    fn payload_failure_maps_to_core_error() {
        let (ctx, _) = context();
        let err = ctx
            .event_with_payload("bad", "k", &Unserializable)
            .unwrap_err();
        assert!(matches!(err, AppError::Core(_)));
    }
}
