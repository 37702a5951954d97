//! Lotus 命令核心库（lotus-core）
//!
//! 提供 UI 命令分发子系统的领域层构件：
//! - 路由描述（`route`）：导航目标的值对象；
//! - 命令（`command`）：`Command` 能力契约与 Base/Navigation/Event/Delimiter 四种变体；
//! - 导航宿主（`navigation`）：切换可见位置并报告当前路径的协作者；
//! - 事件系统（`eventing`）：具名事件、监听器与同步投递的事件总线；
//! - 统一错误（`error`）。
//!
//! 本 crate 不绑定任何渲染层或浏览器运行时，导航宿主与事件总线均以显式协作者的方式注入，
//! 以便在没有真实 UI 的环境中进行测试。
//!
//! 典型用法：
//! 1. 构造 `InMemoryNavigator` 与 `InMemoryEventBus`（或宿主自己的实现）；
//! 2. 以协作者构造 `NavigationCommand` / `EventCommand`，分隔处使用 `DelimiterCommand`；
//! 3. 渲染时读取 `can_execute` / `is_selected`，交互时调用 `execute`。
//!
pub mod command;
pub mod error;
pub mod eventing;
pub mod navigation;
pub mod route;

pub use command::{
    BaseCommand, Command, CommandMeta, CommandParameter, DelimiterCommand, EventCommand,
    NavigationCommand, UiCommand,
};
pub use error::{CoreError, CoreResult};
pub use route::Route;
