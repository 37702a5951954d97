//! 事件子系统（eventing）
//!
//! 提供应用级具名事件的发布与监听：
//! - `UiEvent`：具名事件及其负载；
//! - `EventListener`：对某一事件键进行同步处理；
//! - `EventBus`：统一投递/订阅接口；
//! - `InMemoryEventBus`：同步投递的内存实现。
//!
//! `EventCommand` 在本核心内只是生产者，独立的 UI 监听器是核心外部的消费者。
//!
pub mod bus;
pub mod bus_inmemory;
pub mod event;
pub mod listener;

pub use bus::{EventBus, ListenerId};
pub use bus_inmemory::InMemoryEventBus;
pub use event::UiEvent;
pub use listener::EventListener;
