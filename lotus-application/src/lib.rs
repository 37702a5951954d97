pub mod command_service;
pub mod config;
pub mod context;
pub mod error;
pub mod inmemory_command_service;

pub use command_service::{CommandService, ExecuteOutcome, RegistryChange, SubscriptionId};
pub use config::{CommandServiceConfig, DuplicatePolicy};
pub use context::ShellContext;
pub use inmemory_command_service::InMemoryCommandService;
