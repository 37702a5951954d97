//! 事件命令（EventCommand）
//!
//! `execute` 以 `event_key` 与 `event_data` 构造具名事件并投递到事件总线，
//! 解耦的监听器据此作出响应。“发出即忘”：无确认、无重试，投递失败只记录日志。
//!
use super::{Command, CommandMeta, CommandParameter, effective_parameter};
use crate::error::CoreResult;
use crate::eventing::{EventBus, UiEvent};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventCommand {
    name: String,
    event_key: String,
    event_data: Value,
    bus: Arc<dyn EventBus>,
    parameter: Option<CommandParameter>,
    meta: CommandMeta,
}

impl EventCommand {
    pub fn new(
        name: impl Into<String>,
        event_key: impl Into<String>,
        event_data: Value,
        bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            name: name.into(),
            event_key: event_key.into(),
            event_data,
            bus,
            parameter: None,
            meta: CommandMeta::default(),
        }
    }

    /// 以任意可序列化的负载构造
    pub fn with_payload<T: Serialize>(
        name: impl Into<String>,
        event_key: impl Into<String>,
        payload: &T,
        bus: Arc<dyn EventBus>,
    ) -> CoreResult<Self> {
        let event_data = serde_json::to_value(payload)?;
        Ok(Self::new(name, event_key, event_data, bus))
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

    pub fn event_key(&self) -> &str {
        &self.event_key
    }

    pub fn event_data(&self) -> &Value {
        &self.event_data
    }
}

impl Command for EventCommand {
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
        let event = UiEvent::builder()
            .key(self.event_key.as_str())
            .data(self.event_data.clone())
            .maybe_parameter(effective_parameter(parameter, self.parameter.as_ref()).cloned())
            .build();

        match self.bus.dispatch(&event) {
            Ok(listeners) => tracing::trace!(
                command = %self.name,
                event_key = %self.event_key,
                listeners,
                "event command dispatched"
            ),
            Err(e) => tracing::warn!(
                command = %self.name,
                event_key = %self.event_key,
                error = %e,
                "event command dispatch failed"
            ),
        }
    }
}

impl fmt::Debug for EventCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventCommand")
            .field("name", &self.name)
            .field("event_key", &self.event_key)
            .field("event_data", &self.event_data)
            .field("parameter", &self.parameter)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}
