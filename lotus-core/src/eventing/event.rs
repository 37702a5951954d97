use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// 应用级具名事件
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiEvent {
    #[builder(default = Uuid::new_v4())]
    id: Uuid,
    #[builder(into)]
    key: String,
    #[builder(default)]
    data: Value,
    parameter: Option<Value>,
    #[builder(default = Utc::now())]
    occurred_at: DateTime<Utc>,
}

impl UiEvent {
    pub fn new(key: impl Into<String>, data: Value) -> Self {
        Self::builder().key(key).data(data).build()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// 触发命令时携带的参数（若有）
    pub fn parameter(&self) -> Option<&Value> {
        self.parameter.as_ref()
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }
}
