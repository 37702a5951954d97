//! 内存版事件总线（InMemoryEventBus）
//!
//! 以事件键为索引保存监听器，同步投递，满足 `EventBus` 协议：
//! - `dispatch`：按订阅顺序依次调用该键的监听器；
//! - `subscribe` / `unsubscribe`：运行期增删监听器；
//! - 典型用途：单个应用外壳内的进程内事件、测试与示例。
//!
//! 注意：投递前先对监听器列表做快照，监听器在处理过程中增删订阅不会影响本次投递。

use crate::error::{CoreError, CoreResult as Result};
use crate::eventing::{EventBus, EventListener, ListenerId, UiEvent};
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone)]
struct Subscription {
    id: ListenerId,
    listener: Arc<dyn EventListener>,
}

/// 简单的内存事件总线实现
#[derive(Default)]
pub struct InMemoryEventBus {
    listeners: DashMap<String, Vec<Subscription>>,
    next_id: AtomicU64,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 某一事件键当前的监听器数量
    pub fn listener_count(&self, key: &str) -> usize {
        self.listeners.get(key).map_or(0, |subs| subs.len())
    }
}

impl EventBus for InMemoryEventBus {
    fn dispatch(&self, event: &UiEvent) -> Result<usize> {
        if event.key().is_empty() {
            return Err(CoreError::invalid_event("event key is empty"));
        }

        // 快照后立即释放分片锁，允许监听器重入订阅/投递
        let snapshot: Vec<Subscription> = match self.listeners.get(event.key()) {
            Some(subs) => subs.value().clone(),
            None => Vec::new(),
        };

        tracing::trace!(
            event_key = event.key(),
            event_id = %event.id(),
            listeners = snapshot.len(),
            "dispatch event"
        );

        for sub in &snapshot {
            if let Err(e) = sub.listener.handle(event) {
                let err = CoreError::EventListener {
                    listener: sub.listener.listener_name().to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!(
                    event_key = event.key(),
                    listener_id = %sub.id,
                    error = %err,
                    "event listener failed"
                );
            }
        }

        Ok(snapshot.len())
    }

    fn subscribe(&self, key: &str, listener: Arc<dyn EventListener>) -> ListenerId {
        let id = ListenerId::from_value(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .entry(key.to_string())
            .or_default()
            .push(Subscription { id, listener });
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut removed = false;
        for mut entry in self.listeners.iter_mut() {
            let subs = entry.value_mut();
            let before = subs.len();
            subs.retain(|s| s.id != id);
            if subs.len() != before {
                removed = true;
                break;
            }
        }
        self.listeners.retain(|_, subs| !subs.is_empty());
        removed
    }
}
