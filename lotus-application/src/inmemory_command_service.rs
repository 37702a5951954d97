use crate::command_service::{
    CommandService, ExecuteOutcome, RegistryChange, RegistryListener, SubscriptionId,
};
use crate::config::{CommandServiceConfig, DuplicatePolicy};
use indexmap::IndexMap;
use lotus_core::command::{Command, CommandParameter, UiCommand};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// 基于内存的 CommandService 实现
/// - 以 `IndexMap` 保存命令，保留插入顺序
/// - 查找与执行时先克隆出 `Arc` 再释放锁，命令与订阅者可以重入修改注册表
pub struct InMemoryCommandService {
    commands: RwLock<IndexMap<String, Arc<UiCommand>>>,
    subscribers: RwLock<Vec<(SubscriptionId, RegistryListener)>>,
    next_subscription: AtomicU64,
    config: CommandServiceConfig,
}

impl Default for InMemoryCommandService {
    fn default() -> Self {
        Self::with_config(CommandServiceConfig::default())
    }
}

impl InMemoryCommandService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CommandServiceConfig) -> Self {
        Self {
            commands: RwLock::new(IndexMap::new()),
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            config,
        }
    }

    pub fn config(&self) -> &CommandServiceConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.commands.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.read().is_empty()
    }

    /// 已注册命令名称（插入顺序）
    pub fn names(&self) -> Vec<String> {
        self.commands.read().keys().cloned().collect()
    }

    fn notify(&self, change: &RegistryChange) {
        let snapshot: Vec<RegistryListener> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener(change);
        }
    }
}

impl CommandService for InMemoryCommandService {
    fn add_shared(&self, command: Arc<UiCommand>) {
        let name = command.name().to_string();
        let kind = command.kind();

        let replaced = {
            let mut commands = self.commands.write();
            match self.config.duplicate_policy {
                DuplicatePolicy::ReplaceInPlace => {
                    commands.insert(name.clone(), command).is_some()
                }
                DuplicatePolicy::MoveToEnd => {
                    let existed = commands.shift_remove(&name).is_some();
                    commands.insert(name.clone(), command);
                    existed
                }
            }
        };

        if replaced {
            tracing::debug!(
                command = %name,
                kind,
                policy = ?self.config.duplicate_policy,
                "command replaced"
            );
            if self.config.notify_on_replace {
                self.notify(&RegistryChange::Replaced { name });
            }
        } else {
            tracing::debug!(command = %name, kind, "command added");
            self.notify(&RegistryChange::Added { name });
        }
    }

    fn remove(&self, name: &str) {
        let removed = self.commands.write().shift_remove(name).is_some();
        if removed {
            tracing::debug!(command = %name, "command removed");
            self.notify(&RegistryChange::Removed {
                name: name.to_string(),
            });
        }
    }

    fn set_all(&self, commands: Vec<Arc<UiCommand>>) {
        let mut next: IndexMap<String, Arc<UiCommand>> = IndexMap::with_capacity(commands.len());
        for command in commands {
            let name = command.name().to_string();
            if let DuplicatePolicy::MoveToEnd = self.config.duplicate_policy {
                next.shift_remove(&name);
            }
            next.insert(name, command);
        }

        let count = next.len();
        *self.commands.write() = next;

        tracing::debug!(count, "command list replaced");
        self.notify(&RegistryChange::Reset { count });
    }

    fn clear(&self) {
        let removed = std::mem::take(&mut *self.commands.write());
        if removed.is_empty() {
            return;
        }

        tracing::debug!(removed = removed.len(), "command list cleared");
        self.notify(&RegistryChange::Reset { count: 0 });
    }

    fn find(&self, name: &str) -> Option<Arc<UiCommand>> {
        self.commands.read().get(name).cloned()
    }

    fn get_all(&self) -> Vec<Arc<UiCommand>> {
        self.commands.read().values().cloned().collect()
    }

    fn execute_by_name(
        &self,
        name: &str,
        parameter: Option<&CommandParameter>,
    ) -> ExecuteOutcome {
        let Some(command) = self.find(name) else {
            tracing::debug!(command = %name, "execute skipped: command not found");
            return ExecuteOutcome::NotFound;
        };

        if !command.can_execute() {
            tracing::debug!(
                command = %name,
                kind = command.kind(),
                "execute skipped: command disabled"
            );
            return ExecuteOutcome::Disabled;
        }

        command.execute_with(parameter);
        tracing::trace!(command = %name, kind = command.kind(), "command executed");
        ExecuteOutcome::Executed
    }

    fn subscribe(&self, listener: RegistryListener) -> SubscriptionId {
        let id =
            SubscriptionId::from_value(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_service::command_names;
    use lotus_core::{BaseCommand, DelimiterCommand};
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    fn counting(name: &str, counter: &Arc<AtomicUsize>) -> BaseCommand {
        let c = counter.clone();
        BaseCommand::new(name).on_execute(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn recorder(service: &InMemoryCommandService) -> Arc<Mutex<Vec<RegistryChange>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        service.subscribe(Arc::new(move |change: &RegistryChange| {
            s.lock().push(change.clone())
        }));
        seen
    }

    #[test]
    fn add_then_find_returns_added_command() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("open").with_label("Open"));

        let found = service.find("open").unwrap();
        assert_eq!(found.name(), "open");
        assert_eq!(found.label(), Some("Open"));
        assert!(service.contains("open"));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn get_all_preserves_insertion_order_with_delimiters() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("new"));
        service.add(BaseCommand::new("open"));
        service.add(DelimiterCommand::new("sep-1"));
        service.add(BaseCommand::new("exit"));

        let all = service.get_all();
        assert_eq!(command_names(&all), vec!["new", "open", "sep-1", "exit"]);
        assert!(all[2].is_delimiter());
    }

    #[test]
    fn duplicate_add_replaces_in_place_by_default() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("a"));
        service.add(BaseCommand::new("b").with_label("old"));
        service.add(BaseCommand::new("c"));
        service.add(BaseCommand::new("b").with_label("new"));

        assert_eq!(service.names(), vec!["a", "b", "c"]);
        assert_eq!(service.find("b").unwrap().label(), Some("new"));
    }

    #[test]
    fn duplicate_add_moves_to_end_when_configured() {
        let service = InMemoryCommandService::with_config(
            CommandServiceConfig::builder()
                .duplicate_policy(DuplicatePolicy::MoveToEnd)
                .build(),
        );
        service.add(BaseCommand::new("a"));
        service.add(BaseCommand::new("b").with_label("old"));
        service.add(BaseCommand::new("c"));
        service.add(BaseCommand::new("b").with_label("new"));

        assert_eq!(service.names(), vec!["a", "c", "b"]);
        assert_eq!(service.find("b").unwrap().label(), Some("new"));
        assert_eq!(service.get_all().len(), 3);
    }

    #[test]
    fn remove_then_find_is_none() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("a"));
        service.add(BaseCommand::new("b"));

        service.remove("a");
        assert!(service.find("a").is_none());
        assert_eq!(service.names(), vec!["b"]);

        service.remove("missing");
        assert_eq!(service.get_all().len(), 1);
    }

    #[test]
    fn execute_by_name_respects_can_execute() {
        let service = InMemoryCommandService::new();
        let count = Arc::new(AtomicUsize::new(0));
        service.add(counting("locked", &count).can_execute_when(|| false));
        service.add(counting("open", &count));

        assert_eq!(service.execute_by_name("locked", None), ExecuteOutcome::Disabled);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert!(service.execute_by_name("open", None).is_executed());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn execute_by_name_for_unknown_name_is_silent() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("a"));
        let changes = recorder(&service);

        assert_eq!(service.execute_by_name("ghost", None), ExecuteOutcome::NotFound);
        assert_eq!(service.names(), vec!["a"]);
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn execute_by_name_passes_parameter() {
        let service = InMemoryCommandService::new();
        let seen = Arc::new(Mutex::new(None));
        let s = seen.clone();
        service.add(BaseCommand::new("zoom").on_execute(move |p| *s.lock() = p.cloned()));

        service.execute_by_name("zoom", Some(&json!({ "level": 2 })));
        assert_eq!(*seen.lock(), Some(json!({ "level": 2 })));
    }

    #[test]
    fn delimiter_is_never_executed_by_name() {
        let service = InMemoryCommandService::new();
        let delimiter = DelimiterCommand::default();
        let name = delimiter.name().to_string();
        service.add(delimiter);
        assert_eq!(service.execute_by_name(&name, None), ExecuteOutcome::Disabled);
    }

    #[test]
    fn subscribers_observe_changes_in_order() {
        let service = InMemoryCommandService::new();
        let changes = recorder(&service);

        service.add(BaseCommand::new("a"));
        service.add(BaseCommand::new("a"));
        service.remove("a");
        service.remove("a");

        assert_eq!(
            *changes.lock(),
            vec![
                RegistryChange::Added { name: "a".into() },
                RegistryChange::Replaced { name: "a".into() },
                RegistryChange::Removed { name: "a".into() },
            ]
        );
    }

    #[test]
    fn replace_notification_can_be_disabled() {
        let service = InMemoryCommandService::with_config(
            CommandServiceConfig::builder().notify_on_replace(false).build(),
        );
        let changes = recorder(&service);

        service.add(BaseCommand::new("a"));
        service.add(BaseCommand::new("a"));

        assert_eq!(*changes.lock(), vec![RegistryChange::Added { name: "a".into() }]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let service = InMemoryCommandService::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let id = service.subscribe(Arc::new(move |_: &RegistryChange| {
            h.fetch_add(1, Ordering::SeqCst);
        }));

        service.add(BaseCommand::new("a"));
        assert!(service.unsubscribe(id));
        assert!(!service.unsubscribe(id));
        service.add(BaseCommand::new("b"));

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscriber_may_mutate_registry() {
        let service = Arc::new(InMemoryCommandService::new());
        let inner = service.clone();
        service.subscribe(Arc::new(move |change: &RegistryChange| {
            if let RegistryChange::Added { name } = change {
                if name == "trigger" {
                    inner.add(BaseCommand::new("follow-up"));
                }
            }
        }));

        service.add(BaseCommand::new("trigger"));
        assert_eq!(service.names(), vec!["trigger", "follow-up"]);
    }

    #[test]
    fn found_command_is_shared_not_copied() {
        let service = InMemoryCommandService::new();
        let shared = Arc::new(UiCommand::from(BaseCommand::new("a")));
        service.add_shared(shared.clone());

        assert!(Arc::ptr_eq(&service.find("a").unwrap(), &shared));
    }

    #[test]
    fn default_delimiters_are_all_kept() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("new"));
        service.add(DelimiterCommand::default());
        service.add(BaseCommand::new("open"));
        service.add(DelimiterCommand::default());
        service.add(BaseCommand::new("exit"));

        let all = service.get_all();
        let shape: Vec<bool> = all.iter().map(|c| c.is_delimiter()).collect();
        assert_eq!(shape, vec![false, true, false, true, false]);
        assert_ne!(all[1].name(), all[3].name());
    }

    #[test]
    fn set_all_replaces_list_with_single_reset() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("stale"));
        let changes = recorder(&service);

        service.set_commands(vec![
            UiCommand::from(BaseCommand::new("new")),
            DelimiterCommand::default().into(),
            BaseCommand::new("open").into(),
        ]);

        let all = service.get_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name(), "new");
        assert!(all[1].is_delimiter());
        assert_eq!(all[2].name(), "open");
        assert!(service.find("stale").is_none());
        assert_eq!(*changes.lock(), vec![RegistryChange::Reset { count: 3 }]);
        assert_eq!(changes.lock()[0].name(), None);
    }

    #[test]
    fn set_all_applies_duplicate_policy_within_batch() {
        let batch = || {
            vec![
                Arc::new(UiCommand::from(BaseCommand::new("a"))),
                Arc::new(UiCommand::from(BaseCommand::new("b").with_label("old"))),
                Arc::new(UiCommand::from(BaseCommand::new("c"))),
                Arc::new(UiCommand::from(BaseCommand::new("b").with_label("new"))),
            ]
        };

        let in_place = InMemoryCommandService::new();
        in_place.set_all(batch());
        assert_eq!(in_place.names(), vec!["a", "b", "c"]);
        assert_eq!(in_place.find("b").unwrap().label(), Some("new"));

        let move_to_end = InMemoryCommandService::with_config(
            CommandServiceConfig::builder()
                .duplicate_policy(DuplicatePolicy::MoveToEnd)
                .build(),
        );
        move_to_end.set_all(batch());
        assert_eq!(move_to_end.names(), vec!["a", "c", "b"]);
        assert_eq!(move_to_end.find("b").unwrap().label(), Some("new"));
    }

    #[test]
    fn clear_empties_registry_and_notifies_once() {
        let service = InMemoryCommandService::new();
        service.add(BaseCommand::new("a"));
        service.add(BaseCommand::new("b"));
        let changes = recorder(&service);

        service.clear();
        service.clear();

        assert!(service.is_empty());
        assert_eq!(*changes.lock(), vec![RegistryChange::Reset { count: 0 }]);
    }

    #[test]
    fn subscriber_may_mutate_registry_on_reset() {
        let service = Arc::new(InMemoryCommandService::new());
        let inner = service.clone();
        service.subscribe(Arc::new(move |change: &RegistryChange| {
            if let RegistryChange::Reset { count: 0 } = change {
                inner.add(BaseCommand::new("placeholder"));
            }
        }));

        service.add(BaseCommand::new("a"));
        service.clear();
        assert_eq!(service.names(), vec!["placeholder"]);
    }
}
