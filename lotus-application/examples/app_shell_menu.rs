use lotus_application::command_service::command_names;
use lotus_application::{CommandService, InMemoryCommandService, RegistryChange, ShellContext};
use lotus_core::eventing::{EventBus, InMemoryEventBus, UiEvent};
use lotus_core::navigation::{InMemoryNavigator, Navigator};
use lotus_core::{Command, DelimiterCommand, Route};
use serde_json::json;
use std::sync::Arc;

fn render(service: &InMemoryCommandService) {
    let commands = service.get_all();
    println!("commands: {:?}", command_names(&commands));
    for cmd in commands {
        if cmd.is_delimiter() {
            println!("  ----------");
            continue;
        }
        let marker = if cmd.is_selected() { ">" } else { " " };
        let state = if cmd.can_execute() { "" } else { " (disabled)" };
        println!(
            "{marker} {}{state}",
            cmd.label().unwrap_or_else(|| cmd.name())
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let navigator = Arc::new(InMemoryNavigator::new("/"));
    let bus = Arc::new(InMemoryEventBus::new());
    let ctx = ShellContext::new(navigator.clone(), bus.clone());
    let service = InMemoryCommandService::new();

    service.subscribe(Arc::new(|change: &RegistryChange| {
        println!("registry: {change:?}");
    }));
    bus.subscribe(
        "settings:open",
        Arc::new(|e: &UiEvent| -> anyhow::Result<()> {
            println!("settings requested: {}", e.data());
            Ok(())
        }),
    );

    service.add(ctx.navigation("home", Route::builder().path("/").title("Home").build()));
    service.add(ctx.navigation("about", Route::builder().path("/about").title("About").build()));
    service.add(DelimiterCommand::default());
    service.add(
        ctx.event_with_payload("openSettings", "settings:open", &json!({ "tab": "profile" }))?
            .with_label("Settings"),
    );

    render(&service);

    service.execute_by_name("about", None);
    println!("location: {}", navigator.current_path());
    render(&service);

    service.execute_by_name("openSettings", None);

    // 未注册的命令 -> 静默跳过
    let outcome = service.execute_by_name("help", None);
    println!("help: {outcome:?}");

    Ok(())
}
