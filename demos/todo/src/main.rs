//! Interactive to-do list.
//!
//! Reads one command per line from stdin and dispatches it to the store.
//! Every new state is printed by a subscriber, so the list shown is always
//! the one the store holds. Type `help` for the command list.

use anyhow::Context;
use flowstate_runtime::metrics::MetricsRecorder;
use flowstate_runtime::{SharedStore, Store, StoreConfig, Subscriber};
use std::sync::Arc;
use todo::command::HELP;
use todo::{AppState, Command, ListSnapshot, TodoAction, TodoConfig, app_reducer, seed_actions};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TodoConfig::from_env().context("Invalid configuration")?;

    // Initialize tracing (stderr, so stdout stays the list)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut recorder = MetricsRecorder::new();
    if config.print_metrics {
        recorder.install().context("Failed to install metrics recorder")?;
    }

    let store = SharedStore::new(Store::with_config(
        AppState::new(),
        app_reducer(),
        StoreConfig::default().with_name("todos"),
    ));

    if config.seed {
        store.send_all(seed_actions()).await;
    }
    store
        .send(TodoAction::SetVisibilityFilter {
            filter: config.filter,
        })
        .await;

    let printer: Subscriber<AppState> = Arc::new(|state: &AppState| {
        println!("{}\n", ListSnapshot::from_state(state).render());
    });
    store.subscribe(printer.clone()).await;

    tracing::info!(seed = config.seed, filter = %config.filter, "Todo list ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Dispatch(action)) => store.send(action).await,
            Ok(Command::List) => {
                let text = store.state(|s| ListSnapshot::from_state(s).render()).await;
                println!("{text}\n");
            },
            Ok(Command::Json) => {
                let json = store.state(serde_json::to_string_pretty).await?;
                println!("{json}");
            },
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected command");
                eprintln!("{e}");
            },
        }
    }

    store.unsubscribe(&printer).await;

    if let Some(rendered) = recorder.render() {
        println!("{rendered}");
    }

    Ok(())
}
