mod args;

use anyhow::Context;
use clap::Parser;
use statusbot_core::{Config, Cursor, NotificationState};
use statusbot_poll::{PollCycle, Scheduler};
use statusbot_sync::{PracticumClient, TelegramNotifier};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command};

const DEFAULT_LOG_FILTER: &str =
    "statusbot=debug,statusbot_core=debug,statusbot_sync=debug,statusbot_poll=debug,info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("statusbot v{}", env!("CARGO_PKG_VERSION"));

    let config = match Config::from_settings(cli.settings()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "fatal: configuration incomplete, exiting");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let source = PracticumClient::from_config(&config).context("creating status API client")?;
    let notifier = TelegramNotifier::from_config(&config).context("creating Telegram client")?;
    let cycle = PollCycle::new(source, notifier);
    let cursor = Cursor::from_unix(cli.from_date.unwrap_or_else(|| chrono::Utc::now().timestamp()));

    match cli.selected_command() {
        Command::Run => {
            tracing::info!(
                period_secs = config.retry_period.as_secs(),
                from_date = %cursor,
                "starting poll loop"
            );
            match Scheduler::new(cycle, config.retry_period, cursor).start().await {}
        }
        Command::PollOnce => {
            let (cursor, state) = cycle.run(cursor, NotificationState::new()).await;
            println!("next from_date: {cursor}");
            match state.last_message() {
                Some(message) => println!("message: {message}"),
                None => println!("message: (no new statuses)"),
            }
            Ok(())
        }
    }
}
