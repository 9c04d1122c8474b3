//! Zentube Shell - headless replay of navigation shell events
//!
//! Main entry point for the replay binary.
//!
//! # Overview
//!
//! The binary drives the same shell the web client embeds, without a
//! browser. It initializes:
//! - Logging infrastructure (daily rolling file + stderr console)
//! - Configuration loading ([`ConfigManager`], `Shell.yaml` plus `ZENTUBE_*` overrides)
//! - The shell controller with in-memory session, theme and router providers
//! - A single-threaded tokio runtime running the shell event loop
//!
//! # Execution Flow
//!
//! 1. Parse arguments, initialize logging → logs/zentube-shell.<date>
//! 2. Load `Shell.yaml` from the config directory, apply environment overrides
//! 3. Load the YAML event script
//! 4. Feed script steps into the event loop; each step runs to completion
//!    and prints one summary line for the resulting view
//! 5. Log the metrics summary
//!
//! # Script format
//!
//! ```yaml
//! steps:
//!   - event: resize
//!     width: 600
//!   - event: sign_in
//!     user: { id: "7", display_name: Mia, role: member }
//!   - event: navigate
//!     path: /watch/abc123
//! ```

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use std::sync::Arc;
use zentube_shell::models::SessionState;
use zentube_shell::shell::{
    EventScript, InMemorySession, InMemoryTheme, ListenerRegistry, RecordingNavigator,
    ScriptStep, ShellEventLoop,
};
use zentube_shell::{APP_NAME, ConfigManager, ShellController, ShellMetrics, VERSION};

#[derive(Parser)]
#[command(name = "zentube-shell")]
#[command(about = "Replay UI events through the Zentube navigation shell")]
#[command(version)]
struct Cli {
    /// Directory holding Shell.yaml
    #[arg(long, env = "ZENTUBE_CONFIG_DIR", default_value = "Zentube Data")]
    config_dir: Utf8PathBuf,

    /// Directory for rolling log files
    #[arg(long, default_value = "logs")]
    log_dir: String,

    /// Log shell decisions at debug level
    #[arg(long)]
    debug: bool,

    /// YAML event script to replay
    script: Utf8PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard =
        zentube_shell::logging::setup_logging_with_console(&cli.log_dir, APP_NAME, cli.debug, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config_manager = ConfigManager::new(&cli.config_dir)?;
    let config = config_manager.load_with_env_overrides()?;

    let script = EventScript::load(&cli.script)
        .with_context(|| format!("Cannot replay {}", cli.script))?;

    // Events are handled one at a time on this thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let metrics = Arc::new(ShellMetrics::new());
    let session = Arc::new(InMemorySession::new(SessionState::loading()));
    let navigator = Arc::new(RecordingNavigator::new());
    let controller = ShellController::new(
        &config,
        session.clone(),
        Arc::new(InMemoryTheme::default()),
        navigator.clone(),
    )
    .with_metrics(metrics.clone());

    println!("{}", controller.view().summary());

    let registry = ListenerRegistry::new();
    let event_loop = ShellEventLoop::<ScriptStep>::new(config.event_queue_capacity, metrics.clone());
    let sender = event_loop.sender();

    let producer = async move {
        for step in script.steps {
            if !sender.send_async(step).await {
                break;
            }
        }
    };

    let consumer = event_loop.run(&registry, |step| {
        let event = step.into_event(&session);
        tracing::debug!(?event, "Replaying script step");
        let view = controller.handle(event);
        println!("{}", view.summary());
    });

    let ((), processed) = runtime.block_on(async { tokio::join!(producer, consumer) });
    let processed = processed?;

    tracing::info!(
        "Replayed {} steps, router saw {} navigations",
        processed,
        navigator.history().len()
    );
    metrics.log_summary();

    Ok(())
}
