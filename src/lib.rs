// Zentube Shell - Navigation shell for the Zentube video web client
//
// This is the library crate containing the route guard, the responsive
// layout engine and the overlay coordinator, plus the state and event
// plumbing around them. The binary crate (main.rs) replays event scripts.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod shell;
pub mod state;

// Re-export commonly used types for convenience
pub use self::config::ConfigManager;
pub use metrics::ShellMetrics;
pub use models::{GuardVerdict, LayoutResolution, OverlayId, RouteClass, SessionState, ShellConfig};
pub use shell::{ShellController, ShellEvent, ShellView};
pub use state::{ShellChange, ShellStateManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
