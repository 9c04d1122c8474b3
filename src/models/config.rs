use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shell configuration from Shell.yaml
///
/// Every field has a default so a partial file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Viewports narrower than this are mobile
    pub breakpoint_px: u32,

    /// Redirect target for signed-in users hitting guest-only pages
    /// and for non-admins hitting admin pages
    pub home_path: String,

    /// Redirect target for anonymous users hitting protected pages
    pub auth_path: String,

    /// Path prefixes that always show the collapsed rail
    pub mini_sidebar_paths: Vec<String>,

    /// Path prefixes that show no sidebar at all
    pub no_sidebar_paths: Vec<String>,

    pub mini_offset_px: u32,
    pub full_offset_px: u32,
    pub header_height_px: u32,

    /// Badge count shown on the notifications trigger
    pub notification_count: u32,

    /// Capacity of the shell event queue
    pub event_queue_capacity: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            home_path: "/".to_string(),
            auth_path: "/auth".to_string(),
            mini_sidebar_paths: vec!["/watch".to_string(), "/shorts".to_string()],
            no_sidebar_paths: vec!["/auth".to_string()],
            mini_offset_px: 72,
            full_offset_px: 240,
            header_height_px: 56,
            notification_count: 3,
            event_queue_capacity: 100,
        }
    }
}

/// Reasons a loaded configuration is rejected
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Breakpoint must be greater than zero")]
    ZeroBreakpoint,

    #[error("Mini sidebar offset ({mini}px) must be smaller than full offset ({full}px)")]
    OffsetOrder { mini: u32, full: u32 },

    #[error("Path {0:?} must start with '/'")]
    RelativePath(String),

    #[error("Event queue capacity must be greater than zero")]
    ZeroQueueCapacity,
}

impl ShellConfig {
    /// Check the invariants the layout engine and guard rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint_px == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        if self.mini_offset_px >= self.full_offset_px {
            return Err(ConfigError::OffsetOrder {
                mini: self.mini_offset_px,
                full: self.full_offset_px,
            });
        }
        if self.event_queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }

        let paths = [&self.home_path, &self.auth_path]
            .into_iter()
            .chain(self.mini_sidebar_paths.iter())
            .chain(self.no_sidebar_paths.iter());
        for path in paths {
            if !path.starts_with('/') {
                return Err(ConfigError::RelativePath(path.clone()));
            }
        }

        Ok(())
    }
}
