use crate::models::ShellConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Environment prefix for overrides, e.g. `ZENTUBE_BREAKPOINT_PX=1024`
pub const ENV_PREFIX: &str = "ZENTUBE";

const SHELL_CONFIG_FILE: &str = "Shell.yaml";

/// Configuration manager for loading and saving the shell's YAML configuration.
///
/// Manages a single file, `Shell.yaml`, inside the configuration directory.
/// Environment variables with the `ZENTUBE_` prefix can override any field
/// through [`ConfigManager::load_with_env_overrides`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    shell_config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing `Shell.yaml` (created if missing)
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            shell_config_path: config_dir.join(SHELL_CONFIG_FILE),
            config_dir,
        })
    }

    /// Load `Shell.yaml`.
    ///
    /// # Returns
    /// The validated ShellConfig, or defaults if the file doesn't exist
    pub fn load_shell_config(&self) -> Result<ShellConfig> {
        if !self.shell_config_path.exists() {
            tracing::warn!(
                "Shell config file not found at {}, using defaults",
                self.shell_config_path
            );
            return Ok(ShellConfig::default());
        }

        let file_contents = fs::read_to_string(&self.shell_config_path)
            .with_context(|| format!("Failed to read shell config: {}", self.shell_config_path))?;

        let config: ShellConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse shell config: {}", self.shell_config_path))?;

        config
            .validate()
            .with_context(|| format!("Invalid shell config: {}", self.shell_config_path))?;

        tracing::info!("Loaded shell config from {}", self.shell_config_path);
        Ok(config)
    }

    /// Save `Shell.yaml`.
    pub fn save_shell_config(&self, config: &ShellConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize shell config to YAML")?;

        fs::write(&self.shell_config_path, yaml_string)
            .with_context(|| format!("Failed to write shell config: {}", self.shell_config_path))?;

        tracing::info!("Saved shell config to {}", self.shell_config_path);
        Ok(())
    }

    /// Load `Shell.yaml` layered under `ZENTUBE_*` environment variables.
    pub fn load_with_env_overrides(&self) -> Result<ShellConfig> {
        self.load_with_env_overrides_prefixed(ENV_PREFIX)
    }

    /// Same as [`load_with_env_overrides`](Self::load_with_env_overrides)
    /// with a custom variable prefix.
    ///
    /// List fields take comma-separated values:
    /// `ZENTUBE_MINI_SIDEBAR_PATHS=/watch,/shorts,/live`
    pub fn load_with_env_overrides_prefixed(&self, prefix: &str) -> Result<ShellConfig> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::new(self.shell_config_path.as_str(), ::config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(prefix)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("mini_sidebar_paths")
                    .with_list_parse_key("no_sidebar_paths"),
            )
            .build()
            .with_context(|| {
                format!(
                    "Failed to layer shell config {} with {}_* overrides",
                    self.shell_config_path, prefix
                )
            })?;

        let config: ShellConfig = settings
            .try_deserialize()
            .context("Failed to deserialize layered shell config")?;

        config.validate().context("Invalid layered shell config")?;

        tracing::info!(
            "Loaded shell config from {} with {}_* overrides (breakpoint={}px)",
            self.shell_config_path,
            prefix,
            config.breakpoint_px
        );
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn shell_config_path(&self) -> &Utf8Path {
        &self.shell_config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = manager.load_shell_config().unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_save_shell_config() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = ShellConfig {
            breakpoint_px: 1024,
            notification_count: 9,
            ..ShellConfig::default()
        };
        manager.save_shell_config(&config).unwrap();

        let loaded = manager.load_shell_config().unwrap();
        assert_eq!(loaded.breakpoint_px, 1024);
        assert_eq!(loaded.notification_count, 9);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(
            manager.shell_config_path(),
            "mini_offset_px: 300\nfull_offset_px: 240\n",
        )
        .unwrap();

        let err = manager.load_shell_config().unwrap_err();
        assert!(err.to_string().contains("Invalid shell config"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = Utf8PathBuf::try_from(temp_dir.path().join("a").join("b")).unwrap();

        let manager = ConfigManager::new(&nested).unwrap();
        assert!(manager.config_dir().exists());
    }
}
