// Event scripts for headless replay
//
// A script is a YAML list of steps. Most steps are plain shell events; the
// session steps stand in for the identity provider changing state and are
// turned into a `session_refreshed` event after updating the in-memory source.

use crate::models::User;
use crate::shell::controller::ShellEvent;
use crate::shell::providers::InMemorySession;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read event script {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event script {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Identity provider changes simulated by a script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionStep {
    SignIn { user: User },
    SignOut,
    SessionLoading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Session(SessionStep),
    Shell(ShellEvent),
}

impl ScriptStep {
    /// Apply any session change and return the event to hand to the controller.
    pub fn into_event(self, session: &InMemorySession) -> ShellEvent {
        match self {
            ScriptStep::Shell(event) => event,
            ScriptStep::Session(step) => {
                match step {
                    SessionStep::SignIn { user } => {
                        tracing::info!(user = %user.display_name, "Script: sign in");
                        session.sign_in(user);
                    }
                    SessionStep::SignOut => {
                        tracing::info!("Script: sign out");
                        session.set(crate::models::SessionState::anonymous());
                    }
                    SessionStep::SessionLoading => session.begin_loading(),
                }
                ShellEvent::SessionRefreshed
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl EventScript {
    pub fn load(path: &Utf8Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let script: EventScript =
            serde_yaml_ng::from_str(&contents).map_err(|source| ScriptError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Loaded {} script steps from {}", script.steps.len(), path);
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OverlayId, Rect, Role, SessionState};
    use crate::shell::providers::SessionSource;

    const SCRIPT: &str = r#"
steps:
  - event: resize
    width: 600
  - event: sign_in
    user:
      id: "7"
      display_name: Mia
      role: member
  - event: navigate
    path: /history
  - event: toggle_overlay
    id: notifications
  - event: register_region
    id: create
    region: { x: 0, y: 0, width: 10, height: 10 }
  - event: pointer_down
    x: 5
    y: 5
  - event: sign_out
  - event: logout
"#;

    #[test]
    fn test_parse_mixed_steps() {
        let script: EventScript = serde_yaml_ng::from_str(SCRIPT).unwrap();
        assert_eq!(script.len(), 8);

        assert_eq!(
            script.steps[0],
            ScriptStep::Shell(ShellEvent::Resize { width: 600 })
        );
        assert!(matches!(
            script.steps[1],
            ScriptStep::Session(SessionStep::SignIn { .. })
        ));
        assert_eq!(
            script.steps[3],
            ScriptStep::Shell(ShellEvent::ToggleOverlay {
                id: OverlayId::Notifications
            })
        );
        assert_eq!(
            script.steps[4],
            ScriptStep::Shell(ShellEvent::RegisterRegion {
                id: OverlayId::Create,
                region: Rect::new(0.0, 0.0, 10.0, 10.0)
            })
        );
        assert_eq!(
            script.steps[6],
            ScriptStep::Session(SessionStep::SignOut)
        );
        assert_eq!(script.steps[7], ScriptStep::Shell(ShellEvent::Logout));
    }

    #[test]
    fn test_session_step_updates_source() {
        let source = InMemorySession::new(SessionState::anonymous());
        let step = ScriptStep::Session(SessionStep::SignIn {
            user: User::new("1", "Root", Role::Admin),
        });

        let event = step.into_event(&source);

        assert_eq!(event, ShellEvent::SessionRefreshed);
        assert!(source.session().is_admin());
    }

    #[test]
    fn test_load_missing_file() {
        let result = EventScript::load(Utf8Path::new("/nonexistent/script.yaml"));
        assert!(matches!(result, Err(ScriptError::Io { .. })));
    }
}
