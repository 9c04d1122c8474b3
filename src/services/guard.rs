use crate::models::{GuardVerdict, Role, RouteClass, SessionState, ShellConfig};

/// Redirect destinations used by the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardTargets {
    pub home: String,
    pub auth: String,
}

impl Default for GuardTargets {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            auth: "/auth".to_string(),
        }
    }
}

impl From<&ShellConfig> for GuardTargets {
    fn from(config: &ShellConfig) -> Self {
        Self {
            home: config.home_path.clone(),
            auth: config.auth_path.clone(),
        }
    }
}

/// Route guard evaluator.
///
/// Pure: the verdict depends only on the session snapshot and the route class.
/// Carrying out a redirect is the navigation layer's job.
#[derive(Debug, Clone, Default)]
pub struct GuardEvaluator {
    targets: GuardTargets,
}

impl GuardEvaluator {
    pub fn new(targets: GuardTargets) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &GuardTargets {
        &self.targets
    }

    pub fn evaluate(&self, session: &SessionState, class: RouteClass) -> GuardVerdict {
        if session.loading {
            return GuardVerdict::Pending;
        }

        match class {
            RouteClass::Public => GuardVerdict::Render,
            RouteClass::GuestOnly => {
                if session.is_authenticated {
                    GuardVerdict::RedirectTo(self.targets.home.clone())
                } else {
                    GuardVerdict::Render
                }
            }
            RouteClass::MemberOnly => {
                if session.is_authenticated {
                    GuardVerdict::Render
                } else {
                    GuardVerdict::RedirectTo(self.targets.auth.clone())
                }
            }
            RouteClass::AdminOnly => {
                if !session.is_authenticated {
                    GuardVerdict::RedirectTo(self.targets.auth.clone())
                } else if session.role() != Role::Admin {
                    GuardVerdict::RedirectTo(self.targets.home.clone())
                } else {
                    GuardVerdict::Render
                }
            }
        }
    }
}

/// Evaluate with the default home (`/`) and auth (`/auth`) targets.
pub fn evaluate(session: &SessionState, class: RouteClass) -> GuardVerdict {
    GuardEvaluator::default().evaluate(session, class)
}
