use serde::{Deserialize, Serialize};

/// Account role as reported by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Member,
    Admin,
}

/// Signed-in user as exposed by the Session Source.
///
/// `role` is optional because partially loaded profiles arrive without it.
/// A missing role is always treated as [`Role::Guest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role: Some(role),
            avatar: None,
        }
    }

    /// Effective role, falling back to the least privileged one.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }
}

/// Snapshot of the session as read from the Session Source.
///
/// While `loading` is set the remaining fields are indeterminate and must not
/// be used for gating.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub loading: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl SessionState {
    /// Session whose state is still being resolved.
    pub fn loading() -> Self {
        Self {
            is_authenticated: false,
            loading: true,
            user: None,
        }
    }

    /// Resolved session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            loading: false,
            user: Some(user),
        }
    }

    /// Role of the current user, [`Role::Guest`] when absent.
    pub fn role(&self) -> Role {
        self.user
            .as_ref()
            .map(User::effective_role)
            .unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.role() == Role::Admin
    }
}
