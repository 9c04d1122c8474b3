use crate::models::{OverlayId, SessionState, User};
use serde::Serialize;

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Navigation target for a submitted search, `None` for a blank query.
pub fn search_target(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("/search?q={}", urlencoding::encode(query)))
}

/// The user's avatar, or a generated initials image.
pub fn avatar_url(user: &User) -> String {
    match user.avatar.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!(
            "{}?name={}&background=cc0000&color=fff&size=80",
            AVATAR_SERVICE,
            urlencoding::encode(&user.display_name)
        ),
    }
}

/// What the header renders for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderModel {
    pub signed_in: bool,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Overlays whose triggers are shown
    pub offered_overlays: Vec<OverlayId>,
    /// Admin entry in the user menu
    pub show_admin_entry: bool,
    /// Badge on the notifications trigger, absent when zero
    pub notification_badge: Option<u32>,
}

impl HeaderModel {
    pub fn for_session(session: &SessionState, notification_count: u32) -> Self {
        let signed_in = session.is_authenticated && !session.loading;
        let user = session.user.as_ref().filter(|_| signed_in);

        let offered_overlays = OverlayId::ALL
            .into_iter()
            .filter(|id| signed_in || !id.requires_session())
            .collect();

        Self {
            signed_in,
            display_name: user.map(|u| u.display_name.clone()),
            avatar_url: user.map(avatar_url),
            offered_overlays,
            show_admin_entry: signed_in && session.is_admin(),
            notification_badge: (signed_in && notification_count > 0).then_some(notification_count),
        }
    }

    pub fn offers(&self, id: OverlayId) -> bool {
        self.offered_overlays.contains(&id)
    }
}
