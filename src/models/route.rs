use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Access classification of a declared route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    /// Anyone may view
    Public,
    /// Only visitors who are not signed in (the sign-in page)
    GuestOnly,
    /// Any signed-in user
    MemberOnly,
    /// Signed-in users with the admin role
    AdminOnly,
}

impl RouteClass {
    pub const ALL: [RouteClass; 4] = [
        RouteClass::Public,
        RouteClass::GuestOnly,
        RouteClass::MemberOnly,
        RouteClass::AdminOnly,
    ];
}

/// Page component mounted for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Search,
    Trending,
    Shorts,
    Watch,
    Channel,
    Auth,
    Upload,
    Dashboard,
    EditVideo,
    History,
    WatchLater,
    LikedVideos,
    Playlists,
    Subscriptions,
    Settings,
    AdminPanel,
    NotFound,
}

/// Outcome of evaluating a route guard.
///
/// `Pending` means the session is still resolving. It is neither a failure nor
/// a redirect: callers show a neutral loading state and wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardVerdict {
    Render,
    RedirectTo(String),
    Pending,
}

impl GuardVerdict {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardVerdict::Render)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardVerdict::RedirectTo(target) => Some(target),
            _ => None,
        }
    }
}

/// A path resolved against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Declared pattern that matched, e.g. `/watch/:id`
    pub pattern: String,
    pub class: RouteClass,
    pub page: Page,
    /// Captured `:name` segments in declaration order
    pub params: IndexMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
