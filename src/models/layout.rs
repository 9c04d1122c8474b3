use serde::{Deserialize, Serialize};

/// Mutable part of the responsive layout.
///
/// `sidebar_open` is the user's request; it is forced closed when the viewport
/// crosses into mobile and after a pathname change while mobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub is_mobile: bool,
}

/// How the inline sidebar is presented. Derived on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarMode {
    Hidden,
    /// Collapsed icon rail
    Mini,
    Full,
}

/// Left margin applied to the main content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOffset {
    None,
    Small,
    Large,
}

/// Inner padding of the content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentPadding {
    /// Edge-to-edge, used by the player and sign-in views
    Flush,
    Comfortable,
}

/// Static per-path override from the configured path lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathOverride {
    Default,
    MiniSidebar,
    NoSidebar,
}

/// Props handed to the sidebar component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarProps {
    /// Sidebar is mounted at all
    pub visible: bool,
    /// Drawer (mobile) or expanded panel (desktop) requested open
    pub open: bool,
    /// Render as the icon rail
    pub mini: bool,
    pub mobile: bool,
}

/// Everything the page layer needs to compose the frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResolution {
    pub is_mobile: bool,
    pub sidebar_mode: SidebarMode,
    pub content_offset: ContentOffset,
    pub content_offset_class: String,
    pub padding: ContentPadding,
    pub sidebar: SidebarProps,
}
