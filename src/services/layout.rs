use crate::models::{
    ContentOffset, ContentPadding, LayoutResolution, LayoutState, PathOverride, ShellConfig,
    SidebarMode, SidebarProps,
};
use crate::services::routing::pathname;

/// Responsive layout engine.
///
/// Derives sidebar mode, content offset and sidebar props from the viewport
/// width, the current path and the user's open/closed request. Every output is
/// recomputed from its inputs; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    breakpoint_px: u32,
    mini_sidebar_paths: Vec<String>,
    no_sidebar_paths: Vec<String>,
    mini_offset_px: u32,
    full_offset_px: u32,
    header_height_px: u32,
}

impl LayoutEngine {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            breakpoint_px: config.breakpoint_px,
            mini_sidebar_paths: config.mini_sidebar_paths.clone(),
            no_sidebar_paths: config.no_sidebar_paths.clone(),
            mini_offset_px: config.mini_offset_px,
            full_offset_px: config.full_offset_px,
            header_height_px: config.header_height_px,
        }
    }

    pub fn breakpoint_px(&self) -> u32 {
        self.breakpoint_px
    }

    pub fn is_mobile(&self, viewport_width: u32) -> bool {
        viewport_width < self.breakpoint_px
    }

    /// Classify a location against the no-sidebar and mini-sidebar lists.
    ///
    /// Entries are plain string prefixes of the pathname. Any no-sidebar
    /// match wins over every mini-sidebar match.
    pub fn path_override(&self, location: &str) -> PathOverride {
        let path = pathname(location);

        if matches_any(&self.no_sidebar_paths, path) {
            PathOverride::NoSidebar
        } else if matches_any(&self.mini_sidebar_paths, path) {
            PathOverride::MiniSidebar
        } else {
            PathOverride::Default
        }
    }

    /// Sidebar mode; the first applicable rule wins.
    pub fn sidebar_mode(
        &self,
        path_override: PathOverride,
        is_mobile: bool,
        sidebar_open_requested: bool,
    ) -> SidebarMode {
        if path_override == PathOverride::NoSidebar {
            SidebarMode::Hidden
        } else if is_mobile {
            SidebarMode::Hidden
        } else if path_override == PathOverride::MiniSidebar {
            SidebarMode::Mini
        } else if sidebar_open_requested {
            SidebarMode::Full
        } else {
            SidebarMode::Mini
        }
    }

    /// Total over every mode/viewport combination.
    pub fn content_offset(&self, mode: SidebarMode, is_mobile: bool) -> ContentOffset {
        match (mode, is_mobile) {
            (_, true) | (SidebarMode::Hidden, false) => ContentOffset::None,
            (SidebarMode::Mini, false) => ContentOffset::Small,
            (SidebarMode::Full, false) => ContentOffset::Large,
        }
    }

    /// Margin in logical pixels for an offset.
    pub fn offset_px(&self, offset: ContentOffset) -> u32 {
        match offset {
            ContentOffset::None => 0,
            ContentOffset::Small => self.mini_offset_px,
            ContentOffset::Large => self.full_offset_px,
        }
    }

    /// Utility classes for the main content column.
    ///
    /// The header clearance is always present; the left margin only applies
    /// from the breakpoint up.
    pub fn offset_class(&self, offset: ContentOffset) -> String {
        let top = header_class(self.header_height_px);
        match offset {
            ContentOffset::None => top,
            other => format!("{} md:ml-[{}px]", top, self.offset_px(other)),
        }
    }

    pub fn padding(&self, path_override: PathOverride) -> ContentPadding {
        match path_override {
            PathOverride::Default => ContentPadding::Comfortable,
            PathOverride::MiniSidebar | PathOverride::NoSidebar => ContentPadding::Flush,
        }
    }

    pub fn sidebar_props(
        &self,
        path_override: PathOverride,
        is_mobile: bool,
        sidebar_open_requested: bool,
    ) -> SidebarProps {
        SidebarProps {
            visible: path_override != PathOverride::NoSidebar,
            open: sidebar_open_requested,
            mini: !is_mobile
                && (path_override == PathOverride::MiniSidebar || !sidebar_open_requested),
            mobile: is_mobile,
        }
    }

    /// Resolve the full frame for a path, width and open request.
    pub fn resolve(
        &self,
        location: &str,
        viewport_width: u32,
        sidebar_open_requested: bool,
    ) -> LayoutResolution {
        let is_mobile = self.is_mobile(viewport_width);
        self.resolve_with(location, is_mobile, sidebar_open_requested)
    }

    /// Resolve from an already tracked [`LayoutState`].
    pub fn resolve_state(&self, location: &str, state: &LayoutState) -> LayoutResolution {
        self.resolve_with(location, state.is_mobile, state.sidebar_open)
    }

    fn resolve_with(
        &self,
        location: &str,
        is_mobile: bool,
        sidebar_open_requested: bool,
    ) -> LayoutResolution {
        let path_override = self.path_override(location);
        let sidebar_mode = self.sidebar_mode(path_override, is_mobile, sidebar_open_requested);
        let content_offset = self.content_offset(sidebar_mode, is_mobile);

        LayoutResolution {
            is_mobile,
            sidebar_mode,
            content_offset,
            content_offset_class: self.offset_class(content_offset),
            padding: self.padding(path_override),
            sidebar: self.sidebar_props(path_override, is_mobile, sidebar_open_requested),
        }
    }

    /// Apply a viewport resize. Returns true if the layout state changed.
    ///
    /// Crossing into mobile closes the sidebar before it turns into a drawer.
    pub fn on_resize(&self, state: &mut LayoutState, viewport_width: u32) -> bool {
        let before = *state;
        let is_mobile = self.is_mobile(viewport_width);

        // Staying within mobile keeps an open drawer
        if is_mobile && !state.is_mobile {
            state.sidebar_open = false;
        }
        state.is_mobile = is_mobile;

        *state != before
    }

    /// Apply a path change. The drawer closes after navigating on mobile.
    pub fn on_navigate(&self, state: &mut LayoutState) -> bool {
        if state.is_mobile && state.sidebar_open {
            state.sidebar_open = false;
            return true;
        }
        false
    }

    pub fn toggle(&self, state: &mut LayoutState) {
        state.sidebar_open = !state.sidebar_open;
    }

    pub fn close(&self, state: &mut LayoutState) -> bool {
        std::mem::replace(&mut state.sidebar_open, false)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

fn matches_any(prefixes: &[String], path: &str) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

fn header_class(header_height_px: u32) -> String {
    // Tailwind spacing unit is 4px
    if header_height_px % 4 == 0 {
        format!("mt-{}", header_height_px / 4)
    } else {
        format!("mt-[{}px]", header_height_px)
    }
}
