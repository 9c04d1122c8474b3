// Shell Controller - Wires the guard, layout engine and overlays around the router
//
// This module contains the ShellController which coordinates between:
// - SessionSource / ThemeSource (external providers, read-only)
// - Navigator (router navigation action)
// - ShellStateManager (the shell's mutable state)
// - RouteTable + GuardEvaluator (render/redirect decisions)
//
// Each event runs to completion: state is updated, the guard re-runs for the
// current location, redirects are issued, and a fresh ShellView is composed.

use crate::metrics::ShellMetrics;
use crate::models::{
    GuardVerdict, LayoutResolution, OverlayId, Page, Point, Rect, RouteClass, RouteMatch,
    ShellConfig,
};
use crate::services::{
    GuardEvaluator, GuardTargets, HeaderModel, RouteTable, pathname, search_target,
};
use crate::shell::providers::{NavigateOptions, Navigator, SessionSource, ThemeSource};
use crate::state::ShellStateManager;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Redirect chains longer than this are cut off and logged.
const MAX_REDIRECT_HOPS: usize = 4;

/// Discrete UI events the shell reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShellEvent {
    /// Router reported a new location
    Navigate { path: String },

    /// Viewport width changed
    Resize { width: u32 },

    ToggleSidebar,

    /// Drawer backdrop or close button
    CloseSidebar,

    ToggleOverlay { id: OverlayId },

    /// Document-level pointer-down
    PointerDown { x: f64, y: f64 },

    /// Overlay mounted or moved; hit region for outside-pointer dismissal
    RegisterRegion { id: OverlayId, region: Rect },

    /// Session Source reported a change
    SessionRefreshed,

    /// Header search form submitted
    Search { query: String },

    Logout,

    ToggleTheme,
}

/// Everything the page-rendering layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellView {
    pub path: String,
    pub page: Page,
    pub route_class: RouteClass,
    pub verdict: GuardVerdict,
    pub layout: LayoutResolution,
    pub open_overlays: Vec<OverlayId>,
    pub header: HeaderModel,
    pub is_dark: bool,
}

impl ShellView {
    pub fn is_open(&self, id: OverlayId) -> bool {
        self.open_overlays.contains(&id)
    }

    /// One-line description for logs and the replay binary
    pub fn summary(&self) -> String {
        let verdict = match &self.verdict {
            GuardVerdict::Render => "render".to_string(),
            GuardVerdict::Pending => "pending".to_string(),
            GuardVerdict::RedirectTo(target) => format!("redirect {}", target),
        };
        let overlays = self
            .open_overlays
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{} -> {:?} [{}] sidebar={:?} main=\"{}\" overlays=[{}]",
            self.path,
            self.page,
            verdict,
            self.layout.sidebar_mode,
            self.layout.content_offset_class,
            overlays
        )
    }
}

/// Shell controller
///
/// The only component that talks to the external providers. Guard, layout and
/// overlay logic stay pure; this type feeds them snapshots and carries out
/// what they decide.
///
/// # Example
/// ```ignore
/// let controller = ShellController::new(&config, session, theme, navigator);
/// let view = controller.handle(ShellEvent::Navigate { path: "/history".into() });
/// if let GuardVerdict::Pending = view.verdict {
///     // show the neutral loader
/// }
/// ```
pub struct ShellController {
    state: ShellStateManager,
    routes: RouteTable,
    guard: GuardEvaluator,
    home_path: String,
    session: Arc<dyn SessionSource>,
    theme: Arc<dyn ThemeSource>,
    navigator: Arc<dyn Navigator>,
    metrics: Arc<ShellMetrics>,
}

impl ShellController {
    pub fn new(
        config: &ShellConfig,
        session: Arc<dyn SessionSource>,
        theme: Arc<dyn ThemeSource>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let controller = Self {
            state: ShellStateManager::with_config(config),
            routes: RouteTable::default_table(),
            guard: GuardEvaluator::new(GuardTargets::from(config)),
            home_path: config.home_path.clone(),
            session,
            theme,
            navigator,
            metrics: Arc::new(ShellMetrics::new()),
        };
        controller.sync_session();

        tracing::info!(
            "Shell controller initialized: breakpoint={}px, routes={}",
            config.breakpoint_px,
            controller.routes.len()
        );

        controller
    }

    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<ShellMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn state(&self) -> &ShellStateManager {
        &self.state
    }

    pub fn metrics(&self) -> &Arc<ShellMetrics> {
        &self.metrics
    }

    pub fn resolve(&self, location: &str) -> RouteMatch {
        self.routes.resolve(location)
    }

    /// Current view without applying any event
    pub fn view(&self) -> ShellView {
        self.sync_session();
        self.settle()
    }

    /// Apply one event and return the resulting view
    pub fn handle(&self, event: ShellEvent) -> ShellView {
        self.sync_session();

        match event {
            ShellEvent::Navigate { path } => {
                self.metrics.record_navigation();
                self.apply_navigation(&path);
            }
            ShellEvent::Resize { width } => {
                self.metrics.record_resize();
                self.state.resize(width);
            }
            ShellEvent::ToggleSidebar => {
                self.state.toggle_sidebar();
            }
            ShellEvent::CloseSidebar => {
                self.state.close_sidebar();
            }
            ShellEvent::ToggleOverlay { id } => self.toggle_overlay(id),
            ShellEvent::PointerDown { x, y } => {
                let before = self.open_overlay_count();
                self.state.pointer_down(Point::new(x, y));
                let dismissed = before.saturating_sub(self.open_overlay_count());
                self.metrics.record_pointer_dismissals(dismissed);
            }
            ShellEvent::RegisterRegion { id, region } => {
                self.state.register_overlay_region(id, region);
            }
            ShellEvent::SessionRefreshed => {}
            ShellEvent::Search { query } => match search_target(&query) {
                Some(target) => self.push(&target),
                None => tracing::debug!("Ignoring blank search"),
            },
            ShellEvent::Logout => {
                self.session.logout();
                self.sync_session();
                let home = self.home_path.clone();
                self.push(&home);
            }
            ShellEvent::ToggleTheme => self.theme.toggle_theme(),
        }

        self.settle()
    }

    /// Copy the provider's session into state, closing overlays that the
    /// new session no longer offers.
    fn sync_session(&self) {
        let session = self.session.session();
        self.state.update(|state, _| {
            state.session = session;
            let header = HeaderModel::for_session(&state.session, state.notification_count);
            for id in state.overlays.open_overlays() {
                if !header.offers(id) {
                    state.overlays.close(id);
                }
            }
        });
    }

    fn toggle_overlay(&self, id: OverlayId) {
        let offered = self.state.read(|state| {
            HeaderModel::for_session(&state.session, state.notification_count).offers(id)
        });
        if offered {
            self.state.toggle_overlay(id);
        } else {
            tracing::debug!(overlay = %id, "Ignoring toggle for overlay not offered to this session");
        }
    }

    fn open_overlay_count(&self) -> usize {
        self.state.read(|state| state.overlays.open_overlays().len())
    }

    fn apply_navigation(&self, path: &str) {
        let before = self.open_overlay_count();
        self.state.navigate(path);
        self.metrics.record_navigation_resets(before);
    }

    /// Shell-initiated navigation (search, logout)
    fn push(&self, target: &str) {
        self.navigator.navigate(target, NavigateOptions::push());
        self.metrics.record_navigation();
        self.apply_navigation(target);
    }

    /// Re-run the guard for the current location, following redirects.
    fn settle(&self) -> ShellView {
        let mut hops = 0;

        loop {
            let (path, session) = self.state.read(|s| (s.path.clone(), s.session.clone()));
            let route = self.routes.resolve(&path);
            let verdict = self.guard.evaluate(&session, route.class);

            match &verdict {
                GuardVerdict::RedirectTo(target) if pathname(target) == pathname(&path) => {
                    tracing::warn!(path = %path, "Route guard redirected to the current location");
                }
                GuardVerdict::RedirectTo(target) if hops >= MAX_REDIRECT_HOPS => {
                    tracing::warn!(
                        path = %path,
                        target = %target,
                        "Redirect chain exceeded {} hops",
                        MAX_REDIRECT_HOPS
                    );
                }
                GuardVerdict::RedirectTo(target) => {
                    hops += 1;
                    tracing::info!(from = %path, to = %target, class = ?route.class, "Route guard redirect");
                    self.metrics.record_redirect();
                    self.metrics.record_navigation();
                    self.navigator.navigate(target, NavigateOptions::replace());
                    self.apply_navigation(target);
                    continue;
                }
                GuardVerdict::Pending => {
                    self.metrics.record_pending();
                    tracing::debug!(path = %path, "Session loading; guard pending");
                }
                GuardVerdict::Render => {
                    tracing::debug!(path = %path, page = ?route.page, "Route guard render");
                }
            }

            return self.compose(route, verdict);
        }
    }

    fn compose(&self, route: RouteMatch, verdict: GuardVerdict) -> ShellView {
        let is_dark = self.theme.is_dark();
        self.state.read(|state| ShellView {
            path: state.path.clone(),
            page: route.page,
            route_class: route.class,
            verdict,
            layout: self
                .state
                .layout_engine()
                .resolve_state(&state.path, &state.layout),
            open_overlays: state.overlays.open_overlays(),
            header: HeaderModel::for_session(&state.session, state.notification_count),
            is_dark,
        })
    }
}
