// State management module
//
// This module provides the ShellStateManager which wraps ShellState with shared access
// using Arc<RwLock<T>> and emits change events for the page-rendering layer.

use crate::models::{LayoutState, OverlayId, Point, Rect, SessionState, ShellConfig};
use crate::services::{LayoutEngine, OverlayCoordinator, pathname};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

/// Change events emitted when shell state is modified
///
/// Events for one mutation are emitted in declaration order, so an overlay
/// reset caused by navigation is always observed before the route change.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellChange {
    /// Set of open overlays changed
    OverlaysChanged { open: Vec<OverlayId> },

    /// Session snapshot was replaced with a different one
    SessionChanged {
        is_authenticated: bool,
        loading: bool,
    },

    /// Current location changed
    RouteChanged { path: String },

    /// Viewport width or mobile classification changed
    ViewportChanged { width: u32, is_mobile: bool },

    /// Sidebar open request changed
    SidebarToggled { open: bool },

    /// Notification badge count changed
    NotificationsChanged { count: u32 },
}

/// The single mutable copy of the shell's state.
#[derive(Clone, Debug)]
pub struct ShellState {
    /// Current location, including any query string
    pub path: String,
    pub viewport_width: u32,
    pub layout: LayoutState,
    pub overlays: OverlayCoordinator,
    pub session: SessionState,
    pub notification_count: u32,
}

impl ShellState {
    fn initial(config: &ShellConfig, engine: &LayoutEngine) -> Self {
        // Desktop width until the first resize event reports the real one
        let viewport_width = 1280;
        Self {
            path: config.home_path.clone(),
            viewport_width,
            layout: LayoutState {
                sidebar_open: false,
                is_mobile: engine.is_mobile(viewport_width),
            },
            overlays: OverlayCoordinator::new(),
            session: SessionState::loading(),
            notification_count: config.notification_count,
        }
    }
}

/// Shared shell state with event emission
///
/// This is the central state component that:
/// - Provides access to [`ShellState`] via `Arc<RwLock<T>>`
/// - Applies the layout and overlay transition rules on each mutation
/// - Detects state changes and emits [`ShellChange`] events
/// - Supports subscribing to state changes via tokio broadcast channels
///
/// # Usage
///
/// - [`read()`](Self::read) for reading state
/// - [`update()`](Self::update) for mutations with automatic event emission
/// - [`subscribe()`](Self::subscribe) for listening to state changes
///
/// # Related Types
///
/// - [`crate::services::LayoutEngine`]: transition rules for resize and navigation
/// - [`crate::services::OverlayCoordinator`]: overlay bookkeeping
/// - [`crate::shell::ShellController`]: primary consumer
pub struct ShellStateManager {
    state: Arc<RwLock<ShellState>>,

    /// Multiple subscribers can listen for state changes
    state_tx: broadcast::Sender<ShellChange>,

    engine: Arc<LayoutEngine>,
}

impl ShellStateManager {
    /// Create a manager with the default configuration
    pub fn new() -> Self {
        Self::with_config(&ShellConfig::default())
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        let engine = LayoutEngine::new(config);
        let (state_tx, _) = broadcast::channel(config.event_queue_capacity.max(1));
        Self {
            state: Arc::new(RwLock::new(ShellState::initial(config, &engine))),
            state_tx,
            engine: Arc::new(engine),
        }
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.engine
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, ShellState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, ShellState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> ShellState {
        self.read_lock().clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let mobile = state_manager.read(|state| state.layout.is_mobile);
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShellState) -> R,
    {
        let state = self.read_lock();
        f(&state)
    }

    /// Update the state and emit change events
    ///
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Detects what changed
    /// 4. Emits appropriate events
    ///
    /// # Returns
    /// The StateChange events that were emitted
    pub fn update<F>(&self, update_fn: F) -> Vec<ShellChange>
    where
        F: FnOnce(&mut ShellState, &LayoutEngine),
    {
        let mut state = self.write_lock();
        let old_state = state.clone();

        update_fn(&mut state, &self.engine);

        let changes = Self::detect_changes(&old_state, &state);
        drop(state);

        for change in &changes {
            // No subscribers is fine
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellChange> {
        self.state_tx.subscribe()
    }

    fn detect_changes(old: &ShellState, new: &ShellState) -> Vec<ShellChange> {
        let mut changes = Vec::new();

        let open = new.overlays.open_overlays();
        if old.overlays.open_overlays() != open {
            changes.push(ShellChange::OverlaysChanged { open });
        }

        if old.session != new.session {
            changes.push(ShellChange::SessionChanged {
                is_authenticated: new.session.is_authenticated,
                loading: new.session.loading,
            });
        }

        if old.path != new.path {
            changes.push(ShellChange::RouteChanged {
                path: new.path.clone(),
            });
        }

        if old.viewport_width != new.viewport_width
            || old.layout.is_mobile != new.layout.is_mobile
        {
            changes.push(ShellChange::ViewportChanged {
                width: new.viewport_width,
                is_mobile: new.layout.is_mobile,
            });
        }

        if old.layout.sidebar_open != new.layout.sidebar_open {
            changes.push(ShellChange::SidebarToggled {
                open: new.layout.sidebar_open,
            });
        }

        if old.notification_count != new.notification_count {
            changes.push(ShellChange::NotificationsChanged {
                count: new.notification_count,
            });
        }

        changes
    }

    // Convenience methods for the shell's events

    /// Record a navigation: overlays reset, then the path changes, then the
    /// mobile drawer closes if the pathname moved.
    pub fn navigate(&self, path: impl Into<String>) -> Vec<ShellChange> {
        let path = path.into();
        self.update(|state, engine| {
            state.overlays.on_navigate();
            let moved = pathname(&state.path) != pathname(&path);
            state.path = path;
            if moved {
                engine.on_navigate(&mut state.layout);
            }
        })
    }

    pub fn resize(&self, viewport_width: u32) -> Vec<ShellChange> {
        self.update(|state, engine| {
            state.viewport_width = viewport_width;
            engine.on_resize(&mut state.layout, viewport_width);
        })
    }

    pub fn toggle_sidebar(&self) -> Vec<ShellChange> {
        self.update(|state, engine| engine.toggle(&mut state.layout))
    }

    pub fn close_sidebar(&self) -> Vec<ShellChange> {
        self.update(|state, engine| {
            engine.close(&mut state.layout);
        })
    }

    pub fn toggle_overlay(&self, id: OverlayId) -> Vec<ShellChange> {
        self.update(|state, _| {
            state.overlays.toggle(id);
        })
    }

    pub fn close_overlays(&self) -> Vec<ShellChange> {
        self.update(|state, _| {
            state.overlays.close_all();
        })
    }

    pub fn pointer_down(&self, point: Point) -> Vec<ShellChange> {
        self.update(|state, _| {
            state.overlays.on_outside_pointer_down(point);
        })
    }

    pub fn register_overlay_region(&self, id: OverlayId, region: Rect) -> Vec<ShellChange> {
        self.update(|state, _| state.overlays.register_region(id, region))
    }

    pub fn set_session(&self, session: SessionState) -> Vec<ShellChange> {
        self.update(|state, _| state.session = session)
    }

    pub fn set_notification_count(&self, count: u32) -> Vec<ShellChange> {
        self.update(|state, _| state.notification_count = count)
    }

    pub fn is_overlay_open(&self, id: OverlayId) -> bool {
        self.read(|state| state.overlays.is_open(id))
    }
}

impl Default for ShellStateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ShellStateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
            engine: Arc::clone(&self.engine),
        }
    }
}
