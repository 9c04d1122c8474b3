//! Data models for the navigation shell.
//!
//! This module contains the plain data the shell reasons about:
//! - [`SessionState`]: read-only snapshot of the identity provider
//! - [`RouteClass`], [`GuardVerdict`], [`RouteMatch`]: route classification and guard outcomes
//! - [`LayoutState`] and the derived [`LayoutResolution`]: responsive frame geometry
//! - [`OverlayId`], [`Point`], [`Rect`]: transient header surfaces and their hit regions
//! - [`ShellConfig`]: breakpoint, path lists and offsets loaded from `Shell.yaml`
//!
//! # Architecture Note
//!
//! Nothing in here performs I/O or holds ambient context. The services take these
//! values as explicit input and [`ShellStateManager`](crate::state::ShellStateManager)
//! owns the only mutable copy.

pub mod config;
pub mod layout;
pub mod overlay;
pub mod route;
pub mod session;

pub use self::config::{ConfigError, ShellConfig};
pub use layout::{
    ContentOffset, ContentPadding, LayoutResolution, LayoutState, PathOverride, SidebarMode,
    SidebarProps,
};
pub use overlay::{OverlayId, Point, Rect};
pub use route::{GuardVerdict, Page, RouteClass, RouteMatch};
pub use session::{Role, SessionState, User};
