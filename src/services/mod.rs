//! Services module - Pure shell logic.
//!
//! Everything here is a plain function of its inputs: no I/O, no ambient
//! session or theme context, no lifecycle. The state manager and controller
//! feed these services explicit snapshots and act on what they return.
//!
//! # Components
//!
//! - [`RouteTable`]: the declarative route table; classifies a location into a
//!   [`RouteClass`](crate::models::RouteClass) and names the page to mount.
//! - [`GuardEvaluator`]: maps (session, route class) to a
//!   [`GuardVerdict`](crate::models::GuardVerdict). Redirects are returned,
//!   never performed.
//! - [`LayoutEngine`]: derives sidebar mode, content offset and sidebar props
//!   from viewport width, path and the user's toggle; applies the resize and
//!   navigation transition rules to [`LayoutState`](crate::models::LayoutState).
//! - [`OverlayCoordinator`]: independent open/closed flags for the header
//!   overlays with one generic outside-pointer routine and a global reset.
//! - [`HeaderModel`], [`search_target`], [`avatar_url`]: header derivations.
//!
//! # Usage Example
//!
//! ```
//! use zentube_shell::models::{GuardVerdict, RouteClass, SessionState, SidebarMode};
//! use zentube_shell::services::{evaluate, LayoutEngine, RouteTable};
//!
//! let routes = RouteTable::default_table();
//! let verdict = evaluate(&SessionState::anonymous(), routes.classify("/history"));
//! assert_eq!(verdict, GuardVerdict::RedirectTo("/auth".to_string()));
//!
//! let layout = LayoutEngine::default().resolve("/watch/abc123", 1280, true);
//! assert_eq!(layout.sidebar_mode, SidebarMode::Mini);
//! ```

pub mod guard;
pub mod header;
pub mod layout;
pub mod overlay;
pub mod routing;

pub use guard::{GuardEvaluator, GuardTargets, evaluate};
pub use header::{HeaderModel, avatar_url, search_target};
pub use layout::LayoutEngine;
pub use overlay::OverlayCoordinator;
pub use routing::{RouteDefinition, RouteTable, RouteTableError, pathname};
