//! Integration tests for ShellStateManager with state change events
//!
//! These tests verify that the ShellStateManager correctly:
//! - Emits change events on mutations
//! - Reports an overlay reset before the route change of a navigation
//! - Supports multiple subscribers
//! - Handles concurrent access from multiple tasks

use std::sync::Arc;
use tokio::time::{Duration, timeout};
use zentube_shell::models::{OverlayId, Point, Rect, SessionState};
use zentube_shell::{ShellChange, ShellStateManager};

async fn next_change(rx: &mut tokio::sync::broadcast::Receiver<ShellChange>) -> ShellChange {
    timeout(Duration::from_millis(100), rx.recv())
        .await
        .expect("Timeout waiting for event")
        .expect("Channel closed")
}

#[tokio::test]
async fn test_navigation_reports_overlay_reset_first() {
    let state = ShellStateManager::new();
    state.toggle_overlay(OverlayId::Notifications);
    let mut rx = state.subscribe();

    state.navigate("/trending");

    let first = next_change(&mut rx).await;
    let second = next_change(&mut rx).await;

    assert_eq!(first, ShellChange::OverlaysChanged { open: vec![] });
    assert_eq!(
        second,
        ShellChange::RouteChanged {
            path: "/trending".to_string()
        }
    );
}

#[tokio::test]
async fn test_resize_to_mobile_events() {
    let state = ShellStateManager::new();
    state.toggle_sidebar();
    let mut rx = state.subscribe();

    let changes = state.resize(600);

    assert_eq!(
        changes,
        vec![
            ShellChange::ViewportChanged {
                width: 600,
                is_mobile: true
            },
            ShellChange::SidebarToggled { open: false },
        ]
    );
    assert_eq!(next_change(&mut rx).await, changes[0]);
    assert_eq!(next_change(&mut rx).await, changes[1]);
}

#[tokio::test]
async fn test_multiple_subscribers_receive_events() {
    let state = Arc::new(ShellStateManager::new());
    let mut rx1 = state.subscribe();
    let mut rx2 = state.subscribe();
    let mut rx3 = state.subscribe();

    state.set_session(SessionState::anonymous());

    for rx in [&mut rx1, &mut rx2, &mut rx3] {
        assert!(matches!(
            next_change(rx).await,
            ShellChange::SessionChanged {
                is_authenticated: false,
                loading: false
            }
        ));
    }
}

#[tokio::test]
async fn test_no_change_no_event() {
    let state = ShellStateManager::new();
    let mut rx = state.subscribe();

    let changes = state.close_sidebar();

    assert!(changes.is_empty());
    assert!(
        timeout(Duration::from_millis(20), rx.recv()).await.is_err(),
        "Expected no event for a no-op mutation"
    );
}

#[tokio::test]
async fn test_pointer_down_closes_through_state() {
    let state = ShellStateManager::new();
    state.register_overlay_region(OverlayId::Create, Rect::new(0.0, 0.0, 50.0, 50.0));
    state.register_overlay_region(OverlayId::UserMenu, Rect::new(100.0, 0.0, 50.0, 50.0));
    state.toggle_overlay(OverlayId::Create);
    state.toggle_overlay(OverlayId::UserMenu);

    let changes = state.pointer_down(Point::new(120.0, 10.0));

    assert_eq!(
        changes,
        vec![ShellChange::OverlaysChanged {
            open: vec![OverlayId::UserMenu]
        }]
    );
    assert!(!state.is_overlay_open(OverlayId::Create));
}

#[tokio::test]
async fn test_mobile_navigation_closes_drawer() {
    let state = ShellStateManager::new();
    state.resize(500);
    state.toggle_sidebar();
    assert!(state.read(|s| s.layout.sidebar_open));

    let changes = state.navigate("/shorts");

    assert!(changes.contains(&ShellChange::SidebarToggled { open: false }));
    assert!(!state.read(|s| s.layout.sidebar_open));
}

#[tokio::test]
async fn test_same_path_navigation_only_resets_overlays() {
    let state = ShellStateManager::new();
    state.resize(500);
    state.navigate("/shorts");
    state.toggle_sidebar();
    state.toggle_overlay(OverlayId::UserMenu);
    let mut rx = state.subscribe();

    let changes = state.navigate("/shorts/");

    assert_eq!(
        next_change(&mut rx).await,
        ShellChange::OverlaysChanged { open: vec![] }
    );
    assert!(!changes.contains(&ShellChange::SidebarToggled { open: false }));
    assert!(state.read(|s| s.layout.sidebar_open));
}

#[tokio::test]
async fn test_concurrent_state_access() {
    let state = Arc::new(ShellStateManager::new());
    let mut handles = vec![];

    for i in 0..10u32 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            state.set_notification_count(i);
            state.read(|s| s.notification_count)
        }));
    }

    for handle in handles {
        let count = handle.await.unwrap();
        assert!(count < 10);
    }

    let final_count = state.read(|s| s.notification_count);
    assert!(final_count < 10);
}

#[tokio::test]
async fn test_clones_share_state() {
    let state = ShellStateManager::new();
    let other = state.clone();
    let mut rx = other.subscribe();

    state.navigate("/history");

    assert_eq!(other.snapshot().path, "/history");
    assert_eq!(
        next_change(&mut rx).await,
        ShellChange::RouteChanged {
            path: "/history".to_string()
        }
    );
}
