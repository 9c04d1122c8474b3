use crate::models::{OverlayId, Point, Rect};
use indexmap::IndexMap;

/// Open/closed bookkeeping for the header overlays.
///
/// Overlays are independent: opening one never closes another. Each may
/// register a bounding region (overlay plus trigger); a pointer-down outside
/// that region closes it. Overlays without a region are only closed by their
/// trigger or by navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCoordinator {
    open: IndexMap<OverlayId, bool>,
    regions: IndexMap<OverlayId, Rect>,
}

impl OverlayCoordinator {
    /// All overlays closed, no regions registered.
    pub fn new() -> Self {
        Self {
            open: OverlayId::ALL.iter().map(|id| (*id, false)).collect(),
            regions: IndexMap::new(),
        }
    }

    /// Flip one overlay. Returns its new state.
    pub fn toggle(&mut self, id: OverlayId) -> bool {
        let entry = self.open.entry(id).or_insert(false);
        *entry = !*entry;
        tracing::debug!(overlay = %id, open = *entry, "Overlay toggled");
        *entry
    }

    pub fn close(&mut self, id: OverlayId) -> bool {
        self.open
            .get_mut(&id)
            .map(|open| std::mem::replace(open, false))
            .unwrap_or(false)
    }

    /// Close every overlay. Returns the ones that were open.
    pub fn close_all(&mut self) -> Vec<OverlayId> {
        let mut closed = Vec::new();
        for (id, open) in self.open.iter_mut() {
            if *open {
                *open = false;
                closed.push(*id);
            }
        }
        closed
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    pub fn open_overlays(&self) -> Vec<OverlayId> {
        self.open
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn any_open(&self) -> bool {
        self.open.values().any(|open| *open)
    }

    /// Register or replace the hit region used for outside-pointer dismissal.
    pub fn register_region(&mut self, id: OverlayId, region: Rect) {
        self.regions.insert(id, region);
    }

    pub fn clear_region(&mut self, id: OverlayId) -> Option<Rect> {
        self.regions.shift_remove(&id)
    }

    pub fn region(&self, id: OverlayId) -> Option<Rect> {
        self.regions.get(&id).copied()
    }

    /// Close every open overlay whose region does not contain `point`.
    ///
    /// Each open overlay is checked on its own. Returns the overlays closed.
    pub fn on_outside_pointer_down(&mut self, point: Point) -> Vec<OverlayId> {
        let mut closed = Vec::new();
        for (id, open) in self.open.iter_mut() {
            if !*open {
                continue;
            }
            let Some(region) = self.regions.get(id) else {
                continue;
            };
            if !region.contains(point) {
                *open = false;
                closed.push(*id);
            }
        }

        if !closed.is_empty() {
            tracing::debug!(?closed, x = point.x, y = point.y, "Outside pointer-down dismissed overlays");
        }
        closed
    }

    /// Global reset on navigation.
    pub fn on_navigate(&mut self) -> Vec<OverlayId> {
        self.close_all()
    }
}

impl Default for OverlayCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_all_closed() {
        let coordinator = OverlayCoordinator::new();
        for id in OverlayId::ALL {
            assert!(!coordinator.is_open(id));
        }
        assert!(!coordinator.any_open());
    }

    #[test]
    fn test_toggle_is_independent() {
        let mut coordinator = OverlayCoordinator::new();

        assert!(coordinator.toggle(OverlayId::Create));
        assert!(coordinator.toggle(OverlayId::Notifications));

        assert!(coordinator.is_open(OverlayId::Create));
        assert!(coordinator.is_open(OverlayId::Notifications));
        assert!(!coordinator.is_open(OverlayId::UserMenu));

        assert!(!coordinator.toggle(OverlayId::Create));
        assert!(!coordinator.is_open(OverlayId::Create));
        assert!(coordinator.is_open(OverlayId::Notifications));
    }

    #[test]
    fn test_close_all_reports_closed() {
        let mut coordinator = OverlayCoordinator::new();
        coordinator.toggle(OverlayId::UserMenu);
        coordinator.toggle(OverlayId::MobileSearch);

        let closed = coordinator.close_all();
        assert_eq!(closed, vec![OverlayId::UserMenu, OverlayId::MobileSearch]);
        assert!(!coordinator.any_open());
        assert!(coordinator.close_all().is_empty());
    }

    #[test]
    fn test_outside_pointer_checks_each_overlay() {
        let mut coordinator = OverlayCoordinator::new();
        coordinator.register_region(OverlayId::Create, Rect::new(0.0, 0.0, 100.0, 100.0));
        coordinator.register_region(OverlayId::UserMenu, Rect::new(200.0, 0.0, 100.0, 100.0));
        coordinator.toggle(OverlayId::Create);
        coordinator.toggle(OverlayId::UserMenu);

        let closed = coordinator.on_outside_pointer_down(Point::new(250.0, 50.0));

        assert_eq!(closed, vec![OverlayId::Create]);
        assert!(!coordinator.is_open(OverlayId::Create));
        assert!(coordinator.is_open(OverlayId::UserMenu));
    }

    #[test]
    fn test_overlay_without_region_survives_pointer_down() {
        let mut coordinator = OverlayCoordinator::new();
        coordinator.toggle(OverlayId::MobileSearch);

        let closed = coordinator.on_outside_pointer_down(Point::new(5.0, 5.0));

        assert!(closed.is_empty());
        assert!(coordinator.is_open(OverlayId::MobileSearch));
    }

    #[test]
    fn test_closed_overlay_ignores_pointer() {
        let mut coordinator = OverlayCoordinator::new();
        coordinator.register_region(OverlayId::Create, Rect::new(0.0, 0.0, 10.0, 10.0));

        assert!(coordinator.on_outside_pointer_down(Point::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn test_navigate_closes_everything() {
        let mut coordinator = OverlayCoordinator::new();
        for id in OverlayId::ALL {
            coordinator.toggle(id);
        }

        let closed = coordinator.on_navigate();

        assert_eq!(closed.len(), 4);
        assert!(coordinator.open_overlays().is_empty());
    }

    #[test]
    fn test_clear_region() {
        let mut coordinator = OverlayCoordinator::new();
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        coordinator.register_region(OverlayId::Notifications, rect);

        assert_eq!(coordinator.region(OverlayId::Notifications), Some(rect));
        assert_eq!(coordinator.clear_region(OverlayId::Notifications), Some(rect));
        assert_eq!(coordinator.region(OverlayId::Notifications), None);
    }
}
