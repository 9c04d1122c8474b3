use serde::{Deserialize, Serialize};
use std::fmt;

/// Transient surfaces owned by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayId {
    Create,
    Notifications,
    UserMenu,
    MobileSearch,
}

impl OverlayId {
    pub const ALL: [OverlayId; 4] = [
        OverlayId::Create,
        OverlayId::Notifications,
        OverlayId::UserMenu,
        OverlayId::MobileSearch,
    ];

    /// Overlays that only exist for signed-in users.
    pub fn requires_session(self) -> bool {
        !matches!(self, OverlayId::MobileSearch)
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverlayId::Create => "create",
            OverlayId::Notifications => "notifications",
            OverlayId::UserMenu => "user_menu",
            OverlayId::MobileSearch => "mobile_search",
        };
        f.write_str(name)
    }
}

/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding region of an overlay and its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(30.0, 30.0)));
        assert!(rect.contains(Point::new(15.0, 25.0)));
        assert!(!rect.contains(Point::new(9.9, 15.0)));
        assert!(!rect.contains(Point::new(15.0, 30.1)));
    }

    #[test]
    fn test_mobile_search_does_not_require_session() {
        assert!(!OverlayId::MobileSearch.requires_session());
        assert!(OverlayId::Create.requires_session());
        assert!(OverlayId::UserMenu.requires_session());
    }
}
