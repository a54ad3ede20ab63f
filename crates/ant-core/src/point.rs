//! Room coordinates.
//!
//! Colony maps position each room on an integer grid.  The coordinates are
//! carried for display and map rendering only — routing never consults them,
//! so there is no distance arithmetic here.

/// A 2-D integer map coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: i32,
    pub y: i32,
}

impl MapPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
