//! The `Route` value type.

use ant_core::RoomId;

/// An ordered simple path of rooms: no room repeats, the first element is
/// the route's origin and the last its destination.
///
/// A `Route` is immutable once produced.  Rerouting replaces an ant's whole
/// `Route`; it never edits one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Rooms in traversal order.  Never empty.
    pub rooms: Vec<RoomId>,
}

impl Route {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        debug_assert!(!rooms.is_empty());
        Self { rooms }
    }

    /// Number of hops an ant following this route makes (rooms − 1).
    #[inline]
    pub fn hops(&self) -> usize {
        self.rooms.len() - 1
    }

    #[inline]
    pub fn first(&self) -> RoomId {
        self.rooms[0]
    }

    #[inline]
    pub fn last(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// The rooms strictly between origin and destination.
    ///
    /// Disjointness is judged on these only: every route may share the
    /// common start and end rooms.
    #[inline]
    pub fn interior(&self) -> &[RoomId] {
        match self.rooms.len() {
            0 | 1 | 2 => &[],
            n => &self.rooms[1..n - 1],
        }
    }

    #[inline]
    pub fn contains(&self, room: RoomId) -> bool {
        self.rooms.contains(&room)
    }

    /// The room after `room` on this route, if `room` lies on it and is not
    /// the destination.
    pub fn next_after(&self, room: RoomId) -> Option<RoomId> {
        let at = self.rooms.iter().position(|&r| r == room)?;
        self.rooms.get(at + 1).copied()
    }
}
