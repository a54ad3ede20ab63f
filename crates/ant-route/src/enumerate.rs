//! All-simple-paths enumeration.
//!
//! # Arena frontier
//!
//! Partial paths are not stored as owned room vectors — copying the prefix
//! on every expansion would cost O(len) per enqueued neighbor and the queue
//! can grow exponentially.  Instead each partial path is a `(parent, room)`
//! record in a flat arena; the frontier queue holds record indices.  A
//! record's full path is the chain of parent links back to the root, so:
//!
//! - membership tests ("is this neighbor already on the path?") walk the
//!   chain, O(path length);
//! - completed paths are materialized once, by walking the chain and
//!   reversing.
//!
//! Sibling partial paths share their common prefix records, the search
//! needs no recursion, and partial states are plain indexable data.

use std::collections::VecDeque;

use ant_core::RoomId;
use ant_graph::TunnelNetwork;

use crate::Route;

/// Parent index of the root record.
const NO_PARENT: u32 = u32::MAX;

// ── Arena ─────────────────────────────────────────────────────────────────────

/// Flat storage of partial-path records.  Index 0 is always the root.
#[derive(Default)]
struct PathArena {
    parent: Vec<u32>,
    room:   Vec<RoomId>,
}

impl PathArena {
    fn push(&mut self, parent: u32, room: RoomId) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(parent);
        self.room.push(room);
        id
    }

    /// Does `room` already appear on the partial path ending at `tail`?
    fn on_path(&self, tail: u32, room: RoomId) -> bool {
        let mut at = tail;
        while at != NO_PARENT {
            if self.room[at as usize] == room {
                return true;
            }
            at = self.parent[at as usize];
        }
        false
    }

    /// Materialize the partial path ending at `tail`, root first.
    fn materialize(&self, tail: u32) -> Vec<RoomId> {
        let mut rooms = Vec::new();
        let mut at = tail;
        while at != NO_PARENT {
            rooms.push(self.room[at as usize]);
            at = self.parent[at as usize];
        }
        rooms.reverse();
        rooms
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Enumerate every simple path from `from` to `to`, in discovery order.
///
/// The frontier expands breadth-first over partial paths: dequeue one, and
/// either record it (its tail is `to` — completed paths are never extended)
/// or enqueue one extension per neighbor not already on the path.  Level-wise
/// expansion means shorter paths tend to surface first, but callers that
/// need shortest-first ordering must still sort — only a stable sort by
/// length preserves the discovery order within each length class.
///
/// Disconnected endpoints yield an empty vector, not an error.  `from == to`
/// yields the single one-room path.
///
/// Cost is proportional to the number of simple paths, which can be
/// exponential in dense graphs; bounding that is the caller's concern.
pub fn enumerate_simple_paths(net: &TunnelNetwork, from: RoomId, to: RoomId) -> Vec<Route> {
    let mut arena = PathArena::default();
    let mut frontier: VecDeque<u32> = VecDeque::new();
    frontier.push_back(arena.push(NO_PARENT, from));

    let mut routes = Vec::new();
    while let Some(tail) = frontier.pop_front() {
        let last = arena.room[tail as usize];

        if last == to {
            routes.push(Route::new(arena.materialize(tail)));
            continue;
        }

        for neighbor in net.neighbors(last) {
            if !arena.on_path(tail, neighbor) {
                let extended = arena.push(tail, neighbor);
                frontier.push_back(extended);
            }
        }
    }

    routes
}
