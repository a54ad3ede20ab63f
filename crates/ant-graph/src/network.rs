//! Tunnel network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for adjacency.
//! Given a `RoomId r`, the rooms reachable from it occupy the slice:
//!
//! ```text
//! tunnel_to[ room_out_start[r] .. room_out_start[r+1] ]
//! ```
//!
//! Tunnels are undirected: every declared tunnel contributes one directed
//! entry in each direction, so a room's neighbor slice always lists both
//! sides of every tunnel touching it.  Duplicate tunnels between the same
//! pair are kept as-is — adjacency is a list, not a set — and simply appear
//! twice in the slice.
//!
//! Room ids are dense and zero-based, assigned in declaration order, so a
//! `RoomId` doubles as the index into `room_name` / `room_pos` and every
//! room-keyed array downstream.

use rustc_hash::FxHashMap;

use ant_core::{MapPoint, RoomId};

use crate::GraphError;

// ── TunnelNetwork ─────────────────────────────────────────────────────────────

/// An immutable colony graph: rooms, tunnels, and the designated start and
/// end rooms.
///
/// Do not construct directly; use [`TunnelNetworkBuilder`], which enforces
/// the start/end invariants.  All lookup methods are total: an out-of-range
/// id yields an empty neighbor slice, never a panic or an error.
#[derive(Debug)]
pub struct TunnelNetwork {
    // ── Room data (indexed by RoomId) ─────────────────────────────────────
    room_name: Vec<String>,
    room_pos:  Vec<MapPoint>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Neighbors of room `r` occupy
    /// `tunnel_to[room_out_start[r] .. room_out_start[r+1]]`.
    /// Length = `room_count + 1`.
    room_out_start: Vec<u32>,

    // ── Directed tunnel entries (parallel arrays, CSR order) ──────────────
    tunnel_from: Vec<RoomId>,
    tunnel_to:   Vec<RoomId>,

    // ── Endpoints ─────────────────────────────────────────────────────────
    /// The room every ant starts in.
    pub start: RoomId,
    /// The room every ant must reach.  Unlimited capacity.
    pub end: RoomId,

    name_index: FxHashMap<String, RoomId>,
}

impl TunnelNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_name.len()
    }

    /// Number of directed adjacency entries (2× the declared tunnel count).
    pub fn tunnel_count(&self) -> usize {
        self.tunnel_to.len()
    }

    // ── Room lookup ───────────────────────────────────────────────────────

    /// Resolve a display name to its room id.  `None` is the "not found"
    /// sentinel — there is no in-band invalid id.
    pub fn room_by_name(&self, name: &str) -> Option<RoomId> {
        self.name_index.get(name).copied()
    }

    /// Display name of `room`.
    ///
    /// # Panics
    /// Panics if `room` did not come from this network.
    pub fn room_name(&self, room: RoomId) -> &str {
        &self.room_name[room.index()]
    }

    /// Map position of `room`.
    ///
    /// # Panics
    /// Panics if `room` did not come from this network.
    pub fn room_pos(&self, room: RoomId) -> MapPoint {
        self.room_pos[room.index()]
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterator over the rooms adjacent to `room`, in declaration order.
    ///
    /// Empty for an id outside this network.  This is a contiguous slice
    /// scan — no heap allocation.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> impl Iterator<Item = RoomId> + '_ {
        self.out_slice(room).iter().copied()
    }

    /// Number of adjacency entries leaving `room` (0 for unknown ids).
    #[inline]
    pub fn out_degree(&self, room: RoomId) -> usize {
        self.out_slice(room).len()
    }

    /// All directed adjacency entries as `(from, to)` pairs.
    ///
    /// Each undirected tunnel appears twice, once per direction; callers
    /// that want one line per tunnel filter on `from < to`.
    pub fn tunnels(&self) -> impl Iterator<Item = (RoomId, RoomId)> + '_ {
        self.tunnel_from
            .iter()
            .zip(&self.tunnel_to)
            .map(|(&a, &b)| (a, b))
    }

    #[inline]
    fn out_slice(&self, room: RoomId) -> &[RoomId] {
        let i = room.index();
        match self.room_out_start.get(i..i + 2) {
            Some(w) => &self.tunnel_to[w[0] as usize..w[1] as usize],
            None => &[],
        }
    }
}

// ── TunnelNetworkBuilder ──────────────────────────────────────────────────────

/// Construct a [`TunnelNetwork`] incrementally, then call [`build`](Self::build).
///
/// Rooms receive sequential ids from 0 in the order they are added.  Tunnels
/// may be declared in any order; `build()` expands each into two directed
/// entries, sorts them into CSR form, and validates the whole network.
///
/// # Example
///
/// ```
/// use ant_core::MapPoint;
/// use ant_graph::TunnelNetworkBuilder;
///
/// let mut b = TunnelNetworkBuilder::new();
/// let s = b.add_room("start", MapPoint::new(0, 0));
/// let e = b.add_room("end", MapPoint::new(2, 0));
/// b.add_tunnel(s, e);
/// b.mark_start(s);
/// b.mark_end(e);
/// let net = b.build().unwrap();
/// assert_eq!(net.room_count(), 2);
/// assert_eq!(net.tunnel_count(), 2); // both directions
/// ```
pub struct TunnelNetworkBuilder {
    names:       Vec<String>,
    positions:   Vec<MapPoint>,
    raw_tunnels: Vec<(RoomId, RoomId)>,
    start:       Option<RoomId>,
    end:         Option<RoomId>,
}

impl TunnelNetworkBuilder {
    pub fn new() -> Self {
        Self {
            names:       Vec::new(),
            positions:   Vec::new(),
            raw_tunnels: Vec::new(),
            start:       None,
            end:         None,
        }
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: impl Into<String>, pos: MapPoint) -> RoomId {
        let id = RoomId(self.names.len() as u32);
        self.names.push(name.into());
        self.positions.push(pos);
        id
    }

    /// Declare an undirected tunnel between `a` and `b`.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) {
        self.raw_tunnels.push((a, b));
    }

    /// Mark the room every ant starts in.
    pub fn mark_start(&mut self, room: RoomId) {
        self.start = Some(room);
    }

    /// Mark the room every ant must reach.
    pub fn mark_end(&mut self, room: RoomId) {
        self.end = Some(room);
    }

    pub fn room_count(&self) -> usize {
        self.names.len()
    }

    /// Resolve a room name to its id; first declaration wins if the name is
    /// duplicated (the duplicate itself is rejected later, at `build()`).
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| RoomId(i as u32))
    }

    /// Consume the builder and produce a validated [`TunnelNetwork`].
    ///
    /// Validation: start and end must be marked, in range, and distinct;
    /// room names must be unique; no tunnel may connect a room to itself.
    /// Duplicate tunnels between the same pair are accepted.
    pub fn build(self) -> Result<TunnelNetwork, GraphError> {
        let room_count = self.names.len();
        let in_range = |r: RoomId| r.index() < room_count;

        // ── Endpoint invariants ───────────────────────────────────────────
        let start = self.start.ok_or(GraphError::MissingStart)?;
        let end = self.end.ok_or(GraphError::MissingEnd)?;
        for room in [start, end] {
            if !in_range(room) {
                return Err(GraphError::RoomOutOfRange(room));
            }
        }
        if start == end {
            return Err(GraphError::StartIsEnd);
        }

        // ── Name uniqueness ───────────────────────────────────────────────
        let mut name_index = FxHashMap::default();
        for (i, name) in self.names.iter().enumerate() {
            if name_index.insert(name.clone(), RoomId(i as u32)).is_some() {
                return Err(GraphError::DuplicateRoomName(name.clone()));
            }
        }

        // ── Tunnel validity ───────────────────────────────────────────────
        for &(a, b) in &self.raw_tunnels {
            for room in [a, b] {
                if !in_range(room) {
                    return Err(GraphError::RoomOutOfRange(room));
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop(self.names[a.index()].clone()));
            }
        }

        // ── Expand to directed entries and sort into CSR ──────────────────
        let mut directed: Vec<(RoomId, RoomId)> =
            Vec::with_capacity(self.raw_tunnels.len() * 2);
        for &(a, b) in &self.raw_tunnels {
            directed.push((a, b));
            directed.push((b, a));
        }
        // Stable sort: a room's neighbor order must equal declaration order.
        directed.sort_by_key(|&(from, _)| from.0);

        let tunnel_from: Vec<RoomId> = directed.iter().map(|&(a, _)| a).collect();
        let tunnel_to:   Vec<RoomId> = directed.iter().map(|&(_, b)| b).collect();

        let mut room_out_start = vec![0u32; room_count + 1];
        for &(from, _) in &directed {
            room_out_start[from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            room_out_start[i] += room_out_start[i - 1];
        }
        debug_assert_eq!(room_out_start[room_count] as usize, directed.len());

        Ok(TunnelNetwork {
            room_name: self.names,
            room_pos: self.positions,
            room_out_start,
            tunnel_from,
            tunnel_to,
            start,
            end,
            name_index,
        })
    }
}

impl Default for TunnelNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
