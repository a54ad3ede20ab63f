//! Structure-of-Arrays ant state.

use ant_core::RoomId;

/// Per-ant simulation state in SoA layout, indexed by `AntId`.
///
/// Two parallel arrays are all the scheduler needs: where each ant stands,
/// and whether it has finished.  An ant's assigned route lives next to this
/// store in [`Sim`][crate::Sim] because routes are replaced on reroute,
/// while the store itself only ever mutates element-wise.
#[derive(Debug)]
pub struct AntStore {
    pub count: usize,

    /// Current room of each ant.  Starts at the colony's start room.
    pub position: Vec<RoomId>,

    /// Latched once an ant reaches the end room; finished ants take no
    /// further part in movement or contention.
    pub at_end: Vec<bool>,
}

impl AntStore {
    /// Create `count` ants, all standing in `start`.
    pub fn new(count: usize, start: RoomId) -> Self {
        Self {
            count,
            position: vec![start; count],
            at_end:   vec![false; count],
        }
    }

    /// `true` once every ant has reached the end room.
    pub fn all_at_end(&self) -> bool {
        self.at_end.iter().all(|&done| done)
    }

    /// Number of ants that have reached the end room so far.
    pub fn arrived(&self) -> usize {
        self.at_end.iter().filter(|&&done| done).count()
    }
}
