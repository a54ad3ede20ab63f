//! The `Sim` struct and its step loop.

use rustc_hash::FxHashSet;

use ant_core::{AntId, RoomId, SimConfig, Step};
use ant_graph::TunnelNetwork;
use ant_route::{enumerate_simple_paths, Route};

use crate::{AntStore, SimError, SimResult, StepObserver};

// ── Events and results ────────────────────────────────────────────────────────

/// One successful hop: `ant` entered `room` this step.
///
/// Events carry room ids; presentation layers resolve display names through
/// the network the observer is handed alongside each batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub ant:  AntId,
    pub room: RoomId,
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps executed, including any zero-move steps.
    pub steps: u64,
    /// Hops made across the whole run.
    pub moves: u64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The movement scheduler.
///
/// Holds the immutable network, the SoA ant state, and one assigned
/// [`Route`] per ant.  Each call to [`run`](Self::run) executes steps until
/// every ant stands in the end room, reporting each step's events to the
/// observer, or fails with [`SimError::Deadlock`] once the configured step
/// cap is exceeded.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    pub config:  SimConfig,
    pub network: TunnelNetwork,
    pub ants:    AntStore,

    /// Assigned route per ant, indexed by `AntId`.  Replaced wholesale when
    /// an ant adopts an alternative; never edited in place.
    pub routes: Vec<Route>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run to completion.
    ///
    /// The whole run is synchronous, single-threaded, and deterministic:
    /// identical network, ant count, and initial routes always produce the
    /// identical event sequence.
    pub fn run<O: StepObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let mut now = Step::ZERO;
        let mut total_moves = 0u64;

        while !self.ants.all_at_end() {
            if now.0 >= self.config.max_steps {
                return Err(SimError::Deadlock { limit: self.config.max_steps });
            }
            now = now.next();

            let moves = self.run_step();
            total_moves += moves.len() as u64;
            observer.on_step(now, &moves, &self.network);
        }

        observer.on_run_end(now);
        Ok(RunSummary { steps: now.0, moves: total_moves })
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Execute one step and return its move events in AntId order.
    fn run_step(&mut self) -> Vec<MoveEvent> {
        let end = self.network.end;

        // Rooms claimed by a hop this step.  Lives exactly as long as the
        // step: contention never carries over.
        let mut claimed: FxHashSet<RoomId> = FxHashSet::default();
        let mut moved = vec![false; self.ants.count];
        let mut moves = Vec::new();

        // ── Phase 1: move.  Ascending AntId order arbitrates contention —
        // the lower id wins a contested room.
        for i in 0..self.ants.count {
            if self.ants.at_end[i] {
                continue;
            }
            let Some(next) = self.routes[i].next_after(self.ants.position[i]) else {
                continue;
            };
            if next == end || !claimed.contains(&next) {
                claimed.insert(next);
                self.ants.position[i] = next;
                moved[i] = true;
                if next == end {
                    self.ants.at_end[i] = true;
                }
                moves.push(MoveEvent { ant: AntId(i as u32), room: next });
            }
        }

        // ── Phase 2: reroute.  An ant that failed to hop and is standing on
        // a room another ant claimed this step tries to adopt a route that
        // dodges this step's contention entirely.  No alternative → it
        // keeps its assignment and retries next step.
        for i in 0..self.ants.count {
            if self.ants.at_end[i] || moved[i] {
                continue;
            }
            let here = self.ants.position[i];
            if claimed.contains(&here) {
                if let Some(alternative) = find_clear_route(&self.network, here, &claimed) {
                    self.routes[i] = alternative;
                }
            }
        }

        moves
    }
}

// ── Reroute search ────────────────────────────────────────────────────────────

/// First route from `from` to the end room that touches no room in
/// `claimed` — endpoints included — scanning in discovery order.
pub(crate) fn find_clear_route(
    net: &TunnelNetwork,
    from: RoomId,
    claimed: &FxHashSet<RoomId>,
) -> Option<Route> {
    enumerate_simple_paths(net, from, net.end)
        .into_iter()
        .find(|route| route.rooms.iter().all(|room| !claimed.contains(room)))
}
