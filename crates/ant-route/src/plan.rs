//! The full routing pipeline: enumerate → sort → select → assign.

use ant_graph::TunnelNetwork;

use crate::{assign_routes, enumerate_simple_paths, select_max_disjoint};
use crate::{Route, RouteError, RouteResult};

/// Compute a route for every ant in a colony of `ant_count`.
///
/// Runs the whole pipeline against `net`'s start and end rooms:
///
/// 1. enumerate every simple start→end path
///    ([`RouteError::NoPath`] if there are none);
/// 2. sort shortest-first — the sort is stable, so discovery order remains
///    the tie-break within each length;
/// 3. select the maximum interior-disjoint pool;
/// 4. hand one pool route to each ant
///    ([`RouteError::NoDisjointRoutes`] on an empty pool).
///
/// Both failures are structural and abort before any simulation step.
pub fn plan_routes(net: &TunnelNetwork, ant_count: usize) -> RouteResult<Vec<Route>> {
    let mut candidates = enumerate_simple_paths(net, net.start, net.end);
    if candidates.is_empty() {
        return Err(RouteError::NoPath { from: net.start, to: net.end });
    }

    candidates.sort_by_key(|route| route.rooms.len());

    let pool = select_max_disjoint(&candidates);
    assign_routes(ant_count, &pool)
}
