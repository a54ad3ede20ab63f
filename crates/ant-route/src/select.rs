//! Maximum interior-disjoint route selection.
//!
//! Choosing the largest subset of candidate routes that pairwise share no
//! interior room is a maximum-independent-set problem — NP-hard in general.
//! The search below is exact and exponential; it is acceptable because the
//! candidate list for a colony map is expected to be small, and it is what
//! makes the pool provably maximum on every input it finishes on.

use rustc_hash::FxHashSet;

use ant_core::RoomId;

use crate::Route;

/// Select a maximum-cardinality subset of `candidates` such that no two
/// selected routes share an interior room.  Start and end rooms are common
/// to every route and never conflict.
///
/// Precondition: `candidates` sorted by length ascending (stable over
/// discovery order).  The sort is not required for correctness of the
/// cardinality, but it is part of the observable contract: ties between
/// equal-sized subsets resolve to the first one found, so the ordering
/// decides which rooms the pool claims — and biases it toward short routes.
///
/// Empty input returns an empty pool without error; the caller decides
/// whether that is fatal.
pub fn select_max_disjoint(candidates: &[Route]) -> Vec<Route> {
    let mut best: Vec<usize> = Vec::new();

    // Depth-first include/skip search with an explicit decision stack:
    // `chosen` holds the indices currently included, `claimed` their
    // interior rooms, and `cursor` scans forward over the candidates.
    // Including candidate `i` continues the scan at `i + 1`; exhausting the
    // scan pops the newest inclusion and resumes at its successor.  This
    // visits exactly the states of the recursive formulation, in the same
    // order, without growing the call stack.
    let mut chosen: Vec<usize> = Vec::new();
    let mut claimed: FxHashSet<RoomId> = FxHashSet::default();
    let mut cursor = 0;

    loop {
        while cursor < candidates.len() {
            let interior = candidates[cursor].interior();
            if interior.iter().all(|r| !claimed.contains(r)) {
                claimed.extend(interior.iter().copied());
                chosen.push(cursor);
                // Strictly-greater replacement: the first subset to reach a
                // given size wins every tie.
                if chosen.len() > best.len() {
                    best = chosen.clone();
                }
            }
            cursor += 1;
        }

        match chosen.pop() {
            None => break,
            Some(backtracked) => {
                for room in candidates[backtracked].interior() {
                    claimed.remove(room);
                }
                cursor = backtracked + 1;
            }
        }
    }

    best.into_iter().map(|i| candidates[i].clone()).collect()
}
