//! Plain data row types written by output backends.
//!
//! Field names become CSV headers through serde, so renames here are
//! output-format changes.

use serde::Serialize;

/// One successful hop: ant `ant_id` entered `room_id` during `step`.
///
/// Ids are the internal zero-based ones; `room_name` carries the display
/// name so the file is readable without the map at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    pub step:      u64,
    pub ant_id:    u32,
    pub room_id:   u32,
    pub room_name: String,
}

/// Summary statistics for one executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepSummaryRow {
    pub step:  u64,
    /// Hops made this step.  Zero-move steps still get a row.
    pub moves: u64,
}
