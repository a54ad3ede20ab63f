//! Simulation step model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Step` counter.  One step is one
//! synchronous round of the movement scheduler: every ant gets at most one
//! hop per step.  There is no wall-clock mapping — the simulation is a pure
//! turn-based process and step arithmetic stays exact integer math.
//!
//! Emitted records number steps from 1; `Step::ZERO` is the initial state
//! before any ant has moved and is never reported.

use std::fmt;

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
///
/// Stored as `u64`: far beyond any schedule a bounded run can produce, so
/// overflow is not a practical concern even with a generous deadlock cap.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Hard upper bound on simulation steps.
    ///
    /// A run that has not delivered every ant within this many steps is
    /// reported as a routing deadlock instead of looping forever.  Must be
    /// non-zero; the sim builder rejects a zero cap.
    pub max_steps: u64,
}

impl SimConfig {
    /// Fallback step cap.  Orders of magnitude above any schedule a feasible
    /// colony produces (worst case is ants + longest route hops), while still
    /// terminating promptly on a livelocked topology.
    pub const DEFAULT_MAX_STEPS: u64 = 100_000;
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { max_steps: Self::DEFAULT_MAX_STEPS }
    }
}
