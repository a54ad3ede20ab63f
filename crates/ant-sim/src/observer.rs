//! Simulation observer trait for progress reporting and data collection.

use ant_core::Step;
use ant_graph::TunnelNetwork;

use crate::MoveEvent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at step boundaries.
///
/// Both methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl StepObserver for MovePrinter {
///     fn on_step(&mut self, step: Step, moves: &[MoveEvent], net: &TunnelNetwork) {
///         for m in moves {
///             println!("{step}: L{}-{}", m.ant.0 + 1, net.room_name(m.room));
///         }
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called once per executed step, after movement and rerouting.
    ///
    /// `moves` is in ascending AntId order and may be empty — every counted
    /// step is reported, and renderers decide whether to suppress the
    /// silent ones.  `net` is provided so implementors can resolve room
    /// names without holding their own reference.
    fn on_step(&mut self, _step: Step, _moves: &[MoveEvent], _net: &TunnelNetwork) {}

    /// Called once after the final step, when every ant is home.
    fn on_run_end(&mut self, _final_step: Step) {}
}

/// A [`StepObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}
