//! `SimOutputObserver<W>` — bridges `StepObserver` to an `OutputWriter`.

use ant_core::Step;
use ant_graph::TunnelNetwork;
use ant_sim::{MoveEvent, StepObserver};

use crate::row::{MoveRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`StepObserver`] that records every step through any [`OutputWriter`]
/// backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for them with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> StepObserver for SimOutputObserver<W> {
    fn on_step(&mut self, step: Step, moves: &[MoveEvent], net: &TunnelNetwork) {
        let summary = StepSummaryRow {
            step:  step.0,
            moves: moves.len() as u64,
        };
        let result = self.writer.write_step_summary(&summary);
        self.store_err(result);

        if moves.is_empty() {
            return;
        }
        let rows: Vec<MoveRow> = moves
            .iter()
            .map(|m| MoveRow {
                step:      step.0,
                ant_id:    m.ant.0,
                room_id:   m.room.0,
                room_name: net.room_name(m.room).to_owned(),
            })
            .collect();
        let result = self.writer.write_moves(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
