//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `moves.csv`
//! - `step_summaries.csv`
//!
//! Header rows come from the serde field names of the row structs; they are
//! written automatically with the first record.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult, StepSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    moves:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let moves = Writer::from_path(dir.join("moves.csv"))?;
        let summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        Ok(Self {
            moves,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.serialize(row)?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
