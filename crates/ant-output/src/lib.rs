//! `ant-output` — simulation output writers for the antfarm framework.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                 | One row per…                          |
//! |----------------------|---------------------------------------|
//! | `moves.csv`          | successful hop (steps that moved)     |
//! | `step_summaries.csv` | executed step, silent ones included   |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `ant_sim::StepObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ant_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{MoveRow, StepSummaryRow};
pub use writer::OutputWriter;
