//! `ant-sim` — the step-loop movement scheduler for the antfarm framework.
//!
//! # Two-phase step loop
//!
//! ```text
//! while some ant is short of the end room:
//!   ① Move    — ants in ascending AntId order: hop to the next room on
//!               the assigned route iff it is unclaimed this step or is
//!               the end room (unlimited capacity); claim it.
//!   ② Reroute — ants that could not hop and are standing on a room
//!               claimed this step look for a replacement route that
//!               avoids every claimed room; adopting one only affects
//!               later steps.
//!   ③ Report  — the step's move events go to the observer in AntId
//!               order; zero-move steps are reported too.
//! ```
//!
//! The occupancy set is created at the top of each step and dropped at its
//! end — contention state never leaks across steps.  Evaluation order is
//! part of the observable contract: the lower AntId always wins a contested
//! room, which is what makes a run fully deterministic.
//!
//! A step cap (`SimConfig::max_steps`) converts livelock — a colony where
//! some ant can never clear its block — into [`SimError::Deadlock`] instead
//! of an endless loop.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ant_core::SimConfig;
//! use ant_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(network, ant_count, SimConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("delivered in {} steps", summary.steps);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod store;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StepObserver};
pub use sim::{MoveEvent, RunSummary, Sim};
pub use store::AntStore;
