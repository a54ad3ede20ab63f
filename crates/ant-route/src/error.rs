//! Routing-subsystem error type.

use thiserror::Error;

use ant_core::RoomId;

/// Errors produced by `ant-route`.
///
/// Both variants are structural: they abort a run before any simulation
/// step executes.  Per-step contention is never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no path from {from} to {to}")]
    NoPath { from: RoomId, to: RoomId },

    #[error("no interior-disjoint routes available")]
    NoDisjointRoutes,
}

pub type RouteResult<T> = Result<T, RouteError>;
