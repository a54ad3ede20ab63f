//! Graph-subsystem error types.

use thiserror::Error;

use ant_core::RoomId;

/// Errors raised while building a [`TunnelNetwork`][crate::TunnelNetwork].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("no start room marked")]
    MissingStart,

    #[error("no end room marked")]
    MissingEnd,

    #[error("start and end are the same room")]
    StartIsEnd,

    #[error("duplicate room name {0:?}")]
    DuplicateRoomName(String),

    #[error("room {0:?} is connected to itself")]
    SelfLoop(String),

    #[error("room {0} is not part of this network")]
    RoomOutOfRange(RoomId),
}

/// Errors raised while loading a colony-map file.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("line {line}: expected a positive ant count")]
    InvalidAntCount { line: usize },

    #[error("line {line}: malformed room (expected \"name x y\")")]
    MalformedRoom { line: usize },

    #[error("line {line}: malformed tunnel (expected \"a-b\")")]
    MalformedTunnel { line: usize },

    #[error("line {line}: tunnel references unknown room {name:?}")]
    UnknownRoom { name: String, line: usize },

    #[error("line {line}: {directive} must be followed by a room line")]
    DanglingDirective { directive: &'static str, line: usize },

    #[error("line {line}: unrecognized line")]
    UnrecognizedLine { line: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
