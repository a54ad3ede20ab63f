//! `ant-graph` — the tunnel network a colony is routed across.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`network`] | `TunnelNetwork` (CSR adjacency), `TunnelNetworkBuilder` |
//! | [`loader`]  | Colony-map text format loader, `Colony`                 |
//! | [`error`]   | `GraphError`, `MapError`                                |
//!
//! The network is immutable once built: every mutation path goes through the
//! builder, which validates the start/end contract before handing out a
//! `TunnelNetwork`.  Downstream crates may therefore index room-keyed arrays
//! with `RoomId`s from this network without re-checking bounds.

pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{GraphError, MapError};
pub use loader::{Colony, load_colony_path, load_colony_reader};
pub use network::{TunnelNetwork, TunnelNetworkBuilder};
