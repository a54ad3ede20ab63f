//! `ant-core` — foundational types for the antfarm colony-routing framework.
//!
//! This crate is a dependency of every other `ant-*` crate.  It intentionally
//! has no `ant-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `AntId`, `RoomId`                         |
//! | [`point`]   | `MapPoint` (display coordinates)          |
//! | [`step`]    | `Step`, `SimConfig`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod point;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AntId, RoomId};
pub use point::MapPoint;
pub use step::{SimConfig, Step};
