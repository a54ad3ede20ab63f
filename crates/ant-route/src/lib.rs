//! `ant-route` — route discovery and distribution for the antfarm framework.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`path`]      | `Route` — an immutable simple path of rooms           |
//! | [`enumerate`] | All simple paths between two rooms (arena frontier)   |
//! | [`select`]    | Maximum interior-disjoint subset of a candidate list  |
//! | [`assign`]    | Round-robin ant→route assignment with a reserved slot |
//! | [`plan`]      | `plan_routes` — the full enumerate→select→assign flow |
//! | [`error`]     | `RouteError`, `RouteResult`                           |
//!
//! # Pipeline
//!
//! ```text
//! TunnelNetwork ──enumerate_simple_paths──▶ every simple start→end path
//!               ──sort by length (stable)──▶ shortest-first candidates
//!               ──select_max_disjoint──────▶ largest interior-disjoint pool
//!               ──assign_routes────────────▶ one route per ant
//! ```
//!
//! Both searches are exponential by nature — enumeration in the number of
//! simple paths, selection in the number of candidates.  That is the
//! documented contract: colony maps are expected to keep both counts small,
//! and no bound is imposed on adversarial inputs.

pub mod assign;
pub mod enumerate;
pub mod error;
pub mod path;
pub mod plan;
pub mod select;


pub use assign::assign_routes;
pub use enumerate::enumerate_simple_paths;
pub use error::{RouteError, RouteResult};
pub use path::Route;
pub use plan::plan_routes;
pub use select::select_max_disjoint;
