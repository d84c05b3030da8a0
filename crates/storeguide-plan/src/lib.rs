//! Route planning engine: shortest paths, zone sequencing, and route
//! assembly over the fixed store graph.
//!
//! The planning pipeline is `items -> zones -> visiting order -> polyline`:
//! [`planner::plan_route`] maps free-text items to zones through the
//! catalog, [`sequencer::sequence`] orders the zones (validated external
//! hint or deterministic nearest-neighbor fallback) and appends the
//! nearest exit, and [`assembler::assemble`] stitches per-leg
//! [`dijkstra::shortest_path`] results into one continuous polyline.
//!
//! Everything here is pure: no IO, no clocks, no randomness. The external
//! ordering hint is fetched by the caller and passed in as data.

pub mod assembler;
pub mod dijkstra;
pub mod error;
pub mod planner;
pub mod sequencer;

pub use dijkstra::shortest_path;
pub use error::PlanError;
pub use planner::plan_route;
pub use sequencer::sequence;
