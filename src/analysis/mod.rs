//! Reductions over the route metrics table.
//!
//! [`summary`] produces the network-wide [`summary::SummaryStats`];
//! [`charts`] assembles the per-chart datasets from the ranking, breakdown,
//! trend and quadrant reductions.

pub mod breakdown;
pub mod charts;
pub mod quadrant;
pub mod ranking;
pub mod summary;
pub mod trend;
pub mod types;
pub mod utility;
