//! Walkability grid, obstacle registry, and grid line-of-sight.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod grid;
pub mod los;
pub mod obstacles;

pub use grid::{GridMap, WalkabilitySnapshot};
pub use los::line_of_sight;
pub use obstacles::{DynamicObstacle, NavMap};
