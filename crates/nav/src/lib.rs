//! Deterministic 2D navigation core: walkability grid, A* search with
//! smoothing and caching, and formation-based group dispatch.
//!
//! This umbrella crate re-exports the member crates behind feature flags so
//! games can depend on exactly the layers they use.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
pub use nav_core as core;

#[cfg(feature = "grid")]
pub use nav_grid as grid;

#[cfg(feature = "path")]
pub use nav_path as path;

#[cfg(feature = "group")]
pub use nav_group as group;

#[cfg(feature = "core")]
pub use nav_core::{AgentId, CancelToken, CellIndex, NavError, ObstacleId, PathResult, Rect, Vec2};

#[cfg(feature = "grid")]
pub use nav_grid::{line_of_sight, GridMap, NavMap, WalkabilitySnapshot};

#[cfg(feature = "path")]
pub use nav_path::{NavOptions, Pathfinder};

#[cfg(feature = "group")]
pub use nav_group::{find_group_paths, formation_slots, Formation, GroupMember};
