use crate::{CellIndex, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier for a registered static obstacle, allocated by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstacleId(pub u64);

/// Caller-chosen identifier for a mobile agent (dynamic obstacle / group member).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentId(pub u64);

/// Result of a successful path query.
///
/// `waypoints[0]` is the caller-supplied world start; every later waypoint is
/// a cell center, and the last one lies on `goal_cell`. `goal_cell` is the
/// reported goal, which differs from the requested cell when the engine
/// substituted a nearby walkable cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    pub waypoints: Vec<Vec2>,
    pub goal_cell: CellIndex,
    pub cache_hit: bool,
    pub nodes_expanded: u32,
    /// Total path cost in fixed-point step units (cardinal/diagonal costs
    /// plus dynamic penalties). Zero for a degenerate same-cell path.
    pub cost: u32,
}
