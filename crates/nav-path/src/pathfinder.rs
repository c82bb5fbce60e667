//! Top-level facade tying the grid, search, smoother, and cache together.

use std::collections::VecDeque;

use nav_core::{AgentId, CancelToken, CellIndex, NavError, ObstacleId, PathResult, Rect, Vec2};
use nav_grid::{NavMap, WalkabilitySnapshot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cache::{CachedPath, PathCache};
use crate::search::{astar, SearchScratch};
use crate::smooth::smooth_into;

/// Number of recently returned polylines kept for the debug overlay.
const LAST_PATHS_CAPACITY: usize = 16;

/// Start and goal world points closer than this collapse to a no-op path.
const SAME_POINT_TOLERANCE: f32 = 1e-6;

/// Tuning knobs for the pathfinder. `Default` gives the canonical 10/14
/// cost pair, no corner cutting, and no dynamic penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavOptions {
    pub diagonal_moves: bool,
    pub corner_cutting: bool,
    pub cardinal_cost: u32,
    pub diagonal_cost: u32,
    /// Extra cost for entering a cell occupied by a dynamic obstacle.
    /// Zero disables the penalty entirely.
    pub dynamic_penalty: u32,
    pub cache_capacity: usize,
    pub default_max_nodes: u32,
    /// Chebyshev radius scanned for a walkable substitute when the goal
    /// cell is blocked.
    pub goal_substitution_radius: i32,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            diagonal_moves: true,
            corner_cutting: false,
            cardinal_cost: 10,
            diagonal_cost: 14,
            dynamic_penalty: 0,
            cache_capacity: 100,
            default_max_nodes: 1000,
            goal_substitution_radius: 3,
        }
    }
}

/// The navigation core: owns the walkability map, computes, smooths, and
/// caches paths.
///
/// Designed to be driven from a game loop: every call runs to completion,
/// nothing blocks, and results are pure functions of the map state at call
/// time plus the request.
#[derive(Debug)]
pub struct Pathfinder {
    map: NavMap,
    options: NavOptions,
    cache: PathCache,
    scratch: SearchScratch,
    last_paths: VecDeque<Vec<Vec2>>,
}

impl Pathfinder {
    /// Create a pathfinder for a `world_width` x `world_height` world
    /// discretized into `cell_size` cells.
    ///
    /// # Panics
    ///
    /// Panics if the world is empty or `cell_size` is not positive.
    pub fn new(world_width: f32, world_height: f32, cell_size: f32, options: NavOptions) -> Self {
        Self {
            map: NavMap::new(world_width, world_height, cell_size, options.dynamic_penalty),
            cache: PathCache::new(options.cache_capacity),
            options,
            scratch: SearchScratch::default(),
            last_paths: VecDeque::with_capacity(LAST_PATHS_CAPACITY),
        }
    }

    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    pub fn map(&self) -> &NavMap {
        &self.map
    }

    pub fn epoch(&self) -> u64 {
        self.map.epoch()
    }

    /// Register a static obstacle footprint. See [`NavMap::add_static`].
    pub fn add_static(&mut self, rect: Rect) -> Result<ObstacleId, NavError> {
        self.map.add_static(rect)
    }

    pub fn remove_static(&mut self, id: ObstacleId) -> Result<(), NavError> {
        self.map.remove_static(id)
    }

    pub fn set_dynamic(&mut self, id: AgentId, position: Vec2, radius: f32) {
        self.map.set_dynamic(id, position, radius)
    }

    pub fn remove_dynamic(&mut self, id: AgentId) -> Result<(), NavError> {
        self.map.remove_dynamic(id)
    }

    /// Plan a smoothed path with the default node budget and no cancellation.
    pub fn find_path(&mut self, start: Vec2, goal: Vec2) -> Result<PathResult, NavError> {
        self.find_path_with(start, goal, None, None)
    }

    /// Plan a smoothed path from `start` to `goal` (world units).
    ///
    /// `max_nodes` overrides the configured expansion budget. Cancellation is
    /// checked at every open-set pop. On success the returned waypoints begin
    /// at `start` and end on the reported goal cell's center.
    pub fn find_path_with(
        &mut self,
        start: Vec2,
        goal: Vec2,
        max_nodes: Option<u32>,
        cancel: Option<&CancelToken>,
    ) -> Result<PathResult, NavError> {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                return Err(NavError::Cancelled);
            }
        }

        let grid = self.map.grid();
        let start_cell = grid.world_to_cell(start);
        let goal_cell = grid.world_to_cell(goal);

        if !grid.is_walkable(start_cell) {
            return Err(NavError::StartBlocked);
        }

        if start_cell == goal_cell {
            let center = grid.cell_center(goal_cell);
            let mut waypoints = vec![start];
            if start.distance(center) > SAME_POINT_TOLERANCE {
                waypoints.push(center);
            }
            let result = PathResult {
                waypoints,
                goal_cell,
                cache_hit: false,
                nodes_expanded: 0,
                cost: 0,
            };
            self.remember(&result.waypoints);
            return Ok(result);
        }

        let epoch = self.map.epoch();
        if let Some(cached) = self.cache.get(epoch, start_cell, goal_cell) {
            tracing::debug!(?start_cell, ?goal_cell, "path cache hit");
            let result = PathResult {
                waypoints: cached.waypoints.clone(),
                goal_cell: cached.goal_cell,
                cache_hit: true,
                nodes_expanded: 0,
                cost: cached.cost,
            };
            self.remember(&result.waypoints);
            return Ok(result);
        }

        let budget = max_nodes.unwrap_or(self.options.default_max_nodes);
        let stats = astar(
            &self.map,
            &self.options,
            start_cell,
            goal_cell,
            budget,
            cancel,
            &mut self.scratch,
        )?;

        let mut waypoints = Vec::new();
        smooth_into(self.map.grid(), start, &self.scratch.path, &mut waypoints);
        tracing::trace!(
            nodes = stats.nodes_expanded,
            cost = stats.cost,
            waypoints = waypoints.len(),
            "search completed"
        );

        self.cache.insert(
            epoch,
            start_cell,
            goal_cell,
            CachedPath {
                waypoints: waypoints.clone(),
                goal_cell: stats.goal_cell,
                cost: stats.cost,
            },
        );

        let result = PathResult {
            waypoints,
            goal_cell: stats.goal_cell,
            cache_hit: false,
            nodes_expanded: stats.nodes_expanded,
            cost: stats.cost,
        };
        self.remember(&result.waypoints);
        Ok(result)
    }

    /// Read-only walkability view for debug overlays.
    pub fn walkability_snapshot(&self) -> WalkabilitySnapshot<'_> {
        self.map.snapshot()
    }

    /// Recently returned polylines, oldest first (bounded ring).
    pub fn last_paths(&self) -> impl Iterator<Item = &[Vec2]> {
        self.last_paths.iter().map(Vec::as_slice)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear()
    }

    fn remember(&mut self, waypoints: &[Vec2]) {
        if self.last_paths.len() == LAST_PATHS_CAPACITY {
            self.last_paths.pop_front();
        }
        self.last_paths.push_back(waypoints.to_vec());
    }
}
