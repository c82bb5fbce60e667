use std::collections::BTreeMap;

use nav_core::{AgentId, CellIndex, NavError, ObstacleId, Rect, Vec2};

use crate::grid::{GridMap, WalkabilitySnapshot};

/// A mobile agent registered as a dynamic obstacle.
///
/// Membership is the single cell containing `position`; `radius` is carried
/// for callers (spacing, steering) but does not widen the footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicObstacle {
    pub position: Vec2,
    pub radius: f32,
    cell: CellIndex,
}

impl DynamicObstacle {
    pub fn cell(&self) -> CellIndex {
        self.cell
    }
}

/// Authoritative obstacle set layered over a [`GridMap`].
///
/// `NavMap` is the sole writer of walkability bits. Static mutations bump the
/// obstacle epoch whenever any `static_blocked` bit flips; dynamic mutations
/// never touch the epoch.
#[derive(Debug, Clone)]
pub struct NavMap {
    grid: GridMap,
    statics: BTreeMap<ObstacleId, Rect>,
    dynamics: BTreeMap<AgentId, DynamicObstacle>,
    next_obstacle_id: u64,
    epoch: u64,
}

impl NavMap {
    /// See [`GridMap::new`] for the discretization rules and panics.
    pub fn new(world_width: f32, world_height: f32, cell_size: f32, dynamic_penalty: u32) -> Self {
        Self {
            grid: GridMap::new(world_width, world_height, cell_size, dynamic_penalty),
            statics: BTreeMap::new(),
            dynamics: BTreeMap::new(),
            next_obstacle_id: 0,
            epoch: 0,
        }
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// Current static obstacle epoch. Strictly increases on every effective
    /// change of the static walkability bits.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn snapshot(&self) -> WalkabilitySnapshot<'_> {
        self.grid.snapshot()
    }

    pub fn dynamic(&self, id: AgentId) -> Option<&DynamicObstacle> {
        self.dynamics.get(&id)
    }

    /// Register a static obstacle and mark every cell its area intersects.
    ///
    /// A rectangle whose edge aligns exactly with a cell boundary blocks only
    /// the cells strictly interior to it.
    pub fn add_static(&mut self, rect: Rect) -> Result<ObstacleId, NavError> {
        if !rect.has_positive_area() {
            return Err(NavError::InvalidObstacle);
        }

        let id = ObstacleId(self.next_obstacle_id);
        self.next_obstacle_id += 1;

        let mut flipped = false;
        for cell in self.covered_cells(rect) {
            flipped |= self.grid.add_static_cover(cell);
        }
        if flipped {
            self.epoch += 1;
            tracing::debug!(id = id.0, epoch = self.epoch, "static obstacle added");
        }

        self.statics.insert(id, rect);
        Ok(id)
    }

    /// Unregister a static obstacle and unmark cells no longer covered by
    /// any remaining record.
    pub fn remove_static(&mut self, id: ObstacleId) -> Result<(), NavError> {
        let rect = self.statics.remove(&id).ok_or(NavError::UnknownObstacle)?;

        let mut flipped = false;
        for cell in self.covered_cells(rect) {
            flipped |= self.grid.remove_static_cover(cell);
        }
        if flipped {
            self.epoch += 1;
            tracing::debug!(id = id.0, epoch = self.epoch, "static obstacle removed");
        }

        Ok(())
    }

    /// Insert or move a dynamic obstacle. Never touches static bits or the
    /// epoch.
    pub fn set_dynamic(&mut self, id: AgentId, position: Vec2, radius: f32) {
        let cell = self.grid.world_to_cell(position);
        match self.dynamics.get_mut(&id) {
            Some(record) => {
                let previous = record.cell;
                record.position = position;
                record.radius = radius;
                record.cell = cell;
                if previous != cell {
                    self.grid.remove_dynamic_occupant(previous);
                    self.grid.add_dynamic_occupant(cell);
                }
            }
            None => {
                self.dynamics.insert(
                    id,
                    DynamicObstacle {
                        position,
                        radius,
                        cell,
                    },
                );
                self.grid.add_dynamic_occupant(cell);
            }
        }
    }

    pub fn remove_dynamic(&mut self, id: AgentId) -> Result<(), NavError> {
        let record = self.dynamics.remove(&id).ok_or(NavError::UnknownObstacle)?;
        self.grid.remove_dynamic_occupant(record.cell);
        Ok(())
    }

    /// Cells whose area intersects `rect` with positive overlap, clamped to
    /// the grid.
    fn covered_cells(&self, rect: Rect) -> impl Iterator<Item = CellIndex> {
        let cs = self.grid.cell_size();
        let first_x = ((rect.x / cs).floor() as i32).max(0);
        let first_y = ((rect.y / cs).floor() as i32).max(0);
        // ceil - 1 leaves boundary-aligned edges strictly interior.
        let last_x = ((((rect.x + rect.w) / cs).ceil() as i32) - 1).min(self.grid.cols() - 1);
        let last_y = ((((rect.y + rect.h) / cs).ceil() as i32) - 1).min(self.grid.rows() - 1);

        (first_y..=last_y)
            .flat_map(move |y| (first_x..=last_x).map(move |x| CellIndex::new(x, y)))
    }
}
