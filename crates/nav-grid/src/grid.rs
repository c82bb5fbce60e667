use nav_core::{CellIndex, Vec2};

/// Discretized walkability map of a rectangular world.
///
/// Cells carry two independent states: `static_blocked` (buildings; the only
/// state that matters for planning) and `dynamic_blocked` (agents; advisory,
/// feeds the search's cost penalty but never makes a cell unwalkable). Both
/// are stored as per-cell coverage counts so overlapping obstacles register
/// and unregister correctly.
///
/// Mutation goes exclusively through [`NavMap`](crate::NavMap); everything
/// here is a random-access read in O(1).
#[derive(Debug, Clone)]
pub struct GridMap {
    cols: i32,
    rows: i32,
    cell_size: f32,
    static_count: Vec<u16>,
    dynamic_count: Vec<u16>,
    dynamic_penalty: u32,
}

impl GridMap {
    /// Discretize a `world_width` x `world_height` world into cells of
    /// `cell_size` world units.
    ///
    /// # Panics
    ///
    /// Panics if the world is empty or `cell_size` is not positive; an empty
    /// world is a programmer error, not a runtime condition.
    pub fn new(world_width: f32, world_height: f32, cell_size: f32, dynamic_penalty: u32) -> Self {
        assert!(
            world_width > 0.0 && world_height > 0.0,
            "world must be non-empty"
        );
        assert!(cell_size > 0.0, "cell_size must be > 0");
        let cols = (world_width / cell_size).ceil() as i32;
        let rows = (world_height / cell_size).ceil() as i32;
        let len = (cols as usize) * (rows as usize);
        Self {
            cols,
            rows,
            cell_size,
            static_count: vec![0; len],
            dynamic_count: vec![0; len],
            dynamic_penalty,
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn in_bounds(&self, cell: CellIndex) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }

    pub(crate) fn idx(&self, cell: CellIndex) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.cols + cell.x) as usize)
    }

    /// Convert a world position to the cell containing it, clamping to the
    /// valid range. Total for any finite input since the world is non-empty.
    pub fn world_to_cell(&self, p: Vec2) -> CellIndex {
        let x = (p.x / self.cell_size).floor() as i32;
        let y = (p.y / self.cell_size).floor() as i32;
        CellIndex::new(x.clamp(0, self.cols - 1), y.clamp(0, self.rows - 1))
    }

    /// Geometric center of a cell in world units.
    pub fn cell_center(&self, cell: CellIndex) -> Vec2 {
        Vec2::new(
            (cell.x as f32 + 0.5) * self.cell_size,
            (cell.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Walkable for planning: in bounds and not statically blocked.
    pub fn is_walkable(&self, cell: CellIndex) -> bool {
        self.idx(cell)
            .map(|i| self.static_count[i] == 0)
            .unwrap_or(false)
    }

    pub fn is_dynamic_blocked(&self, cell: CellIndex) -> bool {
        self.idx(cell)
            .map(|i| self.dynamic_count[i] > 0)
            .unwrap_or(false)
    }

    /// Additive cost penalty for entering a dynamically occupied cell.
    pub fn dynamic_weight(&self, cell: CellIndex) -> u32 {
        if self.is_dynamic_blocked(cell) {
            self.dynamic_penalty
        } else {
            0
        }
    }

    /// Returns true if the cell's static state flipped.
    pub(crate) fn add_static_cover(&mut self, cell: CellIndex) -> bool {
        let Some(i) = self.idx(cell) else { return false };
        self.static_count[i] += 1;
        self.static_count[i] == 1
    }

    /// Returns true if the cell's static state flipped.
    pub(crate) fn remove_static_cover(&mut self, cell: CellIndex) -> bool {
        let Some(i) = self.idx(cell) else { return false };
        debug_assert!(self.static_count[i] > 0, "unbalanced static cover");
        self.static_count[i] -= 1;
        self.static_count[i] == 0
    }

    pub(crate) fn add_dynamic_occupant(&mut self, cell: CellIndex) {
        if let Some(i) = self.idx(cell) {
            self.dynamic_count[i] += 1;
        }
    }

    pub(crate) fn remove_dynamic_occupant(&mut self, cell: CellIndex) {
        if let Some(i) = self.idx(cell) {
            debug_assert!(self.dynamic_count[i] > 0, "unbalanced dynamic occupancy");
            self.dynamic_count[i] -= 1;
        }
    }

    /// Read-only view for debug overlays; valid until the next mutation.
    pub fn snapshot(&self) -> WalkabilitySnapshot<'_> {
        WalkabilitySnapshot {
            cols: self.cols,
            rows: self.rows,
            static_count: &self.static_count,
            dynamic_count: &self.dynamic_count,
        }
    }
}

/// Borrowed view of the walkability bitmap for debug consumers.
#[derive(Debug, Clone, Copy)]
pub struct WalkabilitySnapshot<'a> {
    cols: i32,
    rows: i32,
    static_count: &'a [u16],
    dynamic_count: &'a [u16],
}

impl WalkabilitySnapshot<'_> {
    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn static_blocked(&self, cell: CellIndex) -> bool {
        self.index(cell)
            .map(|i| self.static_count[i] > 0)
            .unwrap_or(false)
    }

    pub fn dynamic_blocked(&self, cell: CellIndex) -> bool {
        self.index(cell)
            .map(|i| self.dynamic_count[i] > 0)
            .unwrap_or(false)
    }

    fn index(&self, cell: CellIndex) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.cols || cell.y >= self.rows {
            return None;
        }
        Some((cell.y * self.cols + cell.x) as usize)
    }
}
