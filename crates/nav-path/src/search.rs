use core::cmp::Ordering;
use std::collections::BinaryHeap;

use nav_core::{CancelToken, CellIndex, NavError};
use nav_grid::{GridMap, NavMap};

use crate::pathfinder::NavOptions;

/// Neighbor offsets in fixed order for determinism: N, NE, E, SE, S, SW, W, NW.
const DIRS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: CellIndex,
    tie: u64,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        (self.f, self.g, self.tie) == (other.f, other.g, other.tie)
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest entry; "greatest" here means the one
        // expanded next: smallest f, then largest g (closest to the goal),
        // then the most recently generated. `tie` is unique per push, so the
        // order is total.
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.tie.cmp(&other.tie))
    }
}

/// Reusable search buffers owned by the pathfinder.
///
/// Avoids per-request allocations for the open heap, score table, and
/// back-pointers; a request only allocates its output polyline.
#[derive(Debug, Default)]
pub(crate) struct SearchScratch {
    open: BinaryHeap<OpenNode>,
    g_score: Vec<u32>,
    came_from: Vec<Option<usize>>,
    pub(crate) path: Vec<CellIndex>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchStats {
    /// The goal actually reached; differs from the request when substituted.
    pub goal_cell: CellIndex,
    pub nodes_expanded: u32,
    pub cost: u32,
}

/// Octile distance with the configured step costs. Admissible and consistent
/// for 8-connected movement when `dc < 2*sc`.
fn octile(a: CellIndex, b: CellIndex, sc: u32, dc: u32) -> u32 {
    let dx = (a.x - b.x).unsigned_abs();
    let dy = (a.y - b.y).unsigned_abs();
    let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
    sc * (max - min) + dc * min
}

/// Nearest walkable cell to a blocked goal within the substitution radius,
/// minimizing (octile distance, row, column) for determinism.
fn substitute_goal(
    grid: &GridMap,
    goal: CellIndex,
    radius: i32,
    sc: u32,
    dc: u32,
) -> Option<CellIndex> {
    let mut best: Option<(u32, CellIndex)> = None;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx == 0 && dy == 0 {
                continue;
            }
            let cell = CellIndex::new(goal.x + dx, goal.y + dy);
            if !grid.is_walkable(cell) {
                continue;
            }
            let candidate = (octile(cell, goal, sc, dc), cell);
            match best {
                None => best = Some(candidate),
                Some(current) if candidate < current => best = Some(candidate),
                _ => {}
            }
        }
    }
    best.map(|(_, cell)| cell)
}

/// A* from `start` to `goal` over the map's static walkability, leaving the
/// raw cell path in `scratch.path` (start to goal inclusive).
pub(crate) fn astar(
    map: &NavMap,
    options: &NavOptions,
    start: CellIndex,
    goal: CellIndex,
    max_nodes: u32,
    cancel: Option<&CancelToken>,
    scratch: &mut SearchScratch,
) -> Result<SearchStats, NavError> {
    let grid = map.grid();
    if !grid.is_walkable(start) {
        return Err(NavError::StartBlocked);
    }

    let sc = options.cardinal_cost;
    let dc = options.diagonal_cost;
    let goal = if grid.is_walkable(goal) {
        goal
    } else {
        substitute_goal(grid, goal, options.goal_substitution_radius, sc, dc)
            .ok_or(NavError::GoalUnreachable)?
    };

    let cols = grid.cols();
    let len = (cols as usize) * (grid.rows() as usize);
    let idx = |cell: CellIndex| -> usize { (cell.y * cols + cell.x) as usize };

    scratch.open.clear();
    scratch.g_score.resize(len, u32::MAX);
    scratch.g_score.fill(u32::MAX);
    scratch.came_from.resize(len, None);
    scratch.came_from.fill(None);
    scratch.path.clear();

    scratch.g_score[idx(start)] = 0;
    scratch.open.push(OpenNode {
        f: octile(start, goal, sc, dc),
        g: 0,
        cell: start,
        tie: 0,
    });
    let mut tie: u64 = 1;
    let mut expanded: u32 = 0;

    while let Some(node) = scratch.open.pop() {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                return Err(NavError::Cancelled);
            }
        }

        let node_idx = idx(node.cell);
        if node.g != scratch.g_score[node_idx] {
            // Stale heap entry.
            continue;
        }

        if node.cell == goal {
            scratch.path.push(node.cell);
            let mut current = node_idx;
            while let Some(prev) = scratch.came_from[current] {
                current = prev;
                scratch.path.push(CellIndex::new(
                    (prev % cols as usize) as i32,
                    (prev / cols as usize) as i32,
                ));
            }
            scratch.path.reverse();
            return Ok(SearchStats {
                goal_cell: goal,
                nodes_expanded: expanded,
                cost: node.g,
            });
        }

        expanded += 1;
        if expanded >= max_nodes {
            return Err(NavError::NodeBudgetExceeded);
        }

        for (dx, dy) in DIRS {
            let diagonal = dx != 0 && dy != 0;
            if diagonal && !options.diagonal_moves {
                continue;
            }
            let neighbor = CellIndex::new(node.cell.x + dx, node.cell.y + dy);
            if !grid.is_walkable(neighbor) {
                continue;
            }
            if diagonal && !options.corner_cutting {
                // Both orthogonal neighbors must be open to step diagonally.
                let ortho_a = CellIndex::new(node.cell.x + dx, node.cell.y);
                let ortho_b = CellIndex::new(node.cell.x, node.cell.y + dy);
                if !grid.is_walkable(ortho_a) || !grid.is_walkable(ortho_b) {
                    continue;
                }
            }

            let step = if diagonal { dc } else { sc };
            let tentative = node
                .g
                .saturating_add(step)
                .saturating_add(grid.dynamic_weight(neighbor));
            let neighbor_idx = idx(neighbor);
            if tentative >= scratch.g_score[neighbor_idx] {
                continue;
            }

            scratch.came_from[neighbor_idx] = Some(node_idx);
            scratch.g_score[neighbor_idx] = tentative;
            scratch.open.push(OpenNode {
                f: tentative.saturating_add(octile(neighbor, goal, sc, dc)),
                g: tentative,
                cell: neighbor,
                tie,
            });
            tie += 1;
        }
    }

    Err(NavError::NoPath)
}
