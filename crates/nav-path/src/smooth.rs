use nav_core::{CellIndex, Vec2};
use nav_grid::{line_of_sight, GridMap};

/// Shortcut a raw cell path into a compact waypoint polyline.
///
/// Emits the caller's world start first, then the centers of the kept cells.
/// From each kept cell the pass jumps to the farthest raw cell with clear
/// line-of-sight (scanning the whole tail, not stopping at the first break),
/// which is what makes a second pass over the output a no-op.
pub(crate) fn smooth_into(
    grid: &GridMap,
    start_world: Vec2,
    cells: &[CellIndex],
    out: &mut Vec<Vec2>,
) {
    out.clear();
    out.push(start_world);

    let mut anchor = 0;
    while anchor + 1 < cells.len() {
        let mut next = anchor + 1;
        for j in (anchor + 1)..cells.len() {
            if line_of_sight(grid, cells[anchor], cells[j]) {
                next = j;
            }
        }
        out.push(grid.cell_center(cells[next]));
        anchor = next;
    }
}
