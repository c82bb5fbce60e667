use nav_core::CellIndex;

use crate::grid::GridMap;

/// Grid line-of-sight between the centers of two cells.
///
/// Walks every cell the segment touches (integer supercover) and returns
/// false if any of them is statically blocked. When the segment passes
/// exactly through a grid corner the two side cells are normally skipped,
/// unless both are blocked: squeezing between two diagonally adjacent
/// blockers is never allowed.
pub fn line_of_sight(grid: &GridMap, from: CellIndex, to: CellIndex) -> bool {
    if !grid.is_walkable(from) || !grid.is_walkable(to) {
        return false;
    }

    let mut x = from.x as i64;
    let mut y = from.y as i64;
    let nx = (to.x as i64 - x).abs();
    let ny = (to.y as i64 - y).abs();
    let sx: i64 = if to.x as i64 > x { 1 } else { -1 };
    let sy: i64 = if to.y as i64 > y { 1 } else { -1 };

    let mut ix: i64 = 0;
    let mut iy: i64 = 0;
    while ix < nx || iy < ny {
        // Compare the next vertical and horizontal boundary crossings.
        // Centers sit at half-cell offsets, hence the 1 + 2*i numerators.
        let t = (1 + 2 * ix) * ny - (1 + 2 * iy) * nx;
        if t == 0 {
            // Exact corner crossing.
            let side_a = CellIndex::new((x + sx) as i32, y as i32);
            let side_b = CellIndex::new(x as i32, (y + sy) as i32);
            if !grid.is_walkable(side_a) && !grid.is_walkable(side_b) {
                return false;
            }
            x += sx;
            y += sy;
            ix += 1;
            iy += 1;
        } else if t < 0 {
            x += sx;
            ix += 1;
        } else {
            y += sy;
            iy += 1;
        }
        if !grid.is_walkable(CellIndex::new(x as i32, y as i32)) {
            return false;
        }
    }

    true
}
