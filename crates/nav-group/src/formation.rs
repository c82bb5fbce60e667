use nav_core::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric arrangement of a group's per-member goals around the requested
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Formation {
    /// Square arrangement packing `ceil(sqrt(n)) x ceil(n / cols)` slots in
    /// row-major order, centered on the goal. Axis-aligned.
    Box,
    /// One row of `n` slots across the goal, perpendicular to the travel
    /// direction.
    Line,
    /// Triangular arrangement with the apex on the goal and rows widening
    /// behind it (opposite the travel direction).
    Wedge,
}

/// World positions of `n` formation slots around `goal`.
///
/// `travel_dir` must be a unit vector (the dispatcher derives it from
/// `goal - centroid(starts)`). Slot order is deterministic: row-major for
/// box, left-to-right for line, apex first then rows back-to-front for
/// wedge.
pub fn formation_slots(
    formation: Formation,
    goal: Vec2,
    travel_dir: Vec2,
    spacing: f32,
    n: usize,
) -> Vec<Vec2> {
    let mut slots = Vec::with_capacity(n);
    if n == 0 {
        return slots;
    }
    let perp = travel_dir.perp();

    match formation {
        Formation::Box => {
            let cols = (n as f32).sqrt().ceil() as usize;
            let rows = n.div_ceil(cols);
            let half_w = (cols - 1) as f32 / 2.0;
            let half_h = (rows - 1) as f32 / 2.0;
            for i in 0..n {
                let col = (i % cols) as f32;
                let row = (i / cols) as f32;
                slots.push(
                    goal + Vec2::new((col - half_w) * spacing, (row - half_h) * spacing),
                );
            }
        }
        Formation::Line => {
            let half = (n - 1) as f32 / 2.0;
            for i in 0..n {
                slots.push(goal + perp * ((i as f32 - half) * spacing));
            }
        }
        Formation::Wedge => {
            let mut row = 0usize;
            'rows: loop {
                let across = row as f32 / 2.0;
                for i in 0..=row {
                    if slots.len() == n {
                        break 'rows;
                    }
                    let lateral = (i as f32 - across) * spacing;
                    slots.push(goal - travel_dir * (row as f32 * spacing) + perp * lateral);
                }
                row += 1;
            }
        }
    }

    slots
}
