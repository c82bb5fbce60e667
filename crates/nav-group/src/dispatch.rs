use core::f32::consts::SQRT_2;

use nav_core::{AgentId, CancelToken, NavError, PathResult, Vec2};
use nav_path::Pathfinder;

use crate::formation::{formation_slots, Formation};

/// One member of a group movement request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMember {
    pub id: AgentId,
    pub start: Vec2,
}

/// Plan one path per member so the group arrives in formation around `goal`
/// instead of stacking on a single cell.
///
/// Slots are assigned by a stable matching: members sorted by distance to
/// the group centroid, slots sorted by distance to the goal, paired in
/// order, with agent id breaking ties. Results come back in member order.
/// Member requests are independent; a blocked slot goes through the usual
/// goal substitution, and a cancelled token fails every not-yet-planned
/// member with `Cancelled`.
pub fn find_group_paths(
    nav: &mut Pathfinder,
    members: &[GroupMember],
    goal: Vec2,
    formation: Formation,
    spacing: Option<f32>,
    cancel: Option<&CancelToken>,
) -> Vec<Result<PathResult, NavError>> {
    if members.is_empty() {
        return Vec::new();
    }

    let centroid = members
        .iter()
        .fold(Vec2::ZERO, |acc, m| acc + m.start)
        / members.len() as f32;
    let travel_dir = (goal - centroid).normalized_or(Vec2::new(1.0, 0.0));

    // Distinct slots must land on distinct goal cells. Box slots are
    // axis-aligned, so one cell of spacing separates neighbors by a full
    // cell on an axis. Line and wedge slots rotate with the travel
    // direction, and a diagonal direction projects neighbor separation
    // onto each axis at spacing / sqrt(2), so rotated layouts need the
    // extra factor.
    let cell = nav.map().grid().cell_size();
    let axis_aligned = travel_dir.x == 0.0 || travel_dir.y == 0.0;
    let min_spacing = match formation {
        Formation::Box => cell,
        Formation::Line | Formation::Wedge if axis_aligned => cell,
        Formation::Line | Formation::Wedge => cell * SQRT_2,
    };
    let spacing = spacing.unwrap_or(min_spacing).max(min_spacing);

    let slots = formation_slots(formation, goal, travel_dir, spacing, members.len());

    let mut member_order: Vec<usize> = (0..members.len()).collect();
    member_order.sort_by(|&a, &b| {
        let da = members[a].start.distance(centroid);
        let db = members[b].start.distance(centroid);
        da.total_cmp(&db).then_with(|| members[a].id.cmp(&members[b].id))
    });

    let mut slot_order: Vec<usize> = (0..slots.len()).collect();
    slot_order.sort_by(|&a, &b| {
        slots[a]
            .distance(goal)
            .total_cmp(&slots[b].distance(goal))
            .then_with(|| a.cmp(&b))
    });

    let mut assigned = vec![Vec2::ZERO; members.len()];
    for (&member_idx, &slot_idx) in member_order.iter().zip(slot_order.iter()) {
        assigned[member_idx] = slots[slot_idx];
    }

    members
        .iter()
        .zip(assigned)
        .map(|(member, slot)| nav.find_path_with(member.start, slot, None, cancel))
        .collect()
}
