use nav_core::{AgentId, CellIndex, NavError, Rect, Vec2};
use nav_grid::NavMap;

fn map_10x10() -> NavMap {
    NavMap::new(10.0, 10.0, 1.0, 0)
}

#[test]
fn static_bits_match_obstacle_union() {
    let mut map = map_10x10();
    let a = map.add_static(Rect::new(2.0, 2.0, 3.0, 1.0)).unwrap();
    let b = map.add_static(Rect::new(4.0, 2.0, 2.0, 2.0)).unwrap();

    // Union covers x 2..=5 at y 2 and x 4..=5 at y 3.
    for x in 2..=5 {
        assert!(!map.grid().is_walkable(CellIndex::new(x, 2)));
    }
    assert!(!map.grid().is_walkable(CellIndex::new(4, 3)));
    assert!(map.grid().is_walkable(CellIndex::new(3, 3)));

    // Removing one record keeps cells covered by the other blocked.
    map.remove_static(a).unwrap();
    assert!(map.grid().is_walkable(CellIndex::new(2, 2)));
    assert!(!map.grid().is_walkable(CellIndex::new(4, 2)));

    map.remove_static(b).unwrap();
    for x in 2..=5 {
        assert!(map.grid().is_walkable(CellIndex::new(x, 2)));
    }
}

#[test]
fn boundary_aligned_rect_blocks_only_interior_cells() {
    let mut map = map_10x10();
    map.add_static(Rect::new(4.0, 0.0, 1.0, 7.0)).unwrap();

    assert!(map.grid().is_walkable(CellIndex::new(3, 0)));
    assert!(!map.grid().is_walkable(CellIndex::new(4, 0)));
    assert!(!map.grid().is_walkable(CellIndex::new(4, 6)));
    assert!(map.grid().is_walkable(CellIndex::new(4, 7)));
    assert!(map.grid().is_walkable(CellIndex::new(5, 0)));
}

#[test]
fn sub_cell_rect_blocks_the_cell_it_overlaps() {
    let mut map = map_10x10();
    map.add_static(Rect::new(3.25, 3.25, 0.5, 0.5)).unwrap();
    assert!(!map.grid().is_walkable(CellIndex::new(3, 3)));
    assert!(map.grid().is_walkable(CellIndex::new(4, 3)));
}

#[test]
fn zero_area_rect_is_rejected() {
    let mut map = map_10x10();
    assert_eq!(
        map.add_static(Rect::new(1.0, 1.0, 0.0, 4.0)),
        Err(NavError::InvalidObstacle)
    );
    assert_eq!(map.epoch(), 0);
}

#[test]
fn epoch_increases_only_when_bits_flip() {
    let mut map = map_10x10();
    assert_eq!(map.epoch(), 0);

    let a = map.add_static(Rect::new(2.0, 2.0, 2.0, 2.0)).unwrap();
    assert_eq!(map.epoch(), 1);

    // Fully inside the first rect: no bit flips, epoch unchanged.
    let b = map.add_static(Rect::new(2.0, 2.0, 1.0, 1.0)).unwrap();
    assert_eq!(map.epoch(), 1);

    map.remove_static(b).unwrap();
    assert_eq!(map.epoch(), 1);

    map.remove_static(a).unwrap();
    assert_eq!(map.epoch(), 2);
}

#[test]
fn add_then_remove_restores_prior_state() {
    let mut map = map_10x10();
    let before = map.epoch();
    let id = map.add_static(Rect::new(0.0, 0.0, 10.0, 1.0)).unwrap();
    map.remove_static(id).unwrap();

    for x in 0..10 {
        assert!(map.grid().is_walkable(CellIndex::new(x, 0)));
    }
    assert!(map.epoch() > before);
}

#[test]
fn removing_unknown_ids_fails_and_leaves_state_unchanged() {
    let mut map = map_10x10();
    let id = map.add_static(Rect::new(1.0, 1.0, 1.0, 1.0)).unwrap();
    map.remove_static(id).unwrap();

    assert_eq!(map.remove_static(id), Err(NavError::UnknownObstacle));
    assert_eq!(map.remove_dynamic(AgentId(7)), Err(NavError::UnknownObstacle));
    assert_eq!(map.epoch(), 2);
}

#[test]
fn dynamic_obstacles_track_their_cell() {
    let mut map = NavMap::new(10.0, 10.0, 1.0, 10);
    let id = AgentId(1);

    map.set_dynamic(id, Vec2::new(2.5, 2.5), 0.4);
    assert!(map.grid().is_dynamic_blocked(CellIndex::new(2, 2)));
    assert_eq!(map.grid().dynamic_weight(CellIndex::new(2, 2)), 10);
    // Dynamic occupancy never affects planning walkability.
    assert!(map.grid().is_walkable(CellIndex::new(2, 2)));

    map.set_dynamic(id, Vec2::new(5.5, 2.5), 0.4);
    assert!(!map.grid().is_dynamic_blocked(CellIndex::new(2, 2)));
    assert!(map.grid().is_dynamic_blocked(CellIndex::new(5, 2)));

    map.remove_dynamic(id).unwrap();
    assert!(!map.grid().is_dynamic_blocked(CellIndex::new(5, 2)));
}

#[test]
fn stacked_dynamic_obstacles_keep_the_cell_marked() {
    let mut map = NavMap::new(10.0, 10.0, 1.0, 5);
    map.set_dynamic(AgentId(1), Vec2::new(3.5, 3.5), 0.4);
    map.set_dynamic(AgentId(2), Vec2::new(3.5, 3.5), 0.4);

    map.remove_dynamic(AgentId(1)).unwrap();
    assert!(map.grid().is_dynamic_blocked(CellIndex::new(3, 3)));

    map.remove_dynamic(AgentId(2)).unwrap();
    assert!(!map.grid().is_dynamic_blocked(CellIndex::new(3, 3)));
}

#[test]
fn dynamic_mutations_never_bump_the_epoch() {
    let mut map = map_10x10();
    map.set_dynamic(AgentId(1), Vec2::new(1.5, 1.5), 0.4);
    map.set_dynamic(AgentId(1), Vec2::new(7.5, 7.5), 0.4);
    map.remove_dynamic(AgentId(1)).unwrap();
    assert_eq!(map.epoch(), 0);
}

#[test]
fn snapshot_reflects_both_bit_planes() {
    let mut map = map_10x10();
    map.add_static(Rect::new(4.0, 4.0, 1.0, 1.0)).unwrap();
    map.set_dynamic(AgentId(9), Vec2::new(6.5, 6.5), 0.4);

    let snapshot = map.snapshot();
    assert_eq!(snapshot.cols(), 10);
    assert_eq!(snapshot.rows(), 10);
    assert!(snapshot.static_blocked(CellIndex::new(4, 4)));
    assert!(!snapshot.static_blocked(CellIndex::new(6, 6)));
    assert!(snapshot.dynamic_blocked(CellIndex::new(6, 6)));
}
