use nav::{find_group_paths, Formation, GroupMember};
use nav::{AgentId, NavOptions, Pathfinder, Rect, Vec2};

#[test]
fn umbrella_exposes_the_whole_planning_flow() {
    let mut pathfinder = Pathfinder::new(32.0, 32.0, 1.0, NavOptions::default());
    pathfinder.add_static(Rect::new(10.0, 0.0, 1.0, 24.0)).unwrap();

    let solo = pathfinder
        .find_path(Vec2::new(2.5, 2.5), Vec2::new(20.5, 2.5))
        .unwrap();
    assert!(solo.waypoints.len() >= 2);

    let members = vec![
        GroupMember {
            id: AgentId(1),
            start: Vec2::new(2.5, 2.5),
        },
        GroupMember {
            id: AgentId(2),
            start: Vec2::new(3.5, 2.5),
        },
    ];
    let group = find_group_paths(
        &mut pathfinder,
        &members,
        Vec2::new(20.5, 20.5),
        Formation::Line,
        None,
        None,
    );
    assert_eq!(group.len(), 2);
    assert!(group.iter().all(Result::is_ok));

    let snapshot = pathfinder.walkability_snapshot();
    assert_eq!(snapshot.cols(), 32);
    assert!(pathfinder.last_paths().count() >= 3);
}
