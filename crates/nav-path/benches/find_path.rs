use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nav_core::{Rect, Vec2};
use nav_path::{NavOptions, Pathfinder};

/// 64x64 world with staggered walls forcing a serpentine route.
fn build_maze() -> Pathfinder {
    let mut nav = Pathfinder::new(64.0, 64.0, 1.0, NavOptions::default());
    for i in 0..7 {
        let x = (i * 8 + 4) as f32;
        if i % 2 == 0 {
            nav.add_static(Rect::new(x, 0.0, 1.0, 56.0)).unwrap();
        } else {
            nav.add_static(Rect::new(x, 8.0, 1.0, 56.0)).unwrap();
        }
    }
    nav
}

fn bench_find_path(c: &mut Criterion) {
    let start = Vec2::new(0.5, 0.5);
    let goal = Vec2::new(63.5, 63.5);

    let mut group = c.benchmark_group("nav-path/find_path");

    group.bench_function("64x64_serpentine_cold", |b| {
        let mut nav = build_maze();
        b.iter(|| {
            nav.clear_cache();
            let result = nav
                .find_path_with(start, goal, Some(16_384), None)
                .unwrap();
            black_box(result.nodes_expanded);
        })
    });

    group.bench_function("64x64_serpentine_cached", |b| {
        let mut nav = build_maze();
        nav.find_path_with(start, goal, Some(16_384), None).unwrap();
        b.iter(|| {
            let result = nav
                .find_path_with(start, goal, Some(16_384), None)
                .unwrap();
            black_box(result.cache_hit);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_find_path);
criterion_main!(benches);
