use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ricochet::{
    kilograms, meters, seconds, Body, ContactBehavior, ContactTable, Entity, EntityKind,
    Position, Reaction, Velocity, World,
};
use std::hint::black_box;

const DT: f32 = 1.0 / 60.0;

fn bouncy_table() -> ContactTable {
    ContactTable::new().with(
        EntityKind::Character,
        ContactBehavior::colliding(vec![Reaction::Bounce]),
    )
}

fn prepare_world(body_count: usize) -> World {
    let mut world = World::new();
    for i in 0..body_count {
        // A grid of drifting spheres with neighbors on collision courses, so
        // ticks include real substeps and not just the pair scan.
        let row = (i / 16) as f32;
        let column = (i % 16) as f32;
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        world.add(
            Entity::new(
                EntityKind::Character,
                Body::builder()
                    .sphere(meters(0.4))
                    .at(Position::new(column * 0.83, 10.0, row * 2.0))
                    .velocity(Velocity::new(direction, 0.0, 0.0))
                    .mass(kilograms(1.0))
                    .build()
                    .unwrap(),
            )
            .with_contacts(bouncy_table()),
        );
    }
    world
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_advance");
    for &count in &[32usize, 128, 512] {
        group.bench_with_input(BenchmarkId::new("tick", count), &count, |b, &count| {
            b.iter(|| {
                let mut world = prepare_world(count);
                black_box(world.advance(seconds(black_box(DT))));
            })
        });
    }
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrowphase");

    let moving = Body::builder()
        .sphere(meters(0.5))
        .velocity(Velocity::new(1.0, 0.0, 0.0))
        .build()
        .unwrap();
    let target = Body::builder()
        .sphere(meters(0.5))
        .at(Position::new(100.0, 0.0, 0.0))
        .build()
        .unwrap();
    group.bench_function("sphere_sphere_sweep", |b| {
        b.iter(|| black_box(ricochet::collision::detect(&moving, &target, seconds(DT))))
    });

    let wall = Body::builder()
        .at(Position::new(-50.0, -50.0, 5.0))
        .parallelogram(
            Position::new(-50.0, -50.0, 5.0),
            Position::new(-50.0, 50.0, 5.0),
            Position::new(50.0, 50.0, 5.0),
        )
        .build()
        .unwrap();
    let ball = Body::builder()
        .sphere(meters(0.5))
        .velocity(Velocity::new(0.0, 0.0, 120.0))
        .build()
        .unwrap();
    group.bench_function("sphere_triangle_sweep", |b| {
        b.iter(|| black_box(ricochet::collision::detect(&ball, &wall, seconds(DT))))
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_detect);
criterion_main!(benches);
