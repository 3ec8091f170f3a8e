use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flight_viewer::flight::{Airplane, Direction, Directions, Orientation};
use flight_viewer::frame::FrameInfo;
use flight_viewer::scene::SceneLayout;
use glam::Vec3;

/// Benchmark: Orientation rebuild for a single step
fn bench_orientation_update(c: &mut Criterion) {
    let orientation = Orientation::identity(Vec3::ZERO);
    let previous = Vec3::new(1.0, 2.0, 3.0);
    let position = Vec3::new(1.1, 2.05, 3.02);

    c.bench_function("orientation_update", |b| {
        b.iter(|| black_box(orientation.update(black_box(position), black_box(previous))))
    });
}

/// Benchmark: Stationary step falling back to the cached direction
fn bench_orientation_degenerate(c: &mut Criterion) {
    let orientation = Orientation::identity(Vec3::ZERO);
    let position = Vec3::new(1.0, 2.0, 3.0);

    c.bench_function("orientation_update_stationary", |b| {
        b.iter(|| black_box(orientation.update(black_box(position), black_box(position))))
    });
}

/// Benchmark: One second of scripted frames at various frame rates
fn bench_scripted_flight(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripted_flight");

    for fps in [30u64, 60, 144].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(fps), fps, |b, &fps| {
            let dt = 1.0 / fps as f32;
            let idle = Directions::default();
            b.iter(|| {
                let mut airplane = Airplane::default();
                for i in 0..fps {
                    let frame = FrameInfo::new(i, i as f32 * dt, dt);
                    airplane.update(black_box(&frame), &idle);
                }
                black_box(airplane.model_matrix())
            })
        });
    }

    group.finish();
}

/// Benchmark: Manual flight with every direction held
fn bench_manual_flight(c: &mut Criterion) {
    let mut held = Directions::only(Direction::Forward);
    held.set(Direction::Left, true);
    held.set(Direction::Up, true);

    c.bench_function("manual_flight_step", |b| {
        let mut airplane = Airplane::default();
        airplane.enter_manual();
        b.iter(|| {
            airplane.process_directional_input(black_box(&held), 0.016);
            black_box(airplane.tail_anchor())
        })
    });
}

/// Benchmark: Building the per-frame draw list
fn bench_draw_list(c: &mut Criterion) {
    let scene = SceneLayout::default();
    let airplane = Airplane::default();

    c.bench_function("scene_draw_list", |b| {
        b.iter(|| black_box(scene.draw_list(black_box(&airplane))))
    });
}

criterion_group!(
    benches,
    bench_orientation_update,
    bench_orientation_degenerate,
    bench_scripted_flight,
    bench_manual_flight,
    bench_draw_list
);
criterion_main!(benches);
