use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use shape_canvas::{Projection, RangeSlider, RecordingSurface, SliderConfig};
use std::hint::black_box;

fn build_world_points(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let x = ((i % 100) as f32 - 50.0) * 0.1;
            let y = (((i * 7) % 100) as f32 - 50.0) * 0.1;
            Vec3::new(x, y, -10.0 - (i % 20) as f32)
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for &point_count in &[1_024usize, 16_384usize] {
        let points = build_world_points(point_count);
        let projection = Projection::default();

        group.bench_with_input(
            BenchmarkId::new("world_to_screen_batch", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for point in points {
                        let screen = projection.world_to_screen(black_box(*point));
                        acc += screen.x + screen.y;
                    }
                    black_box(acc)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("round_trip_batch", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for point in points {
                        let back = projection
                            .screen_to_world(projection.world_to_screen(black_box(*point)));
                        acc += back.x + back.y;
                    }
                    black_box(acc)
                })
            },
        );
    }

    group.finish();
}

fn bench_slider_drag_sweep(c: &mut Criterion) {
    c.bench_function("slider_drag_sweep", |b| {
        let mut slider = RangeSlider::new(Vec2::new(416.0, 64.0), SliderConfig::default());
        let y = slider.handle_screen_y();
        let start = Vec2::new(slider.handle_screen_x(slider.current()), y);

        b.iter(|| {
            slider.on_pointer_down(black_box(start));
            for x in 0..420 {
                slider.on_pointer_move(Vec2::new(x as f32, y));
            }
            slider.on_pointer_up(Vec2::new(419.0, y));
            black_box(slider.current())
        })
    });
}

fn bench_slider_paint(c: &mut Criterion) {
    c.bench_function("slider_paint_recording", |b| {
        let slider = RangeSlider::new(Vec2::new(416.0, 64.0), SliderConfig::default());
        let mut surface = RecordingSurface::new();

        b.iter(|| {
            surface.reset();
            slider.paint(black_box(&mut surface));
            black_box(surface.ops().len())
        })
    });
}

criterion_group!(
    core_benches,
    bench_projection,
    bench_slider_drag_sweep,
    bench_slider_paint
);
criterion_main!(core_benches);
