//! Benchmarks for the settle dynamics filter.

use criterion::{criterion_group, criterion_main, Criterion};
use settle::*;

fn bench_filter_update(c: &mut Criterion) {
    c.bench_function("second_order_vec3_1000_steps", |b| {
        b.iter(|| {
            let mut filter: SecondOrder<Vec3<f32>> =
                SecondOrder::new(Tuning::new(2.0, 0.8, 0.5), Vec3::new(0.0, 0.0, 0.0));
            let target = Vec3::new(10.0, 5.0, -3.0);
            for _ in 0..1000 {
                filter.update(1.0 / 60.0, target);
            }
            filter.value()
        });
    });
}

fn bench_driver_tick(c: &mut Criterion) {
    c.bench_function("transform_driver_all_channels_120_ticks", |b| {
        let config = DriverConfig::new()
            .with_position(Tuning::new(2.0, 1.0, 0.0))
            .with_rotation(Tuning::new(3.0, 0.7, 0.0))
            .with_scale(Tuning::new(1.0, 1.0, 0.0));
        b.iter(|| {
            let mut driver: TransformDriver<f32> =
                TransformDriver::new(config, Transform::identity());
            let mut target = Transform::identity();
            target.position = Vec3::new(1.0, 2.0, 3.0);
            target.rotation = Vec4::new(0.0, 0.0, 0.7071, 0.7071);
            target.scale = Vec3::splat(2.0);
            for _ in 0..120 {
                driver.tick(1.0 / 60.0, &target, false);
            }
            *driver.transform()
        });
    });
}

fn bench_step_response(c: &mut Criterion) {
    c.bench_function("step_response_full_curve", |b| {
        b.iter(|| {
            step_response::<f32>(Tuning::new(2.0, 0.5, 2.0))
                .map(|(_, v)| v)
                .sum::<f32>()
        });
    });
}

criterion_group!(
    benches,
    bench_filter_update,
    bench_driver_tick,
    bench_step_response
);
criterion_main!(benches);
