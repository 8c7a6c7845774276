use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::{thread_rng, Rng};

use attractors::prelude::*;

fn random_world(particles: usize, attractors: usize) -> World {
    let mut rng = thread_rng();
    let mut world = World::new();

    for _ in 0..attractors {
        let position = Vector2::new(rng.gen_range(0.0..1600.0), rng.gen_range(0.0..900.0));
        world.spawn_attractor(position, rng.gen_range(0.1..10.0), rng.gen_bool(0.2));
    }

    for _ in 0..particles {
        let position = Vector2::new(rng.gen_range(0.0..1600.0), rng.gen_range(0.0..900.0));
        let velocity = world.random_velocity(&mut rng);
        world.spawn_particle(position, velocity, Appearance::default(), rng.gen_range(0.0..0.1));
    }

    world
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Attractors");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(50);

    for i in (4..=14).step_by(2).map(|i| 2_usize.pow(i)) {
        let world = random_world(i, 32);

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("World::par_tick", i), &world, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |world| world.par_tick(),
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("World::tick", i), &world, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |world| world.tick(),
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("World::forces", i), &world, |b, input| {
            b.iter(|| input.forces().collect::<Vec<_>>())
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
