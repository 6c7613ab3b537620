use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stellar_dance::physics::integrator::SemiImplicitEuler;
use stellar_dance::physics::scenario;
use stellar_dance::physics::simulation::{self, TickContext};

fn bench_tick(c: &mut Criterion) {
    let ctx = TickContext::default();

    c.bench_function("tick_two_body", |b| {
        let mut system = scenario::two_body(None, ctx.time_speed, ctx.fps);
        b.iter(|| {
            let streams = simulation::step(black_box(&mut system), &ctx, &SemiImplicitEuler);
            black_box(streams);
        });
    });

    c.bench_function("tick_three_body", |b| {
        let mut system = scenario::three_body(None, ctx.time_speed, ctx.fps);
        b.iter(|| {
            let streams = simulation::step(black_box(&mut system), &ctx, &SemiImplicitEuler);
            black_box(streams);
        });
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
