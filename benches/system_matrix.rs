use abcd_optics::{
    components::{FreeSpace, ThickLens, ThinLens},
    OpticalSystem, RayState,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn relay_system(stages: usize) -> OpticalSystem {
    let mut system = OpticalSystem::new("relay");
    for _ in 0..stages {
        system.add(FreeSpace::new(10.0).unwrap());
        system.add(ThinLens::new(5.0).unwrap());
        system.add(FreeSpace::new(10.0).unwrap());
        system.add(ThickLens::new(20.0, -20.0, 2.0, 1.0, 1.5).unwrap());
    }
    system
}

fn criterion_system_matrix(c: &mut Criterion) {
    let system = relay_system(250);
    let ray = RayState::new(1.0, 0.01).unwrap();
    c.bench_function("build_matrix", |b| b.iter(|| system.build_matrix()));
    c.bench_function("propagate", |b| b.iter(|| system.propagate(&ray)));
}

criterion_group!(benches, criterion_system_matrix);
criterion_main!(benches);
