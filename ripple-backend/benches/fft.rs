use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use ripple_backend::{
    RefFft,
    hal::{
        api::{BufferAlloc, BufferWrite, PlanNew, TransformEnqueue},
        layouts::{Complex32, Direction, EngineGuard, Plan},
    },
    implementation::reference::{RefContext, RefQueue},
};

pub fn bench_reference_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_fft");

    let _guard: EngineGuard<RefFft> = EngineGuard::acquire().unwrap();
    let context: RefContext = RefContext::new();
    let queue: RefQueue = RefQueue::new(context);

    for log_n in [6u32, 8, 10, 12] {
        let n: u64 = 1 << log_n;
        let plan: Plan<RefFft> = Plan::new(&context, &[n]).unwrap();

        let input = RefFft::buffer_alloc(n as usize).unwrap();
        let output = RefFft::buffer_alloc(n as usize).unwrap();
        let data: Vec<Complex32> = (0..n)
            .map(|i| Complex32::new(i as f32 / n as f32, 0.0))
            .collect();
        RefFft::buffer_write(&input, &data).unwrap();

        let id: BenchmarkId = BenchmarkId::from_parameter(format!("n: {n}"));
        group.bench_with_input(id, &(), |b, _| {
            b.iter(|| {
                plan.enqueue_transform(
                    Direction::Forward,
                    std::slice::from_ref(&queue),
                    &input,
                    &output,
                )
                .unwrap();
                black_box(());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reference_transform);
criterion_main!(benches);
