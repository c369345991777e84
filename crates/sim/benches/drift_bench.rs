use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genedrift_sim::analysis::FrequencyHistogram;
use genedrift_sim::simulation::{
    MultiRunSession, PopulationModel, ResamplingMethod, RunParameters,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_advance");

    for &size in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(2 * size as u64));
        for method in [ResamplingMethod::Bernoulli, ResamplingMethod::Binomial] {
            group.bench_with_input(
                BenchmarkId::new(format!("{method:?}"), size),
                &size,
                |b, &size| {
                    b.iter_batched(
                        || {
                            (
                                PopulationModel::with_method(0.5, size, method),
                                Xoshiro256PlusPlus::seed_from_u64(42),
                            )
                        },
                        |(mut pop, mut rng)| {
                            pop.advance(black_box(1), &mut rng);
                            black_box(pop)
                        },
                        criterion::BatchSize::SmallInput,
                    )
                },
            );
        }
    }

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    let samples: Vec<f64> = (0..1_000).map(|i| i as f64 / 999.0).collect();
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("add_data_1000", |b| {
        b.iter(|| {
            let mut hist = FrequencyHistogram::allele_frequency();
            for &x in &samples {
                hist.add_data(black_box(x));
            }
            black_box(hist)
        })
    });

    group.finish();
}

fn bench_multi_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_run");
    group.sample_size(20);
    let params = RunParameters::new(0.5, 100, 50).unwrap();

    group.bench_function("serial_batch_100", |b| {
        b.iter(|| {
            let mut session = MultiRunSession::new(Some(42), ResamplingMethod::Bernoulli);
            session.start(&params);
            black_box(session.run_batch())
        })
    });

    group.bench_function("parallel_batch_100", |b| {
        b.iter(|| {
            let mut session = MultiRunSession::new(Some(42), ResamplingMethod::Bernoulli);
            black_box(session.run_parallel(&params, 100))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_histogram, bench_multi_run);
criterion_main!(benches);
