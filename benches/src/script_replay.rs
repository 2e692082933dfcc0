mod common;

use std::hint::black_box;

use bank::prelude::*;
use common::generate_script;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use futures::io::Cursor;
use tokio::runtime::Runtime;

/// Benchmark the full pipeline: CSV parsing, replay and statement output
fn bench_replay_script_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_script_sizes");
    let runtime = Runtime::new().expect("failed to build tokio runtime");

    for (size_name, num_accounts, num_operations) in [
        ("small_1k", 10, 1_000),
        ("medium_10k", 100, 10_000),
        ("large_100k", 1_000, 100_000),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &(num_accounts, num_operations),
            |b, &(num_accounts, num_operations)| {
                b.to_async(&runtime).iter_batched(
                    || generate_script(num_accounts, num_operations),
                    |script| async move {
                        let operations = CsvOperationStream::<f64>::new(Cursor::new(script));
                        let mut session = ReplaySession::new(ScriptProcessor::new(), SilentSkip);
                        session.process_stream(operations).await;

                        let mut output = Vec::new();
                        write_statements(session.processor().accounts(), &mut output)
                            .await
                            .expect("write to Vec cannot fail");
                        black_box(output);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

/// Compare amount representations on the same script
fn bench_replay_amount_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_amount_types");
    let runtime = Runtime::new().expect("failed to build tokio runtime");
    let script = generate_script(100, 10_000);

    group.bench_function("f64", |b| {
        b.to_async(&runtime).iter_batched(
            || script.clone(),
            |script| async move {
                let operations = CsvOperationStream::<f64>::new(Cursor::new(script));
                let mut session = ReplaySession::new(ScriptProcessor::new(), SilentSkip);
                black_box(session.process_stream(operations).await);
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("fixed_point", |b| {
        b.to_async(&runtime).iter_batched(
            || script.clone(),
            |script| async move {
                let operations = CsvOperationStream::<FixedPoint>::new(Cursor::new(script));
                let mut session = ReplaySession::new(ScriptProcessor::new(), SilentSkip);
                black_box(session.process_stream(operations).await);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_replay_script_sizes, bench_replay_amount_types);
criterion_main!(benches);
