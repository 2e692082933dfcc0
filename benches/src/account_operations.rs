use std::hint::black_box;

use bank::prelude::*;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

fn account<A: AmountType>(number: AccountNumber, balance: A) -> Account<A> {
    Account::new(
        Customer::new("Jacob", "1234 Main St", "123-456-7890"),
        number,
        balance,
    )
}

/// Benchmark deposit throughput for both amount representations
fn bench_deposit(c: &mut Criterion) {
    let mut group = c.benchmark_group("deposit");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("f64", count), &count, |b, &count| {
            b.iter_batched(
                || account(1, 0.0),
                |mut acc| {
                    for _ in 0..count {
                        black_box(acc.deposit(black_box(1.25)).ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("fixed_point", count),
            &count,
            |b, &count| {
                b.iter_batched(
                    || account(1, FixedPoint::zero()),
                    |mut acc| {
                        for _ in 0..count {
                            black_box(acc.deposit(black_box(FixedPoint::from_raw(12_500))).ok());
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark withdrawals, half of which overdraw and are rejected
fn bench_withdraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("withdraw");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || account(1, count as f64 / 2.0),
                |mut acc| {
                    for _ in 0..count {
                        black_box(acc.withdraw(black_box(1.0)).ok());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Compare the plain and atomic transfer paths
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    group.bench_function("plain", |b| {
        b.iter_batched(
            || (account(1, 1_000_000.0), account(2, 0.0)),
            |(mut source, mut target)| {
                for _ in 0..1_000 {
                    black_box(source.transfer(&mut target, black_box(50.0)).ok());
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("atomic", |b| {
        b.iter_batched(
            || (account(1, 1_000_000.0), account(2, 0.0)),
            |(mut source, mut target)| {
                for _ in 0..1_000 {
                    black_box(source.transfer_atomic(&mut target, black_box(50.0)).ok());
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_statement(c: &mut Criterion) {
    let acc = account(1001, 123_456.78);

    c.bench_function("statement", |b| b.iter(|| black_box(statement(&acc))));
}

criterion_group!(
    benches,
    bench_deposit,
    bench_withdraw,
    bench_transfer,
    bench_statement
);
criterion_main!(benches);
