//! Performance benchmarks for the payroll ledger.
//!
//! Covers the pure payroll calculation and the ledger queries behind the
//! reports, run against a seeded in-memory database.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_ledger::calculation::{PayrollInputs, SalaryCycle, calculate_payroll};
use payroll_ledger::config::SeedConfig;
use payroll_ledger::models::MonthRange;
use payroll_ledger::store::{PayrollDb, seed};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Creates a database holding the sample employees and five years of history.
fn create_seeded_db() -> PayrollDb {
    let db = PayrollDb::open_in_memory().expect("Failed to open database");
    db.initialize().expect("Failed to initialize schema");
    let seed_config = SeedConfig {
        enabled: true,
        start_month: date(2018, 1, 1),
        end_month: date(2023, 6, 1),
    };
    seed::bootstrap(&db, &seed_config, 28).expect("Failed to seed");
    db
}

/// Benchmark: One payroll calculation.
fn bench_single_calculation(c: &mut Criterion) {
    let inputs = PayrollInputs::new(Decimal::from(5000), Decimal::from(1000), Decimal::from(15), 2, 10)
        .expect("valid inputs");
    let cycle = SalaryCycle::new(30).expect("valid cycle");

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(calculate_payroll(black_box(&inputs), cycle).rounded()))
    });
}

/// Benchmark: Calculations for a batch of employees.
fn bench_batch_calculation(c: &mut Criterion) {
    let cycle = SalaryCycle::new(31).expect("valid cycle");
    let inputs: Vec<PayrollInputs> = (0..1000u32)
        .map(|i| {
            PayrollInputs::new(
                Decimal::from(4000 + i),
                Decimal::from(500 + i % 700),
                Decimal::from(10 + i % 11),
                i % 4,
                i % 21,
            )
            .expect("valid inputs")
        })
        .collect();

    let mut group = c.benchmark_group("batch_calculation");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let totals: Decimal = inputs
                .iter()
                .map(|i| calculate_payroll(i, cycle).rounded().gross_pay)
                .sum();
            black_box(totals)
        })
    });

    group.finish();
}

/// Benchmark: The three report queries over seeded history.
fn bench_ledger_queries(c: &mut Criterion) {
    let db = create_seeded_db();
    let mut group = c.benchmark_group("ledger_queries");

    group.bench_function("monthly_report", |b| {
        b.iter(|| black_box(db.monthly_report(black_box(3)).expect("query")))
    });

    for (label, range) in [
        ("one_year", MonthRange::new(date(2022, 1, 1), date(2022, 12, 31))),
        ("all_history", MonthRange::new(date(2018, 1, 1), date(2023, 12, 31))),
    ] {
        group.bench_with_input(BenchmarkId::new("summary_report", label), &range, |b, range| {
            b.iter(|| black_box(db.summary_report(7, *range).expect("query")))
        });
        group.bench_with_input(BenchmarkId::new("range_report", label), &range, |b, range| {
            b.iter(|| black_box(db.range_report(*range).expect("query")))
        });
    }

    group.finish();
}

/// Benchmark: Seeding a fresh database.
fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");
    group.sample_size(10);

    group.bench_function("seed_five_years", |b| b.iter(|| black_box(create_seeded_db())));

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_batch_calculation,
    bench_ledger_queries,
    bench_bootstrap,
);
criterion_main!(benches);
