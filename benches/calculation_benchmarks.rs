//! Performance benchmarks for the Attendance Calculator.
//!
//! Covers a single computation, a full calculation record with its audit
//! trace, batches of records, and a scripted shell session.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_calculator::calculation::{calculate, compute};
use attendance_calculator::config::ConfigLoader;
use attendance_calculator::models::{AttendanceInput, DesiredPercentage, STANDARD_THRESHOLDS};
use attendance_calculator::shell::Session;

/// Builds a spread of records covering every standard threshold.
fn create_inputs(count: usize) -> Vec<AttendanceInput> {
    (0..count)
        .map(|i| {
            let total = 10 + (i as i64 % 190);
            let attended = (i as i64 * 7) % (total + 1);
            let desired = STANDARD_THRESHOLDS[i % STANDARD_THRESHOLDS.len()];
            AttendanceInput::new(
                total,
                attended,
                DesiredPercentage::new(desired).expect("standard threshold"),
            )
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let p = DesiredPercentage::default();
    let above = AttendanceInput::new(30, 25, p);
    let below = AttendanceInput::new(30, 15, p);

    let mut group = c.benchmark_group("compute");
    group.bench_function("above_threshold", |b| b.iter(|| compute(black_box(&above))));
    group.bench_function("below_threshold", |b| b.iter(|| compute(black_box(&below))));
    group.finish();
}

fn bench_calculate_record(c: &mut Criterion) {
    let input = AttendanceInput::new(30, 25, DesiredPercentage::default());

    c.bench_function("calculate_record", |b| {
        b.iter(|| calculate(black_box(&input)))
    });
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_processing");

    for size in [100usize, 1000] {
        let inputs = create_inputs(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("records", size), &inputs, |b, inputs| {
            b.iter(|| {
                let records: Vec<_> = inputs.iter().map(calculate).collect();
                black_box(records)
            })
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let script = "total 30\nattended 25\ncalculate\ntarget 90\ncalculate\nshow\nreset\nquit\n";

    c.bench_function("scripted_session", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            Session::new(ConfigLoader::default())
                .run(Cursor::new(black_box(script)), &mut output)
                .expect("session output");
            black_box(output)
        })
    });
}

criterion_group!(
    benches,
    bench_compute,
    bench_calculate_record,
    bench_batches,
    bench_session,
);
criterion_main!(benches);
