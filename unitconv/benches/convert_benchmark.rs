use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use unitconv::{convert, convert_quantity, ConversionTable, UnitKind, UnitValue};

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for entry in ConversionTable::entries() {
        let id = format!("{}->{}", entry.from, entry.to);
        let source = UnitValue::new(1234.5, entry.from).unwrap();
        group.bench_with_input(BenchmarkId::new("unit_value", id), &source, |b, source| {
            let mut destination = UnitValue::empty(entry.to);
            b.iter(|| {
                convert(black_box(source), black_box(&mut destination)).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_convert_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_quantity");

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let q = 1.0 + i as f64 * 0.5;
                black_box(convert_quantity(
                    black_box(q),
                    UnitKind::KilometersPerHour,
                    UnitKind::MetersPerSecond,
                ))
                .unwrap();
            }
        });
    });

    group.bench_function("incompatible", |b| {
        b.iter(|| black_box(convert_quantity(black_box(1.0), UnitKind::Meter, UnitKind::Hour)));
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_convert_quantity);
criterion_main!(benches);
