use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dslfmt::{format, format_value, to_value, DslMap, Value};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn benchmark_scalar(c: &mut Criterion) {
    c.bench_function("format_scalar", |b| {
        b.iter(|| format(black_box(&42), black_box("basic /end:\"!\"")))
    });

    c.bench_function("format_scalar_with_spec", |b| {
        b.iter(|| format(black_box(&255), black_box("basic /tostring:X4 /end:\"h\"")))
    });
}

fn benchmark_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_sequence");

    for size in [10, 50, 100, 500].iter() {
        let numbers: Vec<i32> = (0..*size).collect();
        let value = to_value(&numbers).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                format_value(
                    black_box(&value),
                    black_box("fe /end:\", \" /exclude-last-end:true"),
                )
            })
        });
    }
    group.finish();
}

fn benchmark_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_mapping");

    for size in [10, 50, 100, 500].iter() {
        let mut map = DslMap::with_capacity(*size);
        for i in 0..*size {
            map.insert(format!("key{i}"), Value::from(i as i64));
        }
        let value = Value::Object(map);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                format_value(
                    black_box(&value),
                    black_box("fe /dict-format:\"{0}={1}\" /end:\"; \" /exclude-last-end:true"),
                )
            })
        });
    }
    group.finish();
}

fn benchmark_serialization_path(c: &mut Criterion) {
    let users: Vec<User> = (0..100)
        .map(|i| User {
            id: i,
            name: format!("User {i}"),
            email: format!("user{i}@example.com"),
            active: i % 2 == 0,
        })
        .collect();

    c.bench_function("to_value_100_structs", |b| {
        b.iter(|| to_value(black_box(&users)))
    });
}

fn benchmark_parameter_extraction(c: &mut Criterion) {
    let instruction =
        "fe /end:\", \" /tostring:D4 /exclude-last-end:true /final-pair-separator:\" and \"";

    c.bench_function("extract_parameter", |b| {
        b.iter(|| dslfmt::params::extract(black_box(instruction), black_box("/end:")))
    });
}

criterion_group!(
    benches,
    benchmark_scalar,
    benchmark_sequence,
    benchmark_mapping,
    benchmark_serialization_path,
    benchmark_parameter_extraction
);
criterion_main!(benches);
