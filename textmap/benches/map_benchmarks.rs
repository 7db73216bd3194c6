use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use textmap::StringMap;

fn filled_map(len: usize) -> StringMap {
    let mut map = StringMap::new().unwrap();
    for i in 0..len {
        map.put(&format!("key-{i}"), &format!("value-{i}")).unwrap();
    }
    map
}

fn benchmark_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_map_put");

    for len in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("fresh_keys", len), &len, |b, &len| {
            b.iter(|| black_box(filled_map(len)));
        });
    }

    group.bench_function("overwrite_existing", |b| {
        let mut map = filled_map(100);
        b.iter(|| map.put(black_box("key-50"), black_box("replacement")).unwrap());
    });

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_map_lookup");

    for len in [10usize, 100, 1000] {
        let map = filled_map(len);
        let last = format!("key-{}", len - 1);
        group.bench_with_input(BenchmarkId::new("last_key", len), &last, |b, key| {
            b.iter(|| black_box(map.get(black_box(key))));
        });
        group.bench_with_input(BenchmarkId::new("missing_key", len), &len, |b, _| {
            b.iter(|| black_box(map.contains(black_box("absent"))));
        });
    }

    group.finish();
}

fn benchmark_copy(c: &mut Criterion) {
    let map = filled_map(100);
    c.bench_function("string_map_try_clone_100", |b| {
        b.iter(|| black_box(map.try_clone().unwrap()));
    });
}

criterion_group!(benches, benchmark_put, benchmark_lookup, benchmark_copy);
criterion_main!(benches);
