use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use conutils::guid::v5::{create_v5_uuid, NAMESPACE_DNS};
use conutils::guid::{create_guid, Guid};
use conutils::hash;

fn v5_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("v5");
    for len in [0usize, 16, 64, 1024] {
        let name = vec![b'x'; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("create_v5_uuid", len), &name, |b, name| {
            b.iter(|| create_v5_uuid(black_box(&NAMESPACE_DNS), black_box(name)))
        });
        group.bench_with_input(BenchmarkId::new("sha1", len), &name, |b, name| {
            b.iter(|| hash::digest(black_box(name)))
        });
    }
    group.finish();
}

fn text_benchmark(c: &mut Criterion) {
    let guid = create_guid();
    let text = guid.to_string();
    c.bench_function("guid_to_string", |b| b.iter(|| black_box(&guid).to_string()));
    c.bench_function("guid_parse", |b| {
        b.iter(|| black_box(&text).parse::<Guid>())
    });
}

criterion_group!(benches, v5_benchmark, text_benchmark);
criterion_main!(benches);
