//! Performance benchmarks for manifest generation.
//!
//! Run with: `cargo bench --bench manifest`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lazy_manifest::{
    build_manifest, finalize, HookAnalysis, ManifestOptions, OutputChunk, EVENT_PRIORITY,
};

/// Synthetic build: `hook_count` hooks spread over `hook_count / 8 + 1` chunks.
fn make_build(hook_count: usize) -> (Vec<HookAnalysis>, Vec<OutputChunk>) {
    let chunk_count = hook_count / 8 + 1;
    let mut chunks: Vec<OutputChunk> = (0..chunk_count)
        .map(|i| {
            OutputChunk::new(format!("build/q-{i:04}.js"), 1024)
                .with_import(format!("build/q-{:04}.js", (i + 1) % chunk_count))
        })
        .collect();

    let hooks = (0..hook_count)
        .map(|i| {
            let hook = HookAnalysis::new(format!("s_{i}"), format!("h{i}_sym"), format!("{:016x}", i * 7919));
            let hook = if i % 3 == 0 {
                hook.event(format!("on{}$", EVENT_PRIORITY[i % EVENT_PRIORITY.len()]))
            } else {
                hook.function("component$")
            };
            chunks[i % chunk_count]
                .modules
                .insert(format!("src/{}", hook.build_file_path()), Default::default());
            hook
        })
        .collect();

    (hooks, chunks)
}

/// Benchmark the full pipeline.
fn bench_build_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_manifest");

    for hook_count in [10, 100, 1000] {
        let (hooks, chunks) = make_build(hook_count);

        group.throughput(Throughput::Elements(hook_count as u64));
        group.bench_with_input(
            BenchmarkId::new("hooks", hook_count),
            &(hooks, chunks),
            |b, (hooks, chunks)| {
                b.iter(|| {
                    build_manifest(
                        black_box(hooks),
                        vec![],
                        black_box(chunks),
                        ManifestOptions::default(),
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

/// Benchmark re-finalizing an already finalized manifest.
fn bench_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize");

    for hook_count in [100, 1000] {
        let (hooks, chunks) = make_build(hook_count);
        let manifest = build_manifest(&hooks, vec![], &chunks, ManifestOptions::default()).unwrap();

        group.throughput(Throughput::Elements(hook_count as u64));
        group.bench_with_input(BenchmarkId::new("hooks", hook_count), &manifest, |b, manifest| {
            b.iter(|| finalize(black_box(manifest.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_manifest, bench_finalize);
criterion_main!(benches);
