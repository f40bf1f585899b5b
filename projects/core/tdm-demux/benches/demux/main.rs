use core::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tdm_demux::allocate::ChannelBuffers;
use tdm_demux::verify::generate_source;
use tdm_demux::{DemuxVariant, DST_SIZE, NUM_TIMESLOTS, SRC_SIZE};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Demux 32 Timeslots (2048 -> 32x64)");

    let src = generate_source(SRC_SIZE).unwrap();
    let mut buffers = ChannelBuffers::<NUM_TIMESLOTS>::new(DST_SIZE).unwrap();
    let mut dst = buffers.as_mut_slices();
    group.throughput(Throughput::Bytes(SRC_SIZE as u64));

    for variant in DemuxVariant::all_values().iter() {
        let demux = variant.function();
        group.bench_with_input(
            BenchmarkId::new("demux", variant.name()),
            &src,
            |b, src| b.iter(|| demux(black_box(src.as_slice()), black_box(&mut dst))),
        );
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
