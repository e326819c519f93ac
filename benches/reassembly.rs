//! Criterion benchmarks for calldata parsing and channel reassembly.
//!
//! Covers splitting calldata into frames and folding channel buckets that
//! arrive in order, in reverse and with every frame duplicated.

use channel_reassembler::{
    Frame,
    FrameNumber,
    FrameWithMetadata,
    frame::{encode_calldata, parse_frames},
    reassemble_channel,
    reassemble_frames,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box};
use reassembler_testing::{channel, sequence};

const CHANNEL_LENGTHS: [u16; 3] = [16, 256, 4096];

fn in_order(len: u16) -> Vec<(u16, bool)> { (0..len).map(|n| (n, n + 1 == len)).collect() }

fn reversed(len: u16) -> Vec<(u16, bool)> {
    let mut layout = in_order(len);
    layout.reverse();
    layout
}

fn duplicated(len: u16) -> Vec<(u16, bool)> {
    in_order(len).into_iter().flat_map(|entry| [entry, entry]).collect()
}

fn benchmark_channel_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("reassembly/channel");
    let layouts: [(&str, fn(u16) -> Vec<(u16, bool)>); 3] = [
        ("in_order", in_order),
        ("reversed", reversed),
        ("duplicated", duplicated),
    ];

    for len in CHANNEL_LENGTHS {
        for (label, layout) in layouts {
            let bucket = sequence(channel(1), &layout(len));
            group.throughput(Throughput::Elements(bucket.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(label, len),
                &bucket,
                |b, bucket: &Vec<FrameWithMetadata>| {
                    b.iter(|| black_box(reassemble_channel(channel(1), bucket.clone())));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_interleaved_channels(c: &mut Criterion) {
    let mut group = c.benchmark_group("reassembly/interleaved");

    for channels in [4_u8, 32] {
        let frames: Vec<_> = (0..256_u16)
            .flat_map(|n| {
                (0..channels).map(move |id| {
                    let (block, index) = (u64::from(n), u64::from(id));
                    reassembler_testing::frame(channel(id), block, index, n, n == 255)
                })
            })
            .collect();
        group.throughput(Throughput::Elements(frames.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(channels), &frames, |b, frames| {
            b.iter(|| black_box(reassemble_frames(frames.clone())));
        });
    }

    group.finish();
}

fn benchmark_parse_calldata(c: &mut Criterion) {
    let mut group = c.benchmark_group("reassembly/parse_calldata");

    for payload_len in [64_usize, 4096, 120_000] {
        let frames: Vec<_> = (0..4_u16)
            .map(|n| {
                Frame::new(channel(7), FrameNumber::new(n), vec![0xab; payload_len], n == 3)
            })
            .collect();
        let calldata = match encode_calldata(&frames) {
            Ok(calldata) => calldata,
            Err(err) => panic!("calldata benchmark setup failed: {err}"),
        };
        group.throughput(Throughput::Bytes(calldata.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(payload_len),
            &calldata,
            |b, calldata| {
                b.iter(|| black_box(parse_frames(calldata)));
            },
        );
    }

    group.finish();
}

/// Entrypoint for reassembly benchmarks.
fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    benchmark_channel_fold(&mut criterion);
    benchmark_interleaved_channels(&mut criterion);
    benchmark_parse_calldata(&mut criterion);
    criterion.final_summary();
}
