//! Benchmarks for draft encoding and the decode fallback chain
//!
//! Run with: cargo bench codec

use typein::codec::{PersistenceCodec, StoredBlob};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// A blob like one left by a long writing session: `snapshots` history
/// entries, each one line longer than the last
fn make_blob(snapshots: usize) -> StoredBlob {
    let mut content = String::new();
    let mut history = Vec::with_capacity(snapshots);
    for i in 0..snapshots {
        content.push_str(&format!("Line {} of today's entry, nothing much happened.\n", i));
        history.push(content.clone());
    }
    StoredBlob {
        content,
        history_index: history.len().saturating_sub(1),
        history,
    }
}

#[divan::bench(args = [10, 100, 500])]
fn encode(bencher: divan::Bencher, snapshots: usize) {
    let codec = PersistenceCodec::new();
    let blob = make_blob(snapshots);

    bencher.bench_local(|| divan::black_box(codec.encode(divan::black_box(&blob))));
}

#[divan::bench(args = [10, 100, 500])]
fn decode_compressed(bencher: divan::Bencher, snapshots: usize) {
    let codec = PersistenceCodec::new();
    let stored = codec.encode(&make_blob(snapshots));

    bencher.bench_local(|| divan::black_box(codec.decode(divan::black_box(&stored))));
}

#[divan::bench(args = [10, 100])]
fn decode_plain_json(bencher: divan::Bencher, snapshots: usize) {
    let codec = PersistenceCodec::new();
    let stored = serde_json::to_string(&make_blob(snapshots)).unwrap_or_default();

    bencher.bench_local(|| divan::black_box(codec.decode(divan::black_box(&stored))));
}

#[divan::bench]
fn decode_legacy_text(bencher: divan::Bencher) {
    let codec = PersistenceCodec::new();
    let stored = "A plain entry from before history was stored.\n".repeat(200);

    bencher.bench_local(|| divan::black_box(codec.decode(divan::black_box(&stored))));
}
