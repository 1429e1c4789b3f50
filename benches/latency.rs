//! Latency benchmarks for the projection pipeline
//!
//! Projection runs inline with receipt delivery, so per-event cost is the
//! throughput ceiling: decode, method lookup, argument parse, and a full
//! projection step against the in-memory store.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nftscope_projector::args::parse_call_args;
use nftscope_projector::{
    decode_receipt, is_nft_method, Action, ActionEvent, MemoryStore, Projector, Receipt,
};

/// Benchmark receipt decoding
fn bench_decode_receipt(c: &mut Criterion) {
    let receipt = Receipt::new(
        1_700_000_000_000_000_000,
        vec![
            Action::CreateAccount,
            Action::function_call("buy", br#"{"token_id":"T1"}"#.to_vec(), "alice.near"),
            Action::Transfer { deposit: 100 },
            Action::function_call(
                "nft_transfer",
                br#"{"token_id":"T2","receiver_id":"bob.near"}"#.to_vec(),
                "alice.near",
            ),
        ],
    );

    c.bench_function("decode_receipt", |b| {
        b.iter(|| black_box(decode_receipt(black_box(&receipt)).count()))
    });
}

/// Benchmark method name lookup
fn bench_method_lookup(c: &mut Criterion) {
    c.bench_function("method_lookup", |b| {
        b.iter(|| black_box(is_nft_method(black_box("nft_transfer"))))
    });
}

/// Benchmark argument payload parsing
fn bench_parse_call_args(c: &mut Criterion) {
    let payload: &[u8] = br#"{"token_id":"T1","receiver_id":"bob.near","price":"1000000","memo":"gift"}"#;

    c.bench_function("parse_call_args", |b| {
        b.iter(|| black_box(parse_call_args(black_box(payload))))
    });
}

/// Benchmark a full projection step against a warm store
fn bench_project_event(c: &mut Criterion) {
    let projector = Projector::new();
    let mut store = MemoryStore::new();
    let event = ActionEvent {
        method_name: "buy".to_string(),
        args: br#"{"token_id":"T1"}"#.to_vec(),
        caller: "alice.near".to_string(),
        timestamp_nanos: 1_700_000_000_000_000_000,
    };

    c.bench_function("project_event", |b| {
        b.iter(|| black_box(projector.project_event(&mut store, black_box(&event)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_decode_receipt,
    bench_method_lookup,
    bench_parse_call_args,
    bench_project_event
);

criterion_main!(benches);
