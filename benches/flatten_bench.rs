//! Flattening benchmark suite
//!
//! Run with: `cargo bench --bench flatten_bench`
//!
//! # What we measure
//!
//! - Single tuple decoding (valid and rejected)
//! - Full document flattening at several sizes
//! - Flattening with a share of malformed tuples

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vnetflow_core::{flatten, Document, Flow, FlowGroup, FlowRecords, FlowTuple, Record};

const VALID: &str = "1663146003606,10.0.0.6,192.0.2.180,23956,443,6,O,E,NX,3,767,2,1580";
const MALFORMED: &str = "1663146003606,10.0.0.6,192.0.2.180,23956,https,6,O,E,NX,3,767,2,1580";

/// Build a document with `flows` flows of 4 groups, each holding
/// `tuples_per_group` tuples; every `bad_every`-th tuple is malformed.
fn create_document(flows: usize, tuples_per_group: usize, bad_every: Option<usize>) -> Document {
    let mut n = 0;
    let flows = (0..flows)
        .map(|f| Flow {
            acl_id: format!("acl-{}", f),
            flow_groups: (0..4)
                .map(|g| FlowGroup {
                    rule: format!("rule-{}", g),
                    flow_tuples: (0..tuples_per_group)
                        .map(|_| {
                            n += 1;
                            match bad_every {
                                Some(k) if n % k == 0 => Some(MALFORMED.to_string()),
                                _ => Some(VALID.to_string()),
                            }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Document {
        records: vec![Record {
            flow_records: FlowRecords { flows },
            ..Record::default()
        }],
    }
}

fn bench_tuple_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("tuple_parse");

    group.bench_function("valid", |b| b.iter(|| FlowTuple::try_parse(black_box(VALID))));
    group.bench_function("malformed", |b| {
        b.iter(|| FlowTuple::try_parse(black_box(MALFORMED)))
    });

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for flows in [10, 100, 1000] {
        let doc = create_document(flows, 8, None);
        group.throughput(Throughput::Elements(doc.raw_tuple_count() as u64));
        group.bench_with_input(BenchmarkId::new("all_valid", flows), &doc, |b, doc| {
            b.iter(|| flatten(black_box(doc)).count())
        });
    }

    let doc = create_document(100, 8, Some(4));
    group.throughput(Throughput::Elements(doc.raw_tuple_count() as u64));
    group.bench_with_input(BenchmarkId::new("quarter_malformed", 100), &doc, |b, doc| {
        b.iter(|| flatten(black_box(doc)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_tuple_parse, bench_flatten);
criterion_main!(benches);
