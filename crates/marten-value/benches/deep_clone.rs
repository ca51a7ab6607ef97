//! Deep-clone benchmarks: wide records, nested lists, and cyclic graphs.

use criterion::{Criterion, criterion_group, criterion_main};
use marten_value::{ListData, MapData, MapKey, RecordData, Value, deep_clone};
use std::hint::black_box;
use std::sync::Arc;

fn wide_record(width: usize) -> Value {
    let record = RecordData::new();
    for i in 0..width {
        record.set(format!("key{}", i), Value::Int(i as i64));
    }
    Value::record(record)
}

fn nested_list(depth: usize) -> Value {
    let mut value = Value::Int(0);
    for _ in 0..depth {
        value = Value::list(ListData::with_elements(vec![value, Value::Int(1)]));
    }
    value
}

fn cyclic_graph(nodes: usize) -> Value {
    // A ring of records, each pointing at the next through a "next" key.
    let records: Vec<Arc<RecordData>> =
        (0..nodes).map(|_| Arc::new(RecordData::new())).collect();
    for (i, record) in records.iter().enumerate() {
        record.set("id", Value::Int(i as i64));
        record.set("next", Value::Record(records[(i + 1) % nodes].clone()));
    }
    Value::Record(records[0].clone())
}

fn bench_deep_clone(c: &mut Criterion) {
    let record = wide_record(256);
    c.bench_function("clone_wide_record_256", |b| {
        b.iter(|| deep_clone(black_box(&record)).unwrap())
    });

    let list = nested_list(64);
    c.bench_function("clone_nested_list_64", |b| {
        b.iter(|| deep_clone(black_box(&list)).unwrap())
    });

    let ring = cyclic_graph(128);
    c.bench_function("clone_cyclic_ring_128", |b| {
        b.iter(|| {
            let cloned = deep_clone(black_box(&ring)).unwrap();
            // unlink the cloned ring so each iteration's Arcs can drop
            cloned.as_record().unwrap().delete("next");
            cloned
        })
    });

    let map = MapData::new();
    for i in 0..128 {
        map.set(
            MapKey(Value::Int(i)),
            Value::list(ListData::with_elements(vec![Value::Int(i)])),
        );
    }
    let map = Value::map(map);
    c.bench_function("clone_map_128_list_values", |b| {
        b.iter(|| deep_clone(black_box(&map)).unwrap())
    });
}

criterion_group!(benches, bench_deep_clone);
criterion_main!(benches);
