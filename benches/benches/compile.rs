//! Compile throughput across backends.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Map, Value, json};
use structgen_typegen::{CompileOptions, SchemaNode, backend_names, compile, get_backend};

/// A schema with `width` nested object fields per level, `depth` levels deep.
fn wide_schema(width: usize, depth: usize) -> SchemaNode {
    fn level(title: String, width: usize, depth: usize) -> Value {
        let mut properties = Map::new();
        properties.insert("id".into(), json!({ "type": "integer" }));
        properties.insert("label".into(), json!({ "type": "string" }));
        properties.insert(
            "tags".into(),
            json!({ "type": "array", "items": { "type": "string" } }),
        );
        if depth > 0 {
            for i in 0..width {
                properties.insert(
                    format!("child{i}"),
                    level(format!("{title}x{i}"), width, depth - 1),
                );
            }
        }
        json!({ "title": title, "properties": properties })
    }

    structgen_typegen::parse_json_schema(&level("Root".into(), width, depth))
        .expect("generated schema parses")
}

fn bench_backends(c: &mut Criterion) {
    let schema = wide_schema(4, 3);
    let options = CompileOptions::default();
    let mut group = c.benchmark_group("compile");

    for name in backend_names() {
        let Some(backend) = get_backend(name) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &schema, |b, schema| {
            b.iter(|| compile(black_box(schema), backend, &options).unwrap())
        });
    }

    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let address = json!({
        "title": "Address",
        "properties": {
            "city": { "type": "string" },
            "zip": { "type": "string" }
        }
    });
    let mut properties = Map::new();
    for i in 0..64 {
        properties.insert(format!("address{i}"), address.clone());
    }
    let schema = structgen_typegen::parse_json_schema(
        &json!({ "title": "Directory", "properties": properties }),
    )
    .expect("generated schema parses");
    let Some(backend) = get_backend("rust") else {
        return;
    };

    c.bench_function("compile_repeated_nested", |b| {
        b.iter(|| compile(black_box(&schema), backend, &CompileOptions::default()).unwrap())
    });
}

criterion_group!(benches, bench_backends, bench_dedup);
criterion_main!(benches);
