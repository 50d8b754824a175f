use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use typedcsv::config::ParserConfig;
use typedcsv::parser::tokenizer::tokenize;

fn bench_unquoted_line(c: &mut Criterion) {
    let config = ParserConfig::default();
    let line = "field1,field2,field3,12345,67.89,another field,yet another one";

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("unquoted", |b| {
        b.iter(|| tokenize(std::hint::black_box(line), 1, &config).unwrap())
    });
    group.finish();
}

fn bench_quoted_line(c: &mut Criterion) {
    let config = ParserConfig::default();
    let line = r#""quoted, with delimiter","she said ""ok""",plain,"trailing  "  ,42"#;

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("quoted", |b| {
        b.iter(|| tokenize(std::hint::black_box(line), 1, &config).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_unquoted_line, bench_quoted_line);
criterion_main!(benches);
