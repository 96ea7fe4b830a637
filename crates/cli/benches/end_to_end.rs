use advcounter_cli::args::Args;
use advcounter_cli::presentation;
use advcounter_engine::{MemorySource, Stattext, collect_report};
use advcounter_shared_kernel::Precision;
use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["advcounter", "book.txt"])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_report_and_render(c: &mut Criterion) {
    let text = "Lorem ipsum dolor sit amet, 12 consectetur adipiscing elit.\n".repeat(1_000);
    let args = Args::try_parse_from(["advcounter", "-f", "json", "book.txt"]).unwrap();

    c.bench_function("report_and_render_json", |b| {
        b.iter(|| {
            let mut source = MemorySource::new(black_box(text.as_str()));
            let mut engine = Stattext::new(Precision::new(args.decimal));
            let report = collect_report(&mut engine, &mut source).unwrap();
            black_box(presentation::render(&report, args.format).unwrap());
        })
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_report_and_render);
criterion_main!(benches);
