use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prefix_expression::interpreter::parse_prefix;

static EXPRESSIONS: [&str; 5] = [
    "(+ x 1)",
    "(negate (* x (- y z)))",
    "(med3 x (avg5 1 2 3 4 y) z)",
    "(arith-mean x y z (geom-mean 1 2 3) (harm-mean x 4))",
    "(/ (+ (* x x) (* y y)) (arith-mean (negate z) 1 2 3 4 5 6 7 8))",
];

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for expression in EXPRESSIONS {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| parse_prefix(expression));
            },
        );
    }
}

fn evaluate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for expression in EXPRESSIONS {
        let tree = match parse_prefix(expression) {
            Ok(tree) => tree,
            Err(error) => panic!("{}", error),
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            &tree,
            |bencher, tree| {
                bencher.iter(|| tree.evaluate(1.5, -2.0, 3.25));
            },
        );
    }
}

criterion_group!(benches, parse_benchmark, evaluate_benchmark);
criterion_main!(benches);
