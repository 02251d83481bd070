use criterion::{black_box, criterion_group, criterion_main, Criterion};
use excelbot::{templates, Classifier, TemplateFamily};

fn setup_benchmark_classifier() -> Classifier {
    Classifier::builder()
        .with_default_rules()
        .build()
        .unwrap()
}

fn bench_routing(c: &mut Criterion) {
    let classifier = setup_benchmark_classifier();
    let mut group = c.benchmark_group("Routing");

    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // First rule hits immediately
    group.bench_function("first_rule", |b| {
        b.iter(|| classifier.route(black_box("highlight the overdue cells")).unwrap())
    });

    // Falls through the whole table
    group.bench_function("fallback", |b| {
        b.iter(|| classifier.route(black_box("reconcile the two ledgers")).unwrap())
    });

    // Long description with the match near the end
    let long_description = format!(
        "{} and finally draw a chart of the result",
        "walk every row of the report comparing against last quarter ".repeat(20)
    );
    group.bench_function("long_description", |b| {
        b.iter(|| classifier.route(black_box(&long_description)).unwrap())
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let classifier = setup_benchmark_classifier();
    let mut group = c.benchmark_group("Classification");

    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("classify_and_render", |b| {
        b.iter(|| {
            classifier
                .classify(black_box("sort the sales data by region"))
                .unwrap()
        })
    });

    // The generic body interpolates twice and is the largest template
    group.bench_function("render_generic", |b| {
        b.iter(|| {
            templates::render(
                black_box(TemplateFamily::Generic),
                black_box("do something unusual with the selection"),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_routing, bench_classification);
criterion_main!(benches);
