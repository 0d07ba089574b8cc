use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prodcat::classifier::features;
use prodcat::Classifier;

const SHORT_TITLE: &str = "USB cable";
const LONG_TITLE: &str = "Samsung Galaxy A52 5G smartphone 128GB dual sim unlocked black \
                          with 6.5 inch AMOLED display and 64MP quad camera";

fn setup_benchmark_classifier(classes: usize) -> Classifier {
    let mut builder = Classifier::builder();
    for i in 0..classes {
        for j in 0..4 {
            builder = builder.add_example(
                format!("brand{} widget{} model{} edition", i, i, j % 2),
                format!("class_{}", i),
            );
        }
    }
    builder.build().unwrap()
}

fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("Features");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("short_title", |b| b.iter(|| features::extract(black_box(SHORT_TITLE))));
    group.bench_function("long_title", |b| b.iter(|| features::extract(black_box(LONG_TITLE))));

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prediction");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let classifier = setup_benchmark_classifier(3);
    group.bench_function("short_title", |b| b.iter(|| classifier.predict(black_box(SHORT_TITLE)).len()));
    group.bench_function("long_title", |b| b.iter(|| classifier.predict(black_box(LONG_TITLE)).len()));

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Test scaling with number of classes
    for &count in &[2, 5, 10, 20, 50] {
        let classifier = setup_benchmark_classifier(count);
        group.bench_function(format!("classes_{}", count), |b| {
            b.iter(|| classifier.predict(black_box("brand3 widget3 model1 edition")).len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_features, bench_prediction, bench_scaling);
criterion_main!(benches);
