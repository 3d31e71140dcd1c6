use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pol_annotate::RuleAnnotator;
use pol_core::AnnotatorConfig;
use pol_pipeline::SentimentPipeline;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const PHRASES: &[&str] = &[
    "the plot was soooo predictable",
    "I loved every minute of it!!",
    "Apple really outdid themselves with the new iPhone",
    "terrible pacing... fell asleep twice",
    "great soundtrack, 10/10 would listen again",
    "saved 10-20% on the tickets",
    "haha what a ride?!",
];

fn generate_input(size_kb: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(PHRASES.choose(&mut rng).unwrap());
        text.push_str(". ");
    }
    text.truncate(size_kb * 1024);
    text
}

fn bench_preprocess(c: &mut Criterion) {
    let config = AnnotatorConfig::with_entities(["Apple", "iPhone"]);
    let pipeline = SentimentPipeline::new(
        RuleAnnotator::with_config(&config),
        |t: &str| i8::from(t.contains("love")),
    );

    let input_1k = generate_input(1);
    let input_10k = generate_input(10);

    c.bench_function("preprocess_1kb", |b| {
        b.iter(|| black_box(pipeline.preprocess(black_box(&input_1k)).unwrap()))
    });
    c.bench_function("preprocess_10kb", |b| {
        b.iter(|| black_box(pipeline.preprocess(black_box(&input_10k)).unwrap()))
    });
}

fn bench_predict(c: &mut Criterion) {
    let pipeline = SentimentPipeline::new(RuleAnnotator::new(), |t: &str| {
        i8::from(t.contains("love"))
    });
    let input = generate_input(1);
    c.bench_function("predict_1kb", |b| {
        b.iter(|| black_box(pipeline.predict(black_box(&input)).unwrap()))
    });
}

criterion_group!(benches, bench_preprocess, bench_predict);
criterion_main!(benches);
