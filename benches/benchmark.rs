use criterion::{criterion_group, criterion_main, Criterion};

use metaphone_rules::*;

fn bench_encoder(c: &mut Criterion, encoder_name: &str, encoder: Box<dyn Encoder>, text: &str) {
    c.bench_function(encoder_name, |b| b.iter(|| encoder.encode(text)));
}

pub fn bench_metaphone(c: &mut Criterion) {
    let metaphone = Metaphone::default();
    bench_encoder(c, "Metaphone", Box::new(metaphone), "astronomical");
}

pub fn bench_metaphone_truncated(c: &mut Criterion) {
    let metaphone = Metaphone::new(4);
    bench_encoder(c, "Metaphone (4)", Box::new(metaphone), "astronomical");
}

pub fn bench_encode_with_max_length(c: &mut Criterion) {
    // Free function, builds its encoder on every call.
    c.bench_function("encode_with_max_length", |b| {
        b.iter(|| encode_with_max_length("discharger", 4))
    });
}

criterion_group!(
    name = metaphone;
    config = Criterion::default().sample_size(300);
    targets = bench_metaphone, bench_metaphone_truncated, bench_encode_with_max_length
);

criterion_main!(metaphone);
