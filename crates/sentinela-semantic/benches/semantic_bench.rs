use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sentinela_core::config::SemanticConfig;
use sentinela_core::traits::ISemanticScorer;
use sentinela_lexicon::LexiconSet;
use sentinela_semantic::SemanticScorer;

const NARRATIVE: &str = "Denúncia anônima informou sobre tráfico de drogas. Durante a abordagem, \
    o condutor demonstrou nervosismo, disse que não sabia de nada e que estava indo para casa. \
    Foi localizada grande quantidade de cocaína escondida no veículo.";

fn bench_score(c: &mut Criterion) {
    let scorer = SemanticScorer::new(
        Arc::new(LexiconSet::builtin().unwrap()),
        SemanticConfig::default(),
    );
    c.bench_function("semantic_score_single", |b| {
        b.iter(|| scorer.score(black_box(NARRATIVE)))
    });

    let batch: Vec<String> = (0..256).map(|i| format!("{NARRATIVE} ocorrência {i}")).collect();
    c.bench_function("semantic_score_many_256", |b| {
        b.iter(|| scorer.score_many(black_box(&batch)))
    });
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
