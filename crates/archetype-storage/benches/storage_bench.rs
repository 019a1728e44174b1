use criterion::{criterion_group, criterion_main, Criterion};

use archetype_core::models::QuizResult;
use archetype_core::traits::IResultStorage;
use archetype_scoring::ScoringEngine;
use archetype_storage::StorageEngine;

fn make_result(i: usize) -> QuizResult {
    let engine = ScoringEngine::builtin();
    let answers = test_fixtures::uniform_answers((i % 5) as u8 + 1);
    let eval = engine.evaluate(&answers).unwrap();
    QuizResult::new(
        format!("bench-session-{i:06}"),
        answers,
        eval.scores,
        eval.classification,
        engine.bank().version(),
    )
}

fn bench_insert(c: &mut Criterion) {
    let results: Vec<QuizResult> = (0..1000).map(make_result).collect();

    c.bench_function("insert_1000_results", |b| {
        b.iter(|| {
            let storage = StorageEngine::open_in_memory().unwrap();
            for r in &results {
                storage.insert(r).unwrap();
            }
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let storage = StorageEngine::open_in_memory().unwrap();
    for i in 0..1000 {
        storage.insert(&make_result(i)).unwrap();
    }

    c.bench_function("get_result_by_session", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let id = format!("bench-session-{:06}", i % 1000);
            i += 1;
            storage.get(&id).unwrap()
        });
    });

    c.bench_function("archetype_distribution_1000", |b| {
        b.iter(|| storage.archetype_distribution().unwrap());
    });
}

criterion_group!(benches, bench_insert, bench_get);
criterion_main!(benches);
