//! Criterion benchmarks for the configuration query evaluator.
//!
//! Two groups: representative production queries (the shapes config files
//! actually use) and a worst-case long disjunction, both against a part with
//! a populated interop table.

use criterion::{Criterion, criterion_group, criterion_main};
use shakedown_api::interop::{InteropProvider, InteropStore, InteropValue};
use shakedown_api::query::{QueryTarget, evaluate};

struct BenchPart {
    name: String,
    store: InteropStore,
}

impl QueryTarget for BenchPart {
    fn part_name(&self) -> &str {
        &self.name
    }
    fn full_name(&self) -> String {
        self.name.clone()
    }
    fn interop(&self, name: &str) -> InteropValue {
        self.store.get_interop(name)
    }
}

fn bench_part() -> BenchPart {
    let mut store = InteropStore::new();
    store.add("thrust", InteropValue::float(215.0, "engine"));
    store.add("ignitions", InteropValue::int(1, "engine"));
    store.add("fuel", InteropValue::string("kerosene", "engine"));
    store.add("deployed", InteropValue::boolean(false, "chute"));
    BenchPart {
        name: "mainsail".to_string(),
        store,
    }
}

fn representative_queries(c: &mut Criterion) {
    let part = bench_part();
    let queries = [
        "mainsail",
        "Mainsail-D:thrust >= 200",
        "thrust <=> 100-300 || fuel = kerosene && ignitions = 1",
        "solidbooster,ionengine,mainsail",
    ];
    c.bench_function("representative_queries", |b| {
        b.iter(|| {
            for query in &queries {
                std::hint::black_box(evaluate(query, &part));
            }
        });
    });
}

fn long_disjunction(c: &mut Criterion) {
    let part = bench_part();
    // 100 failing elements before the one that matches.
    let mut query = "thrust = 0,".repeat(100);
    query.push_str("mainsail");
    c.bench_function("long_disjunction", |b| {
        b.iter(|| std::hint::black_box(evaluate(&query, &part)));
    });
}

criterion_group!(benches, representative_queries, long_disjunction);
criterion_main!(benches);
