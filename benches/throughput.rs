use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{Criterion, criterion_group, criterion_main};
use rulebound::{ConditionRule, Engine, EngineOptions, Facts, fact};

fn build_shared_engine() -> (Arc<Engine<ConditionRule>>, Facts) {
    let n = 20;
    let mut rules = Vec::with_capacity(n);
    let mut facts = Facts::new();

    for i in 0..n {
        let fact_name = format!("f{i}");
        rules.push(
            ConditionRule::new(&format!("r{i}"), fact(&fact_name).gte(1_i64))
                .with_priority(i as i64),
        );
        facts.insert(&fact_name, 10_i64);
    }

    let engine = Engine::with_options(
        "throughput",
        rules,
        EngineOptions::new().sort_rules_by_priority(true),
    );
    (Arc::new(engine), facts)
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let (engine, facts) = build_shared_engine();

        group.bench_function(format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let engine = Arc::clone(&engine);
                        let facts = facts.clone();
                        thread::spawn(move || {
                            let start = Instant::now();
                            for _ in 0..per_thread {
                                let _ = engine.evaluate(&mut facts.clone());
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                let mut max_elapsed = Duration::ZERO;
                for h in handles {
                    let elapsed = h.join().unwrap();
                    if elapsed > max_elapsed {
                        max_elapsed = elapsed;
                    }
                }
                max_elapsed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
