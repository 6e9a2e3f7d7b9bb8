use std::sync::Arc;
use std::thread;

use rulebound::{ConditionRule, Engine, EngineOptions, EvaluationType, Facts, fact};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Arc::new(Engine::with_options(
        "signup",
        vec![
            ConditionRule::new("eligible", fact("user.age").gte(18_i64)),
            ConditionRule::new("active", fact("user.status").eq("active")),
        ],
        EngineOptions::new().evaluation_type(EvaluationType::FirstFailure),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                // every thread owns its facts; the engine is shared
                let mut facts = Facts::new()
                    .set("user.age", 16_i64 + i64::from(i))
                    .set("user.status", "active");

                let result = engine.evaluate(&mut facts);
                println!("Thread {i}: {result}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
