use rulebound::{ConditionRule, Engine, EngineOptions, EvaluationType, Facts, fact};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Deny-before-allow: the ban check carries the highest priority and the
    // engine stops at the first rule that succeeds.
    let engine = Engine::with_options(
        "access",
        vec![
            ConditionRule::new(
                "allowed",
                fact("user.age").gte(18_i64).and(fact("user.status").eq("active")),
            ),
            ConditionRule::new("banned", fact("user.banned").eq(true)).with_priority(100),
        ],
        EngineOptions::new()
            .sort_rules_by_priority(true)
            .evaluation_type(EvaluationType::FirstSuccess),
    );

    let users = [
        ("Banned user", true, 30_i64),
        ("Normal user", false, 25),
        ("Underage user", false, 15),
    ];

    for (label, banned, age) in users {
        let mut facts = Facts::new()
            .set("user.banned", banned)
            .set("user.age", age)
            .set("user.status", "active");

        let result = engine.evaluate(&mut facts);
        match result.exit_criteria().trigger() {
            Some(hit) => println!("{label}: {}", hit.rule_id()),
            None => println!("{label}: no match"),
        }
    }
}
