use rulebound::{ConditionRule, Engine, Facts, fact};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::new(
        "onboarding",
        vec![
            ConditionRule::new("eligible_age", fact("user.age").gte(18_i64)),
            ConditionRule::new("active_account", fact("user.status").eq("active")),
            ConditionRule::new("supported_region", fact("user.region").is_in(vec!["eu", "us"])),
        ],
    );

    println!("{engine}");

    let mut facts = Facts::new()
        .set("user.age", 25_i64)
        .set("user.status", "active")
        .set("user.region", "ap");

    let result = engine.evaluate(&mut facts);
    println!("{result}");
    println!(
        "{} passed, {} failed, {} errored",
        result.successes(),
        result.failures(),
        result.errors()
    );
}
