use rulebound::{
    ConditionRule, Engine, EngineEvaluationOptions, Facts, UndefinedFactEvaluationType, fact,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::new(
        "review",
        vec![
            ConditionRule::new(
                "can_proceed",
                fact("user.age")
                    .gte(18_i64)
                    .and(fact("user.status").eq("active"))
                    .and(fact("request.region").neq("restricted")),
            ),
            ConditionRule::new("high_score", fact("user.score").gt(90.5_f64)),
            ConditionRule::new("has_referrer", fact("user.referrer").eq("partner")),
        ],
    );

    let mut facts = Facts::new()
        .set("user.age", 25_i64)
        .set("user.status", "active")
        .set("user.score", 92_i64)
        .set("request.region", "us-east");

    let options = EngineEvaluationOptions::new()
        .upcast_fact_values(true)
        .undefined_fact_evaluation_type(UndefinedFactEvaluationType::EvaluateToError)
        .detailed_evaluation_results(true);

    let result = engine.evaluate_with(&mut facts, &options);

    println!("{result}");
    println!();
    println!("Evaluation order: {:?}", result.evaluation_order());
    for r in result.results() {
        println!("{r}");
        for step in r.trace() {
            println!("    {step}");
        }
    }
}
