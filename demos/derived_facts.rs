use rulebound::{
    ConditionRule, Engine, EngineEvaluationOptions, EvaluationError, Facts, FnRule, Rule, Value,
    fact,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // `order_total` writes a fact that the later rules read; with stored
    // results on, `big_spender` also becomes a fact for `vip_discount`.
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(FnRule::new("order_total", 0, |facts, _| {
            let (Some(Value::Int(price)), Some(Value::Int(qty))) =
                (facts.get("price"), facts.get("qty"))
            else {
                return Err(EvaluationError::custom("price and qty are required"));
            };
            let total = price * qty;
            facts.insert("total", total);
            Ok(total > 0)
        })),
        Box::new(ConditionRule::new("big_spender", fact("total").gte(500_i64))),
        Box::new(ConditionRule::new(
            "vip_discount",
            fact("big_spender").eq(true).and(fact("member").eq(true)),
        )),
    ];
    let engine = Engine::new("pricing", rules);
    let options = EngineEvaluationOptions::new().store_rule_evaluation_results(true);

    let mut facts = Facts::new()
        .set("price", 120_i64)
        .set("qty", 5_i64)
        .set("member", true);
    let result = engine.evaluate_with(&mut facts, &options);

    println!("{result}");
    for (name, value) in facts.iter() {
        match value {
            Some(v) => println!("  {name} = {v}"),
            None => println!("  {name} = <undefined>"),
        }
    }
}
