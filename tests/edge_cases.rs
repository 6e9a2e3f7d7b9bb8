
use rulebound::{
    ConditionRule, Engine, EngineEvaluationOptions, EngineOptions, EvaluationError,
    EvaluationType, ExitCriteria, Facts, FnRule, Rule, RuleResult, UndefinedFactEvaluationType,
    Value, fact,
};
use strategies::{Scripted, spies};

#[test]
fn single_rule_engine() {
    let engine = Engine::new("one", vec![ConditionRule::new("only", fact("x").eq(1_i64))]);
    let result = engine.evaluate(&mut Facts::new().set("x", 1_i64));
    assert_eq!(result.results(), &[RuleResult::success("only")]);
    assert_eq!(result.exit_criteria(), &ExitCriteria::NormalExit);
}

#[test]
fn empty_engine_under_every_policy() {
    for policy in [
        EvaluationType::None,
        EvaluationType::FirstError,
        EvaluationType::FirstFailure,
        EvaluationType::FirstSuccess,
    ] {
        let engine: Engine<ConditionRule> =
            Engine::with_options("empty", vec![], EngineOptions::new().evaluation_type(policy));
        let result = engine.evaluate(&mut Facts::new());
        assert!(result.results().is_empty());
        assert_eq!(result.exit_criteria(), &ExitCriteria::NormalExit);
    }
}

#[test]
fn first_error_skips_later_rules() {
    let (rules, log) = spies(&[
        (0, Scripted::Success),
        (0, Scripted::Failure),
        (0, Scripted::Error),
        (0, Scripted::Error),
        (0, Scripted::Success),
    ]);
    let engine = Engine::with_options(
        "errors",
        rules,
        EngineOptions::new().evaluation_type(EvaluationType::FirstError),
    );
    let result = engine.evaluate(&mut Facts::new());

    assert_eq!(result.evaluation_order(), vec!["r0", "r1", "r2"]);
    assert_eq!(*log.lock().unwrap(), vec!["r0", "r1", "r2"]);
    let trigger = result.exit_criteria().trigger().unwrap();
    assert_eq!(trigger.rule_id(), "r2");
    assert!(trigger.is_error());
}

#[test]
fn first_success_stops_on_first_rule() {
    let (rules, log) = spies(&[(0, Scripted::Success), (0, Scripted::Success)]);
    let engine = Engine::with_options(
        "first",
        rules,
        EngineOptions::new().evaluation_type(EvaluationType::FirstSuccess),
    );
    let result = engine.evaluate(&mut Facts::new());
    assert_eq!(result.results().len(), 1);
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn policy_without_match_runs_to_completion() {
    let (rules, _) = spies(&[(0, Scripted::Success), (0, Scripted::Failure)]);
    let engine = Engine::with_options(
        "no_error",
        rules,
        EngineOptions::new().evaluation_type(EvaluationType::FirstError),
    );
    let result = engine.evaluate(&mut Facts::new());
    assert_eq!(result.results().len(), 2);
    assert_eq!(result.exit_criteria(), &ExitCriteria::NormalExit);
}

#[test]
fn many_rules() {
    let mut rules = Vec::new();
    let mut facts = Facts::new();
    for i in 0..200 {
        rules.push(ConditionRule::new(&format!("r{i}"), fact(&format!("f{i}")).eq(1_i64)));
        facts.insert(&format!("f{i}"), 1_i64);
    }
    let engine = Engine::new("wide", rules);
    let result = engine.evaluate(&mut facts);
    assert_eq!(result.successes(), 200);
}

#[test]
fn derived_fact_feeds_next_rule() {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(FnRule::new("compute_total", 0, |facts, _| {
            let price = match facts.get("price") {
                Some(Value::Int(p)) => *p,
                _ => return Err(EvaluationError::custom("price missing")),
            };
            let qty = match facts.get("qty") {
                Some(Value::Int(q)) => *q,
                _ => return Err(EvaluationError::custom("qty missing")),
            };
            facts.insert("total", price * qty);
            Ok(true)
        })),
        Box::new(ConditionRule::new("free_shipping", fact("total").gte(100_i64))),
    ];
    let engine = Engine::new("cart", rules);

    let mut facts = Facts::new().set("price", 30_i64).set("qty", 4_i64);
    let result = engine.evaluate(&mut facts);
    assert!(result.result_for("free_shipping").unwrap().is_success());
    // writes stay visible to the caller
    assert_eq!(facts.get("total"), Some(&Value::Int(120)));

    let mut facts = Facts::new().set("price", 30_i64);
    let result = engine.evaluate(&mut facts);
    assert!(result.result_for("compute_total").unwrap().is_error());
    assert!(result.result_for("free_shipping").unwrap().is_failure());
}

#[test]
fn stored_results_chain_rules() {
    let engine = Engine::new(
        "chain",
        vec![
            ConditionRule::new("adult", fact("age").gte(18_i64)),
            ConditionRule::new("active", fact("status").eq("active")),
            ConditionRule::new("allowed", fact("adult").eq(true).and(fact("active").eq(true))),
        ],
    );
    let options = EngineEvaluationOptions::new().store_rule_evaluation_results(true);

    let mut facts = Facts::new().set("age", 30_i64).set("status", "active");
    let result = engine.evaluate_with(&mut facts, &options);
    assert!(result.result_for("allowed").unwrap().is_success());

    let mut facts = Facts::new().set("age", 12_i64).set("status", "active");
    let result = engine.evaluate_with(&mut facts, &options);
    assert!(result.result_for("allowed").unwrap().is_failure());

    // without storing, `adult` and `active` are never facts
    let mut facts = Facts::new().set("age", 30_i64).set("status", "active");
    let result = engine.evaluate(&mut facts);
    assert!(result.result_for("allowed").unwrap().is_failure());
}

#[test]
fn strict_undefined_facts_with_first_error() {
    let engine = Engine::with_options(
        "strict",
        vec![
            ConditionRule::new("has_age", fact("age").gte(0_i64)),
            ConditionRule::new("has_region", fact("region").eq("eu")),
            ConditionRule::new("never_reached", fact("age").lt(200_i64)),
        ],
        EngineOptions::new().evaluation_type(EvaluationType::FirstError),
    );
    let options = EngineEvaluationOptions::new()
        .undefined_fact_evaluation_type(UndefinedFactEvaluationType::EvaluateToError);

    let mut facts = Facts::new().set("age", 40_i64).undefined("region");
    let result = engine.evaluate_with(&mut facts, &options);

    assert_eq!(result.evaluation_order(), vec!["has_age", "has_region"]);
    assert_eq!(
        result.exit_criteria().trigger().and_then(RuleResult::error_detail),
        Some(&EvaluationError::UndefinedFact {
            fact: "region".into()
        })
    );
}

#[test]
fn lenient_undefined_facts_fail_instead() {
    let engine = Engine::with_options(
        "lenient",
        vec![ConditionRule::new("has_region", fact("region").eq("eu"))],
        EngineOptions::new().evaluation_type(EvaluationType::FirstError),
    );
    let result = engine.evaluate(&mut Facts::new());
    assert!(result.results()[0].is_failure());
    assert_eq!(result.exit_criteria(), &ExitCriteria::NormalExit);
}

#[test]
fn nan_float_comparison_fails() {
    let engine = Engine::new("nan", vec![ConditionRule::new("r", fact("x").eq(f64::NAN))]);
    let result = engine.evaluate(&mut Facts::new().set("x", f64::NAN));
    assert!(result.results()[0].is_failure());
}

#[test]
fn infinity_float_comparison() {
    let engine = Engine::new("inf", vec![ConditionRule::new("r", fact("x").eq(f64::INFINITY))]);
    assert!(engine.evaluate(&mut Facts::new().set("x", f64::INFINITY)).results()[0].is_success());
    assert!(engine.evaluate(&mut Facts::new().set("x", f64::NEG_INFINITY)).results()[0].is_failure());
}

#[test]
fn empty_string_value() {
    let engine = Engine::new("s", vec![ConditionRule::new("r", fact("name").eq(""))]);
    assert!(engine.evaluate(&mut Facts::new().set("name", "")).results()[0].is_success());
}

#[test]
fn detailed_results_through_engine() {
    let engine = Engine::new(
        "detail",
        vec![ConditionRule::new(
            "premium_eu",
            fact("tier").eq("premium").and(fact("region").is_in(vec!["eu", "uk"])),
        )],
    );
    let options = EngineEvaluationOptions::new().detailed_evaluation_results(true);
    let mut facts = Facts::new().set("tier", "premium").set("region", "uk");
    let result = engine.evaluate_with(&mut facts, &options);

    let r = &result.results()[0];
    assert!(r.is_success());
    assert_eq!(r.trace().len(), 2);
    assert!(r.trace().iter().all(|t| t.matched));
}

#[test]
#[should_panic(expected = "misbehaving rule")]
fn rule_panics_propagate() {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(ConditionRule::new("ok", fact("x").eq(1_i64))),
        Box::new(FnRule::new("bad", 0, |_, _| panic!("misbehaving rule"))),
    ];
    let engine = Engine::new("panics", rules);
    let _ = engine.evaluate(&mut Facts::new());
}

#[test]
fn engine_is_reusable() {
    let engine = Engine::new("reuse", vec![ConditionRule::new("adult", fact("age").gte(18_i64))]);
    for (age, expected) in [(10_i64, false), (30, true), (17, false), (18, true)] {
        let result = engine.evaluate(&mut Facts::new().set("age", age));
        assert_eq!(result.results()[0].is_success(), expected, "age {age}");
    }
}
