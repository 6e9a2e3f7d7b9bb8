use tracing::{debug, debug_span, trace};

use crate::types::CompareFailure;
use crate::{
    ConditionTrace, EngineEvaluationOptions, EvaluationError, EvaluationResult, EvaluationType,
    ExitCriteria, Expr, Facts, Rule, RuleEvaluationOptions, RuleResult,
    UndefinedFactEvaluationType,
};

/// Run `rules` in order against `facts`, stopping when `policy` says so.
pub(crate) fn evaluate<R: Rule>(
    engine_id: &str,
    rules: &[R],
    policy: EvaluationType,
    facts: &mut Facts,
    options: &EngineEvaluationOptions,
) -> EvaluationResult {
    let _span = debug_span!("engine.evaluate", engine_id, rules = rules.len(), %policy).entered();

    let rule_options = RuleEvaluationOptions::from(options);
    let mut results = Vec::with_capacity(rules.len());

    for (index, rule) in rules.iter().enumerate() {
        let result = rule.evaluate(facts, &rule_options);
        trace!(
            rule_id = result.rule_id(),
            index,
            classification = %result.classification(),
            "rule evaluated"
        );

        if policy.halts_on(&result) {
            debug!(
                rule_id = result.rule_id(),
                evaluated = index + 1,
                "early exit"
            );
            results.push(result.clone());
            return EvaluationResult::new(results, ExitCriteria::EarlyExit { result });
        }
        results.push(result);
    }

    debug!(evaluated = results.len(), "normal exit");
    EvaluationResult::new(results, ExitCriteria::NormalExit)
}

/// Evaluate a condition tree. `And`/`Or` stop at the first deciding operand,
/// so errors in unevaluated operands are never reported.
pub(crate) fn eval_condition(
    expr: &Expr,
    facts: &Facts,
    options: &RuleEvaluationOptions,
    trace: &mut Vec<ConditionTrace>,
) -> Result<bool, EvaluationError> {
    match expr {
        Expr::Compare { fact, op, value } => {
            let actual = facts.get(fact);
            let outcome = match actual {
                None => match options.undefined_fact_evaluation_type {
                    UndefinedFactEvaluationType::EvaluateToFalse => Ok(false),
                    UndefinedFactEvaluationType::EvaluateToError => {
                        Err(EvaluationError::UndefinedFact { fact: fact.clone() })
                    }
                },
                Some(actual) => actual
                    .compare(*op, value, options.upcast_fact_values)
                    .map_err(|failure| match failure {
                        CompareFailure::TypeMismatch => EvaluationError::TypeMismatch {
                            fact: fact.clone(),
                            expected: value.type_name().to_owned(),
                            actual: actual.type_name().to_owned(),
                        },
                        CompareFailure::Unsupported => EvaluationError::UnsupportedOperator {
                            fact: fact.clone(),
                            op: op.to_string(),
                            value_type: actual.type_name().to_owned(),
                        },
                    }),
            };
            if options.detailed_evaluation_results {
                trace.push(ConditionTrace {
                    fact: fact.clone(),
                    op: *op,
                    expected: value.clone(),
                    actual: actual.cloned(),
                    matched: matches!(outcome, Ok(true)),
                });
            }
            outcome
        }
        Expr::And(a, b) => {
            Ok(eval_condition(a, facts, options, trace)? && eval_condition(b, facts, options, trace)?)
        }
        Expr::Or(a, b) => {
            Ok(eval_condition(a, facts, options, trace)? || eval_condition(b, facts, options, trace)?)
        }
        Expr::Not(inner) => Ok(!eval_condition(inner, facts, options, trace)?),
    }
}

/// Turn a rule's raw outcome into a [`RuleResult`], storing it as a fact
/// under the rule id when requested.
pub(crate) fn conclude(
    rule_id: &str,
    outcome: Result<bool, EvaluationError>,
    trace: Vec<ConditionTrace>,
    facts: &mut Facts,
    options: &RuleEvaluationOptions,
) -> RuleResult {
    let result = match outcome {
        Ok(passed) => {
            if options.store_rule_evaluation_results {
                facts.insert(rule_id, passed);
            }
            RuleResult::from_bool(rule_id, passed)
        }
        Err(error) => {
            if options.store_rule_evaluation_results {
                facts.insert_undefined(rule_id);
            }
            RuleResult::error(rule_id, error)
        }
    };
    result.with_trace(trace)
}
