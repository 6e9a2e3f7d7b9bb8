//! An embeddable rule evaluation engine.
//!
//! An [`Engine`] holds an ordered list of [`Rule`]s and evaluates them one
//! after another against a mutable [`Facts`] set. Every rule reports exactly
//! one of success, failure, or error as a [`RuleResult`]. After each rule the
//! engine's [`EvaluationType`] decides whether to stop early; the
//! [`EvaluationResult`] records the per-rule results and the [`ExitCriteria`].
//!
//! ```
//! use rulebound::{ConditionRule, Engine, EngineOptions, EvaluationType, Facts, fact};
//!
//! let engine = Engine::with_options(
//!     "access",
//!     vec![
//!         ConditionRule::new("hard_deny", fact("user.banned").eq(true)).with_priority(100),
//!         ConditionRule::new("eligible", fact("user.age").gte(18_i64)),
//!     ],
//!     EngineOptions::new()
//!         .sort_rules_by_priority(true)
//!         .evaluation_type(EvaluationType::FirstSuccess),
//! );
//!
//! let mut facts = Facts::new().set("user.banned", true).set("user.age", 30_i64);
//! let result = engine.evaluate(&mut facts);
//! assert_eq!(result.exit_criteria().trigger().map(|r| r.rule_id()), Some("hard_deny"));
//! ```

mod error;
mod evaluate;
mod types;

pub use error::EngineError;
pub use types::{
    Classification, CompareOp, ConditionRule, ConditionTrace, Engine, EngineEvaluationOptions,
    EngineOptions, EvaluationError, EvaluationResult, EvaluationType, ExitCriteria, Expr,
    FactExpr, Facts, FnRule, Rule, RuleEvaluationOptions, RuleOptions, RuleResult,
    UndefinedFactEvaluationType, Value, fact,
};
