mod engine;
mod error;
mod evaluation_result;
mod expr;
mod facts;
mod options;
mod rule;
mod rule_result;
mod value;

pub use engine::Engine;
pub use error::EvaluationError;
pub use evaluation_result::{EvaluationResult, ExitCriteria};
pub use expr::{CompareOp, Expr, FactExpr, fact};
pub use facts::Facts;
pub use options::{
    EngineEvaluationOptions, EngineOptions, EvaluationType, RuleEvaluationOptions,
    UndefinedFactEvaluationType,
};
pub use rule::{ConditionRule, FnRule, Rule, RuleOptions};
pub use rule_result::{Classification, ConditionTrace, RuleResult};
pub use value::Value;

pub(crate) use value::CompareFailure;
