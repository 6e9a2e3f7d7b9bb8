use thiserror::Error;

/// Errors from parsing engine configuration values.
///
/// Evaluation itself never fails; rule-level problems are reported as
/// [`RuleResult::Error`](crate::RuleResult::Error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown evaluation type '{value}'")]
    UnknownEvaluationType { value: String },

    #[error("unknown undefined-fact policy '{value}'")]
    UnknownUndefinedFactPolicy { value: String },
}
