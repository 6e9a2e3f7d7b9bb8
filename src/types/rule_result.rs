use std::fmt;

use super::error::EvaluationError;
use super::expr::CompareOp;
use super::value::Value;

/// The three mutually exclusive outcomes of evaluating one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Classification {
    Success,
    Failure,
    Error,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Success => write!(f, "success"),
            Classification::Failure => write!(f, "failure"),
            Classification::Error => write!(f, "error"),
        }
    }
}

/// Outcome of evaluating a single rule.
///
/// `Success` and `Failure` mean the rule ran to a decision; `Error` means it
/// could not, and carries the reason. The trace is only populated when
/// detailed evaluation results were requested.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "classification", rename_all = "snake_case")
)]
#[must_use]
pub enum RuleResult {
    Success {
        rule_id: String,
        trace: Vec<ConditionTrace>,
    },
    Failure {
        rule_id: String,
        trace: Vec<ConditionTrace>,
    },
    Error {
        rule_id: String,
        error: EvaluationError,
        trace: Vec<ConditionTrace>,
    },
}

/// One comparison performed while evaluating a condition, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionTrace {
    pub fact: String,
    pub op: CompareOp,
    pub expected: Value,
    /// The fact's value, or `None` if it was missing or undefined.
    pub actual: Option<Value>,
    pub matched: bool,
}

impl RuleResult {
    pub fn success(rule_id: impl Into<String>) -> Self {
        RuleResult::Success {
            rule_id: rule_id.into(),
            trace: Vec::new(),
        }
    }

    pub fn failure(rule_id: impl Into<String>) -> Self {
        RuleResult::Failure {
            rule_id: rule_id.into(),
            trace: Vec::new(),
        }
    }

    pub fn error(rule_id: impl Into<String>, error: EvaluationError) -> Self {
        RuleResult::Error {
            rule_id: rule_id.into(),
            error,
            trace: Vec::new(),
        }
    }

    /// Success when `passed` is true, Failure otherwise.
    pub fn from_bool(rule_id: impl Into<String>, passed: bool) -> Self {
        if passed {
            Self::success(rule_id)
        } else {
            Self::failure(rule_id)
        }
    }

    /// Replace the comparison trace.
    pub fn with_trace(mut self, entries: Vec<ConditionTrace>) -> Self {
        match &mut self {
            RuleResult::Success { trace, .. }
            | RuleResult::Failure { trace, .. }
            | RuleResult::Error { trace, .. } => *trace = entries,
        }
        self
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        match self {
            RuleResult::Success { .. } => Classification::Success,
            RuleResult::Failure { .. } => Classification::Failure,
            RuleResult::Error { .. } => Classification::Error,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, RuleResult::Success { .. })
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, RuleResult::Failure { .. })
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, RuleResult::Error { .. })
    }

    #[must_use]
    pub fn rule_id(&self) -> &str {
        match self {
            RuleResult::Success { rule_id, .. }
            | RuleResult::Failure { rule_id, .. }
            | RuleResult::Error { rule_id, .. } => rule_id,
        }
    }

    #[must_use]
    pub fn trace(&self) -> &[ConditionTrace] {
        match self {
            RuleResult::Success { trace, .. }
            | RuleResult::Failure { trace, .. }
            | RuleResult::Error { trace, .. } => trace,
        }
    }

    /// The error, if this result is classified `Error`.
    #[must_use]
    pub fn error_detail(&self) -> Option<&EvaluationError> {
        match self {
            RuleResult::Error { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for RuleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleResult::Error { rule_id, error, .. } => write!(f, "{rule_id}: error ({error})"),
            _ => write!(f, "{}: {}", self.rule_id(), self.classification()),
        }
    }
}

impl fmt::Display for ConditionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual {
            Some(actual) => write!(
                f,
                "{} {} {} (actual {}) => {}",
                self.fact, self.op, self.expected, actual, self.matched
            ),
            None => write!(
                f,
                "{} {} {} (undefined) => {}",
                self.fact, self.op, self.expected, self.matched
            ),
        }
    }
}
