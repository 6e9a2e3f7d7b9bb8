use std::fmt;

use super::rule_result::RuleResult;

/// How an evaluation ended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "exit", rename_all = "snake_case"))]
pub enum ExitCriteria {
    /// Every rule was evaluated.
    NormalExit,
    /// The short-circuit policy fired on this result.
    EarlyExit { result: RuleResult },
}

impl ExitCriteria {
    #[must_use]
    pub fn is_early(&self) -> bool {
        matches!(self, ExitCriteria::EarlyExit { .. })
    }

    /// The result that triggered an early exit.
    #[must_use]
    pub fn trigger(&self) -> Option<&RuleResult> {
        match self {
            ExitCriteria::NormalExit => None,
            ExitCriteria::EarlyExit { result } => Some(result),
        }
    }
}

/// Output of [`Engine::evaluate()`](super::Engine::evaluate).
///
/// Holds one [`RuleResult`] per rule actually evaluated, in evaluation order,
/// plus the [`ExitCriteria`]. On an early exit the results are a strict
/// prefix of the engine's rules and the triggering result is the last one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct EvaluationResult {
    results: Vec<RuleResult>,
    exit_criteria: ExitCriteria,
}

impl EvaluationResult {
    pub(crate) fn new(results: Vec<RuleResult>, exit_criteria: ExitCriteria) -> Self {
        Self {
            results,
            exit_criteria,
        }
    }

    /// Per-rule results in evaluation order.
    #[must_use]
    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    #[must_use]
    pub fn exit_criteria(&self) -> &ExitCriteria {
        &self.exit_criteria
    }

    /// Look up the result for a rule id, if that rule was evaluated.
    #[must_use]
    pub fn result_for(&self, rule_id: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule_id() == rule_id)
    }

    /// Ids of the evaluated rules, in evaluation order.
    #[must_use]
    pub fn evaluation_order(&self) -> Vec<&str> {
        self.results.iter().map(RuleResult::rule_id).collect()
    }

    #[must_use]
    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.results.iter().filter(|r| r.is_error()).count()
    }

    /// Split into the owned parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<RuleResult>, ExitCriteria) {
        (self.results, self.exit_criteria)
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exit_criteria {
            ExitCriteria::NormalExit => write!(f, "exit: normal")?,
            ExitCriteria::EarlyExit { result } => {
                write!(f, "exit: early at {}", result.rule_id())?;
            }
        }
        write!(f, ", results: [")?;
        for (i, r) in self.results.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, "]")
    }
}
