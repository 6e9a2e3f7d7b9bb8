use std::fmt;
use std::str::FromStr;

use super::rule_result::{Classification, RuleResult};
use crate::EngineError;

/// Short-circuit policy consulted after every rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EvaluationType {
    /// Run every rule.
    #[default]
    None,
    /// Stop after the first `Error` result.
    FirstError,
    /// Stop after the first `Failure` result.
    FirstFailure,
    /// Stop after the first `Success` result.
    FirstSuccess,
}

impl EvaluationType {
    /// The classification that ends evaluation under this policy, if any.
    #[must_use]
    pub fn trigger(self) -> Option<Classification> {
        match self {
            EvaluationType::None => None,
            EvaluationType::FirstError => Some(Classification::Error),
            EvaluationType::FirstFailure => Some(Classification::Failure),
            EvaluationType::FirstSuccess => Some(Classification::Success),
        }
    }

    /// Whether evaluation stops right after `result`.
    #[must_use]
    pub fn halts_on(self, result: &RuleResult) -> bool {
        self.trigger() == Some(result.classification())
    }
}

impl fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationType::None => write!(f, "none"),
            EvaluationType::FirstError => write!(f, "first_error"),
            EvaluationType::FirstFailure => write!(f, "first_failure"),
            EvaluationType::FirstSuccess => write!(f, "first_success"),
        }
    }
}

impl FromStr for EvaluationType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(EvaluationType::None),
            "first_error" => Ok(EvaluationType::FirstError),
            "first_failure" => Ok(EvaluationType::FirstFailure),
            "first_success" => Ok(EvaluationType::FirstSuccess),
            _ => Err(EngineError::UnknownEvaluationType {
                value: s.to_owned(),
            }),
        }
    }
}

/// How a comparison against a missing or undefined fact is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UndefinedFactEvaluationType {
    /// The comparison is false.
    #[default]
    EvaluateToFalse,
    /// The rule fails with [`EvaluationError::UndefinedFact`](crate::EvaluationError::UndefinedFact).
    EvaluateToError,
}

impl fmt::Display for UndefinedFactEvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedFactEvaluationType::EvaluateToFalse => write!(f, "evaluate_to_false"),
            UndefinedFactEvaluationType::EvaluateToError => write!(f, "evaluate_to_error"),
        }
    }
}

impl FromStr for UndefinedFactEvaluationType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "evaluate_to_false" => Ok(UndefinedFactEvaluationType::EvaluateToFalse),
            "evaluate_to_error" => Ok(UndefinedFactEvaluationType::EvaluateToError),
            _ => Err(EngineError::UnknownUndefinedFactPolicy {
                value: s.to_owned(),
            }),
        }
    }
}

/// Configuration fixed when an [`Engine`](super::Engine) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptions {
    /// Reorder rules once, descending by priority, keeping ties in input order.
    pub sort_rules_by_priority: bool,
    pub evaluation_type: EvaluationType,
}

impl EngineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sort_rules_by_priority(mut self, sort: bool) -> Self {
        self.sort_rules_by_priority = sort;
        self
    }

    #[must_use]
    pub fn evaluation_type(mut self, evaluation_type: EvaluationType) -> Self {
        self.evaluation_type = evaluation_type;
        self
    }
}

/// Per-call options passed to [`Engine::evaluate_with()`](super::Engine::evaluate_with).
///
/// Forwarded unchanged to every rule as [`RuleEvaluationOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineEvaluationOptions {
    pub upcast_fact_values: bool,
    pub undefined_fact_evaluation_type: UndefinedFactEvaluationType,
    pub store_rule_evaluation_results: bool,
    pub detailed_evaluation_results: bool,
}

impl EngineEvaluationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn upcast_fact_values(mut self, upcast: bool) -> Self {
        self.upcast_fact_values = upcast;
        self
    }

    #[must_use]
    pub fn undefined_fact_evaluation_type(mut self, policy: UndefinedFactEvaluationType) -> Self {
        self.undefined_fact_evaluation_type = policy;
        self
    }

    #[must_use]
    pub fn store_rule_evaluation_results(mut self, store: bool) -> Self {
        self.store_rule_evaluation_results = store;
        self
    }

    #[must_use]
    pub fn detailed_evaluation_results(mut self, detailed: bool) -> Self {
        self.detailed_evaluation_results = detailed;
        self
    }
}

/// Options a [`Rule`](super::Rule) receives for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleEvaluationOptions {
    /// Widen `Int` facts or operands to `f64` when compared against a `Float`.
    /// When false, mixed int/float comparisons are a type mismatch error.
    pub upcast_fact_values: bool,
    pub undefined_fact_evaluation_type: UndefinedFactEvaluationType,
    /// Write each rule's success/failure back into the facts under its id.
    pub store_rule_evaluation_results: bool,
    /// Record every comparison in the result's trace.
    pub detailed_evaluation_results: bool,
}

impl From<&EngineEvaluationOptions> for RuleEvaluationOptions {
    fn from(options: &EngineEvaluationOptions) -> Self {
        RuleEvaluationOptions {
            upcast_fact_values: options.upcast_fact_values,
            undefined_fact_evaluation_type: options.undefined_fact_evaluation_type,
            store_rule_evaluation_results: options.store_rule_evaluation_results,
            detailed_evaluation_results: options.detailed_evaluation_results,
        }
    }
}
