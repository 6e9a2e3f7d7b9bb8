use std::fmt;

use super::error::EvaluationError;
use super::expr::Expr;
use super::facts::Facts;
use super::options::RuleEvaluationOptions;
use super::rule_result::RuleResult;

/// A unit of decision logic driven by an [`Engine`](super::Engine).
///
/// Implementations must be total: every failure mode is reported as
/// [`RuleResult::Error`], never as a panic. A panicking rule aborts the
/// enclosing evaluation and the panic reaches the caller unchanged.
///
/// `evaluate` receives the caller's fact set by mutable reference and may add
/// derived facts for later rules to read. It must not rely on any other
/// shared state.
pub trait Rule {
    /// Ordering key used when the engine sorts rules. Higher runs first.
    fn priority(&self) -> i64;

    fn evaluate(&self, facts: &mut Facts, options: &RuleEvaluationOptions) -> RuleResult;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn priority(&self) -> i64 {
        (**self).priority()
    }

    fn evaluate(&self, facts: &mut Facts, options: &RuleEvaluationOptions) -> RuleResult {
        (**self).evaluate(facts, options)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn priority(&self) -> i64 {
        (**self).priority()
    }

    fn evaluate(&self, facts: &mut Facts, options: &RuleEvaluationOptions) -> RuleResult {
        (**self).evaluate(facts, options)
    }
}

/// Per-rule settings that do not depend on the evaluation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleOptions {
    pub priority: i64,
}

/// A rule that succeeds when its condition expression holds.
///
/// ```
/// use rulebound::{ConditionRule, Facts, Rule, RuleEvaluationOptions, fact};
///
/// let adult = ConditionRule::new("adult", fact("age").gte(18_i64)).with_priority(10);
/// let mut facts = Facts::new().set("age", 30_i64);
/// assert!(adult.evaluate(&mut facts, &RuleEvaluationOptions::default()).is_success());
/// ```
#[derive(Debug, Clone)]
pub struct ConditionRule {
    pub id: String,
    pub condition: Expr,
    pub options: RuleOptions,
}

impl ConditionRule {
    #[must_use]
    pub fn new(id: &str, condition: Expr) -> Self {
        Self {
            id: id.to_owned(),
            condition,
            options: RuleOptions::default(),
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.options.priority = priority;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }
}

impl Rule for ConditionRule {
    fn priority(&self) -> i64 {
        self.options.priority
    }

    fn evaluate(&self, facts: &mut Facts, options: &RuleEvaluationOptions) -> RuleResult {
        let mut trace = Vec::new();
        let outcome = crate::evaluate::eval_condition(&self.condition, facts, options, &mut trace);
        crate::evaluate::conclude(&self.id, outcome, trace, facts, options)
    }
}

/// A rule backed by a closure, for logic that does not fit an [`Expr`].
///
/// The closure decides `Ok(true)` for success, `Ok(false)` for failure, or
/// returns an error. It may write derived facts.
pub struct FnRule<F> {
    id: String,
    priority: i64,
    f: F,
}

impl<F> FnRule<F>
where
    F: Fn(&mut Facts, &RuleEvaluationOptions) -> Result<bool, EvaluationError>,
{
    pub fn new(id: &str, priority: i64, f: F) -> Self {
        Self {
            id: id.to_owned(),
            priority,
            f,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&mut Facts, &RuleEvaluationOptions) -> Result<bool, EvaluationError>,
{
    fn priority(&self) -> i64 {
        self.priority
    }

    fn evaluate(&self, facts: &mut Facts, options: &RuleEvaluationOptions) -> RuleResult {
        let outcome = (self.f)(facts, options);
        crate::evaluate::conclude(&self.id, outcome, Vec::new(), facts, options)
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
