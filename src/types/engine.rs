use std::fmt;

use tracing::debug;

use super::evaluation_result::EvaluationResult;
use super::facts::Facts;
use super::options::{EngineEvaluationOptions, EngineOptions};
use super::rule::Rule;

/// An ordered, immutable collection of rules plus the policy used to run them.
///
/// The rule order is fixed at construction. With
/// [`sort_rules_by_priority`](EngineOptions::sort_rules_by_priority) the rules
/// are sorted once, highest priority first, keeping equal priorities in the
/// order they were supplied.
///
/// Evaluation takes `&self`, so one engine can serve many threads (behind
/// `Arc`) as long as its rules are `Sync`. Each call needs its own [`Facts`];
/// rules may write to it and later rules see those writes.
///
/// # Example
///
/// ```
/// use rulebound::{ConditionRule, Engine, EngineOptions, EvaluationType, Facts, fact};
///
/// let engine = Engine::with_options(
///     "checkout",
///     vec![
///         ConditionRule::new("not_banned", !fact("user.banned").eq(true)).with_priority(10),
///         ConditionRule::new("adult", fact("user.age").gte(18_i64)),
///     ],
///     EngineOptions::new()
///         .sort_rules_by_priority(true)
///         .evaluation_type(EvaluationType::FirstFailure),
/// );
///
/// let mut facts = Facts::new().set("user.banned", false).set("user.age", 16_i64);
/// let result = engine.evaluate(&mut facts);
/// assert!(result.exit_criteria().is_early());
/// assert_eq!(result.evaluation_order(), vec!["not_banned", "adult"]);
/// ```
pub struct Engine<R> {
    id: String,
    rules: Vec<R>,
    options: EngineOptions,
}

impl<R: Rule> Engine<R> {
    /// Build an engine with default options: caller order, no short-circuit.
    pub fn new(id: impl Into<String>, rules: Vec<R>) -> Self {
        Self::with_options(id, rules, EngineOptions::default())
    }

    pub fn with_options(id: impl Into<String>, mut rules: Vec<R>, options: EngineOptions) -> Self {
        let id = id.into();
        if options.sort_rules_by_priority {
            // `sort_by` is stable, so ties keep their input order
            rules.sort_by(|a, b| b.priority().cmp(&a.priority()));
            debug!(engine_id = %id, rules = rules.len(), "rules sorted by priority");
        }
        Self { id, rules, options }
    }

    /// Evaluate every rule in order against `facts` with default evaluation options.
    pub fn evaluate(&self, facts: &mut Facts) -> EvaluationResult {
        self.evaluate_with(facts, &EngineEvaluationOptions::default())
    }

    /// Evaluate the rules in order against `facts`.
    ///
    /// After each rule the configured
    /// [`EvaluationType`](super::EvaluationType) decides whether to stop. The
    /// returned result holds one entry per rule that actually ran.
    pub fn evaluate_with(
        &self,
        facts: &mut Facts,
        options: &EngineEvaluationOptions,
    ) -> EvaluationResult {
        crate::evaluate::evaluate(
            &self.id,
            &self.rules,
            self.options.evaluation_type,
            facts,
            options,
        )
    }
}

impl<R> Engine<R> {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R: fmt::Debug> fmt::Debug for Engine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("id", &self.id)
            .field("rules", &self.rules)
            .field("options", &self.options)
            .finish()
    }
}

impl<R> fmt::Display for Engine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Engine({}, {} rules, {})",
            self.id,
            self.rules.len(),
            self.options.evaluation_type,
        )
    }
}
