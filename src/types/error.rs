use thiserror::Error;

/// Why a rule could not reach a success/failure decision.
///
/// Carried by [`RuleResult::Error`](super::RuleResult::Error); evaluation never
/// returns these through `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EvaluationError {
    #[error("fact '{fact}' is undefined")]
    UndefinedFact { fact: String },

    #[error("fact '{fact}' has type {actual}, expected {expected}")]
    TypeMismatch {
        fact: String,
        expected: String,
        actual: String,
    },

    #[error("operator '{op}' is not supported for fact '{fact}' of type {value_type}")]
    UnsupportedOperator {
        fact: String,
        op: String,
        value_type: String,
    },

    #[error("{message}")]
    Custom { message: String },
}

impl EvaluationError {
    /// Free-form error for rules with their own failure modes.
    pub fn custom(message: impl Into<String>) -> Self {
        EvaluationError::Custom {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_fact_message() {
        let err = EvaluationError::UndefinedFact {
            fact: "user.age".into(),
        };
        assert_eq!(err.to_string(), "fact 'user.age' is undefined");
    }

    #[test]
    fn type_mismatch_message() {
        let err = EvaluationError::TypeMismatch {
            fact: "score".into(),
            expected: "float".into(),
            actual: "int".into(),
        };
        assert_eq!(
            err.to_string(),
            "fact 'score' has type int, expected float"
        );
    }

    #[test]
    fn unsupported_operator_message() {
        let err = EvaluationError::UnsupportedOperator {
            fact: "banned".into(),
            op: ">".into(),
            value_type: "bool".into(),
        };
        assert_eq!(
            err.to_string(),
            "operator '>' is not supported for fact 'banned' of type bool"
        );
    }

    #[test]
    fn custom_message() {
        let err = EvaluationError::custom("quota service unavailable");
        assert_eq!(err.to_string(), "quota service unavailable");
    }
}
