use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One row of the per-attack-method table in a success report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    /// Adversarial perturbation technique, e.g. "FGSM". "CLEAN" means no
    /// perturbation was applied.
    pub attack_method: String,
    pub confidence: String,
    pub accuracy: String,
}

/// Success payload written back onto a submission by the evaluation pipeline.
///
/// Numeric-looking fields are strings: the pipeline formats them for display
/// ("9", "95%", "80.05%") and the web app renders them verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub rating: String,
    pub robustness: String,
    pub details: Vec<AttackResult>,
    pub suggestion: String,
}

/// Typed view of the schema-less `feedback` column.
///
/// The column predates this crate, so stored documents carry no tag and are
/// disambiguated by shape: SQL NULL, JSON null, and the empty object all mean
/// the evaluation hasn't finished; an object with an `error` key is a failed
/// run; anything else must parse as a full [`EvaluationReport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Pending,
    Report(EvaluationReport),
    Error { message: String },
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback document matches no known shape: {0}")]
    UnknownShape(#[from] serde_json::Error),
    #[error("feedback `error` key must be a string, got {0}")]
    NonStringError(Value),
}

impl Feedback {
    /// Classify a stored feedback document.
    pub fn from_column(value: Option<&Value>) -> Result<Self, FeedbackError> {
        let value = match value {
            None | Some(Value::Null) => return Ok(Self::Pending),
            Some(value) => value,
        };

        if let Value::Object(map) = value {
            if map.is_empty() {
                return Ok(Self::Pending);
            }
            if let Some(error) = map.get("error") {
                return match error {
                    Value::String(message) => Ok(Self::Error {
                        message: message.clone(),
                    }),
                    other => Err(FeedbackError::NonStringError(other.clone())),
                };
            }
        }

        let report = serde_json::from_value(value.clone())?;
        Ok(Self::Report(report))
    }

    /// Inverse of [`Feedback::from_column`]. `Pending` maps back to SQL NULL,
    /// never to an empty object.
    pub fn to_column(&self) -> Option<Value> {
        match self {
            Self::Pending => None,
            Self::Report(report) => Some(
                serde_json::to_value(report)
                    .expect("report serialization is infallible"),
            ),
            Self::Error { message } => Some(serde_json::json!({ "error": message })),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_empty_documents_are_pending() {
        assert!(Feedback::from_column(None).unwrap().is_pending());
        assert!(
            Feedback::from_column(Some(&Value::Null))
                .unwrap()
                .is_pending()
        );
        assert!(Feedback::from_column(Some(&json!({}))).unwrap().is_pending());
    }

    #[test]
    fn error_key_wins_over_report_parsing() {
        let feedback = Feedback::from_column(Some(&json!({"error": "Model file too large."})))
            .unwrap();
        assert_eq!(
            feedback,
            Feedback::Error {
                message: "Model file too large.".into()
            }
        );
    }

    #[test]
    fn success_documents_parse_into_reports() {
        let doc = json!({
            "rating": "Good",
            "robustness": "9",
            "details": [
                {"attack_method": "CLEAN", "confidence": "95%", "accuracy": "80.05%"}
            ],
            "suggestion": "Train with adversarial examples."
        });
        let Feedback::Report(report) = Feedback::from_column(Some(&doc)).unwrap() else {
            panic!("expected a success report");
        };
        assert_eq!(report.rating, "Good");
        assert_eq!(report.details[0].attack_method, "CLEAN");
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(matches!(
            Feedback::from_column(Some(&json!({"rating": "Good"}))),
            Err(FeedbackError::UnknownShape(_))
        ));
        assert!(matches!(
            Feedback::from_column(Some(&json!({"error": 42}))),
            Err(FeedbackError::NonStringError(_))
        ));
    }

    #[test]
    fn pending_round_trips_to_null_column() {
        assert_eq!(Feedback::Pending.to_column(), None);

        let error = Feedback::Error {
            message: "boom".into(),
        };
        let stored = error.to_column().unwrap();
        assert_eq!(Feedback::from_column(Some(&stored)).unwrap(), error);
    }
}
