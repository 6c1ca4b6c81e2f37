use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a submission during the evaluation lifecycle.
///
/// The `status` column stores the PascalCase string form. `Submitted` and
/// `Running` are anticipated states; no transition logic lives in this crate,
/// the evaluation pipeline owns whatever ordering exists between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Uploaded, waiting to be picked up by the evaluation pipeline.
    Submitted,
    /// Evaluation in progress.
    Running,
    /// Evaluated; feedback carries a success report.
    Finished,
    /// Evaluation aborted; feedback carries an error message.
    Failed,
}

impl SubmissionStatus {
    /// Returns true once the evaluation pipeline is done with the submission.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished | Self::Failed)
    }

    /// All possible status values.
    pub const ALL: &'static [SubmissionStatus] =
        &[Self::Submitted, Self::Running, Self::Finished, Self::Failed];

    /// Returns the string representation (PascalCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Running => "Running",
            Self::Finished => "Finished",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Submitted
    }
}

/// Error when parsing an invalid status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    invalid: String,
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid status '{}'. Valid values: {}",
            self.invalid,
            SubmissionStatus::ALL
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for SubmissionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" => Ok(Self::Submitted),
            "Running" => Ok(Self::Running),
            "Finished" => Ok(Self::Finished),
            "Failed" => Ok(Self::Failed),
            _ => Err(ParseStatusError {
                invalid: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Finished".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Finished
        );
        assert!("Done".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn test_is_final() {
        assert!(!SubmissionStatus::Submitted.is_final());
        assert!(!SubmissionStatus::Running.is_final());
        assert!(SubmissionStatus::Finished.is_final());
        assert!(SubmissionStatus::Failed.is_final());
    }

    #[test]
    fn test_display_matches_column_values() {
        // These strings are what the sample data writes into the `status`
        // column; keep them stable.
        assert_eq!(SubmissionStatus::Finished.to_string(), "Finished");
        assert_eq!(SubmissionStatus::Failed.to_string(), "Failed");
    }
}
