use sea_orm::*;
use sea_query::{PostgresQueryBuilder, Table};
use tracing::info;

use crate::entity::{submission, user};
use crate::feedback::{AttackResult, EvaluationReport, Feedback};
use crate::submission_status::SubmissionStatus;

/// Demo accounts inserted by `init`: (nickname, email, password).
const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("Dave", "dave@gmail.com", "aircrash"),
    ("Nancy", "nrmcmu@gmail.com", "H2F0WGDF"),
    ("Andrew", "andrew.mellinger@gmail.com", "S2GHZ5UI"),
    ("Oren", "owright@sei.cmu.edu", "7RHX95O5"),
    ("Gregory", "laidlags@udmercy.edu", "EAHDTU3P"),
];

/// Error message attached to the failed sample submission.
const OVERSIZED_MODEL_ERROR: &str = "Model file too large.";

/// The success report attached to the finished sample submission.
fn sample_feedback() -> EvaluationReport {
    let details = [
        ("CLEAN", "95%", "80.05%"),
        ("FGSM", "95%", "80.05%"),
        ("MI-FGSM", "91%", "92.10%"),
        ("I-FGSM", "93.7%", "94.10%"),
    ]
    .into_iter()
    .map(|(attack_method, confidence, accuracy)| AttackResult {
        attack_method: attack_method.to_string(),
        confidence: confidence.to_string(),
        accuracy: accuracy.to_string(),
    })
    .collect();

    EvaluationReport {
        rating: "Good".to_string(),
        robustness: "9".to_string(),
        details,
        suggestion: "Your model can be made more robust by training it with adversarial examples."
            .to_string(),
    }
}

/// Drop both tables and recreate them from the entity definitions.
pub async fn reset_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Submission first, it carries the foreign key.
    for stmt in [
        Table::drop()
            .table(submission::Entity)
            .if_exists()
            .to_string(PostgresQueryBuilder),
        Table::drop()
            .table(user::Entity)
            .if_exists()
            .to_string(PostgresQueryBuilder),
    ] {
        db.execute_unprepared(&stmt).await?;
    }
    info!("Dropped existing tables");

    db.get_schema_registry("db::entity::*").sync(db).await?;
    info!("Created tables from entity definitions");

    Ok(())
}

/// Insert the fixed sample rows: 5 users, then 2 submissions owned by the
/// first user. One transaction, one commit; any failure rolls everything back
/// and propagates.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    let users = SAMPLE_USERS
        .iter()
        .map(|&(nickname, email, password)| user::ActiveModel {
            nickname: Set(nickname.to_string()),
            email: Set(email.to_string()),
            password: Set(password.to_string()),
            ..Default::default()
        });
    user::Entity::insert_many(users).exec(&txn).await?;
    info!("Seeded {} users", SAMPLE_USERS.len());

    // Freshly recreated tables start their sequences at 1, so the first
    // sample user owns both submissions.
    let now = chrono::Utc::now();
    let finished = submission::ActiveModel {
        model_name: Set("VGG-16 v1.0".to_string()),
        status: Set(SubmissionStatus::Finished.to_string()),
        s3_model_key: Set("model.h5".to_string()),
        s3_index_key: Set("index.json".to_string()),
        created_at: Set(now),
        feedback: Set(Feedback::Report(sample_feedback()).to_column()),
        user_id: Set(1),
        ..Default::default()
    };
    let failed = submission::ActiveModel {
        model_name: Set("VGG-16 v2.0".to_string()),
        status: Set(SubmissionStatus::Failed.to_string()),
        s3_model_key: Set("model.h5".to_string()),
        s3_index_key: Set("index.json".to_string()),
        created_at: Set(now),
        feedback: Set(Feedback::Error {
            message: OVERSIZED_MODEL_ERROR.to_string(),
        }
        .to_column()),
        user_id: Set(1),
        ..Default::default()
    };
    submission::Entity::insert_many([finished, failed])
        .exec(&txn)
        .await?;
    info!("Seeded 2 submissions for user 1");

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_users_are_five_with_unique_emails() {
        assert_eq!(SAMPLE_USERS.len(), 5);

        let emails: HashSet<_> = SAMPLE_USERS.iter().map(|&(_, email, _)| email).collect();
        assert_eq!(emails.len(), SAMPLE_USERS.len());

        let dave = SAMPLE_USERS
            .iter()
            .find(|&&(_, email, _)| email == "dave@gmail.com")
            .unwrap();
        assert_eq!(dave.0, "Dave");
    }

    #[test]
    fn sample_feedback_matches_the_fixed_document() {
        let report = sample_feedback();
        assert_eq!(report.rating, "Good");
        assert_eq!(report.robustness, "9");
        assert_eq!(report.details.len(), 4);
        assert!(!report.suggestion.is_empty());

        let methods: Vec<_> = report
            .details
            .iter()
            .map(|d| d.attack_method.as_str())
            .collect();
        assert_eq!(methods, ["CLEAN", "FGSM", "MI-FGSM", "I-FGSM"]);
    }

    #[test]
    fn error_document_shape_is_stable() {
        let stored = Feedback::Error {
            message: OVERSIZED_MODEL_ERROR.to_string(),
        }
        .to_column()
        .unwrap();
        assert_eq!(stored, serde_json::json!({"error": "Model file too large."}));
    }
}
