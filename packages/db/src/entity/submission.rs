use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub submission_id: i32,

    pub model_name: String,
    /// One of: Submitted, Running, Finished, Failed.
    /// See [`crate::submission_status::SubmissionStatus`].
    pub status: String,

    /// Object-storage keys for the uploaded model file and its class index.
    /// Opaque here; only the evaluation pipeline dereferences them.
    pub s3_model_key: String,
    pub s3_index_key: String,

    pub created_at: DateTimeUtc,

    /// Evaluation result, NULL until the pipeline writes one back.
    /// Stored shapes are described by [`crate::feedback::Feedback`].
    #[sea_orm(column_type = "JsonBinary")]
    pub feedback: Option<Json>,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "user_id")]
    pub user: HasOne<super::user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
