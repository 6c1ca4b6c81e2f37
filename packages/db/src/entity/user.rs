use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,

    pub nickname: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Plaintext. The legacy web app compares passwords verbatim, so the
    /// sample rows keep the same (unsafe) storage. Do not reuse this scheme.
    pub password: String,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::submission::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
