use sea_orm::entity::prelude::*;

/// Audit row written for every generation request, whether or not the coupon
/// row itself was new. `coupon_code` is deliberately not a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usage_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub coupon_code: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub ip_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
