use sea_orm::entity::prelude::*;

/// One generated coupon code. `used`/`used_at` are reserved for redemption and
/// are never written by the service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub coupon_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub used: bool,
    pub used_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
