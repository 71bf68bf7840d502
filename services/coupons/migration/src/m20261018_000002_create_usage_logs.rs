use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to coupons: a log row exists even when the coupon insert was ignored.
        manager
            .create_table(
                Table::create()
                    .table(UsageLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsageLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UsageLogs::CouponCode).string_len(50).not_null())
                    .col(
                        ColumnDef::new(UsageLogs::GeneratedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(UsageLogs::IpAddress).string_len(45))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsageLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UsageLogs {
    Table,
    Id,
    CouponCode,
    GeneratedAt,
    IpAddress,
}
