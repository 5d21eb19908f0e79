use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Customers
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Customer::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Customer::Name).string().not_null())
                    .col(ColumnDef::new(Customer::Email).string())
                    .col(ColumnDef::new(Customer::SubscriptionPlan).string().not_null())
                    .col(ColumnDef::new(Customer::SubscriptionId).string().not_null())
                    .col(ColumnDef::new(Customer::ChurnScore).integer().not_null())
                    .col(ColumnDef::new(Customer::RiskLevel).string_len(10).not_null())
                    .col(ColumnDef::new(Customer::Arr).decimal_len(16, 2).not_null())
                    .col(ColumnDef::new(Customer::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Customer::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-customers-churn-score")
                    .table(Customer::Table)
                    .col(Customer::ChurnScore)
                    .to_owned(),
            )
            .await?;

        // 2. Drivers, removed together with their customer
        manager
            .create_table(
                Table::create()
                    .table(ChurnDriver::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ChurnDriver::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(ChurnDriver::CustomerId).string().not_null())
                    .col(ColumnDef::new(ChurnDriver::DriverName).string().not_null())
                    .col(ColumnDef::new(ChurnDriver::Impact).string_len(10).not_null())
                    .col(ColumnDef::new(ChurnDriver::Priority).integer().not_null())
                    .col(ColumnDef::new(ChurnDriver::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-churn-driver-customer")
                            .from(ChurnDriver::Table, ChurnDriver::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-churn-drivers-customer-priority")
                    .table(ChurnDriver::Table)
                    .col(ChurnDriver::CustomerId)
                    .col(ChurnDriver::Priority)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChurnDriver::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customer {
    #[sea_orm(iden = "customers")]
    Table,
    Id,
    Name,
    Email,
    SubscriptionPlan,
    SubscriptionId,
    ChurnScore,
    RiskLevel,
    Arr,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ChurnDriver {
    #[sea_orm(iden = "churn_drivers")]
    Table,
    Id,
    CustomerId,
    DriverName,
    Impact,
    Priority,
    CreatedAt,
}
