use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Loans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Loans::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // System-wide unique loan number, distinct from the row id.
                    .col(
                        ColumnDef::new(Loans::Number)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Loans::CustomerId).big_integer().not_null())
                    .col(ColumnDef::new(Loans::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Loans::OfferingId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Loans::Table, Loans::OfferingId)
                            .to(Offerings::Table, Offerings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_loans_offering_id")
                    .table(Loans::Table)
                    .col(Loans::OfferingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Loans::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Loans {
    Table,
    Id,
    Number,
    CustomerId,
    Amount,
    OfferingId,
}

#[derive(Iden)]
enum Offerings {
    Table,
    Id,
}
