use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offerings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offerings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // One offering per customer.
                    .col(
                        ColumnDef::new(Offerings::CustomerId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Offerings::Table, Offerings::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offerings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Offerings {
    Table,
    Id,
    CustomerId,
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
}
