//! Migration: Create the cases table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cases::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cases::CaseNumber).string().not_null())
                    .col(ColumnDef::new(Cases::ClientName).string().not_null())
                    .col(ColumnDef::new(Cases::CaseType).string().not_null())
                    .col(ColumnDef::new(Cases::HearingDate).string().not_null())
                    .col(ColumnDef::new(Cases::Status).string().not_null())
                    .col(
                        ColumnDef::new(Cases::Document)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboard counts filter on status
        manager
            .create_index(
                Index::create()
                    .name("idx_cases_status")
                    .table(Cases::Table)
                    .col(Cases::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_cases_status")
                    .table(Cases::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Cases::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cases {
    Table,
    Id,
    CaseNumber,
    ClientName,
    CaseType,
    HearingDate,
    Status,
    Document,
}
