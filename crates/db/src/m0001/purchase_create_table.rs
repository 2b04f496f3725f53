use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::Purchase;

pub struct Operation;

fn create_purchase_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Purchase::Table)
        .col(
            ColumnDef::new(Purchase::Username)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(Purchase::CourseId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Purchase::CreatedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(Purchase::Username)
                .col(Purchase::CourseId),
        )
        .to_owned()
}

fn drop_purchase_table_statement() -> TableDropStatement {
    Table::drop().table(Purchase::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement =
            create_purchase_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_purchase_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
