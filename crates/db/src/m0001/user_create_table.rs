use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::{Account, User};

pub struct Operation;

fn create_user_table_statement() -> TableCreateStatement {
    Table::create()
        .table(User::Table)
        .col(
            ColumnDef::new(Account::Username)
                .string()
                .not_null()
                .string_len(64)
                .primary_key(),
        )
        .col(ColumnDef::new(Account::Password).string().not_null())
        .col(ColumnDef::new(Account::Name).string().string_len(128))
        .col(ColumnDef::new(Account::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_user_table_statement() -> TableDropStatement {
    Table::drop().table(User::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_user_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_user_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
