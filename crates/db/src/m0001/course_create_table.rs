use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Course;

pub struct Operation;

fn create_course_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Course::Table)
        .col(
            ColumnDef::new(Course::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Course::Title)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(Course::Description).text().not_null())
        .col(ColumnDef::new(Course::Price).big_integer().not_null())
        .col(ColumnDef::new(Course::ImageLink).string().not_null())
        .col(
            ColumnDef::new(Course::Published)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Course::CreatedBy)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(ColumnDef::new(Course::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_course_table_statement() -> TableDropStatement {
    Table::drop().table(Course::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_course_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_course_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
