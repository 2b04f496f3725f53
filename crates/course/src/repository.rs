use coursehub_db::table::{Course as CourseTable, Purchase};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

#[derive(FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub image_link: String,
    pub published: bool,
    pub created_by: String,
}

fn select_courses() -> SelectStatement {
    Query::select()
        .columns([
            (CourseTable::Table, CourseTable::Id),
            (CourseTable::Table, CourseTable::Title),
            (CourseTable::Table, CourseTable::Description),
            (CourseTable::Table, CourseTable::Price),
            (CourseTable::Table, CourseTable::ImageLink),
            (CourseTable::Table, CourseTable::Published),
            (CourseTable::Table, CourseTable::CreatedBy),
        ])
        .from(CourseTable::Table)
        .order_by((CourseTable::Table, CourseTable::Id), Order::Asc)
        .to_owned()
}

async fn fetch_all(
    pool: &SqlitePool,
    statement: SelectStatement,
) -> coursehub_shared::Result<Vec<Course>> {
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Course, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn find(
    pool: &SqlitePool,
    id: &str,
) -> coursehub_shared::Result<Option<Course>> {
    let statement = select_courses()
        .and_where(Expr::col((CourseTable::Table, CourseTable::Id)).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, Course, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn list(
    pool: &SqlitePool,
    published_only: bool,
) -> coursehub_shared::Result<Vec<Course>> {
    let mut statement = select_courses();

    if published_only {
        statement.and_where(Expr::col((CourseTable::Table, CourseTable::Published)).eq(true));
    }

    fetch_all(pool, statement).await
}

pub(crate) async fn list_purchased(
    pool: &SqlitePool,
    username: &str,
) -> coursehub_shared::Result<Vec<Course>> {
    let statement = select_courses()
        .inner_join(
            Purchase::Table,
            Expr::col((Purchase::Table, Purchase::CourseId))
                .equals((CourseTable::Table, CourseTable::Id)),
        )
        .and_where(Expr::col((Purchase::Table, Purchase::Username)).eq(username))
        .to_owned();

    fetch_all(pool, statement).await
}

pub(crate) async fn create(pool: &SqlitePool, course: &Course) -> coursehub_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(CourseTable::Table)
        .columns([
            CourseTable::Id,
            CourseTable::Title,
            CourseTable::Description,
            CourseTable::Price,
            CourseTable::ImageLink,
            CourseTable::Published,
            CourseTable::CreatedBy,
            CourseTable::CreatedAt,
        ])
        .values_panic([
            course.id.to_owned().into(),
            course.title.to_owned().into(),
            course.description.to_owned().into(),
            course.price.into(),
            course.image_link.to_owned().into(),
            course.published.into(),
            course.created_by.to_owned().into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Fails with `DuplicateKey` when the pair is already recorded.
pub(crate) async fn create_purchase(
    pool: &SqlitePool,
    username: &str,
    course_id: &str,
) -> coursehub_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(Purchase::Table)
        .columns([Purchase::Username, Purchase::CourseId, Purchase::CreatedAt])
        .values_panic([username.into(), course_id.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
