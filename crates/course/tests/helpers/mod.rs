#![allow(dead_code)]

use std::{path::PathBuf, str::FromStr};

use coursehub_course::CreateCourseInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    coursehub_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub fn course_input(title: &str, published: bool) -> CreateCourseInput {
    CreateCourseInput {
        title: Some(title.to_owned()),
        description: Some(format!("All about {title}")),
        price: Some(4999),
        image_link: Some(format!("https://cdn.coursehub.localhost/{title}.png")),
        published: Some(published),
    }
}
