use coursehub_shared::Error;
use serde::Deserialize;
use sqlx::SqlitePool;
use ulid::Ulid;
use validator::Validate;

use crate::repository::{self, Course};

#[derive(Validate, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseInput {
    #[validate(required, length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(required)]
    pub description: Option<String>,
    #[validate(required, range(min = 0))]
    pub price: Option<i64>,
    #[validate(required, length(min = 1))]
    pub image_link: Option<String>,
    pub published: Option<bool>,
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Returns the new course id.
    pub async fn create(
        &self,
        created_by: &str,
        input: CreateCourseInput,
    ) -> coursehub_shared::Result<String> {
        input.validate()?;

        let (Some(title), Some(description), Some(price), Some(image_link)) = (
            input.title,
            input.description,
            input.price,
            input.image_link,
        ) else {
            return Err(Error::InvalidInput);
        };

        let course = Course {
            id: Ulid::new().to_string(),
            title,
            description,
            price,
            image_link,
            published: input.published.unwrap_or(true),
            created_by: created_by.to_owned(),
        };

        repository::create(&self.0, &course).await?;

        tracing::debug!(course_id = %course.id, created_by = %created_by, "course created");

        Ok(course.id)
    }

    /// Every course, published or not.
    pub async fn list_all(&self) -> coursehub_shared::Result<Vec<Course>> {
        repository::list(&self.0, false).await
    }

    pub async fn list_published(&self) -> coursehub_shared::Result<Vec<Course>> {
        repository::list(&self.0, true).await
    }

    /// Buying the same course twice is a no-op. Unpublished courses cannot
    /// be bought.
    pub async fn purchase(
        &self,
        username: &str,
        course_id: &str,
    ) -> coursehub_shared::Result<()> {
        let Some(course) = repository::find(&self.0, course_id).await? else {
            return Err(Error::NotFound);
        };

        if !course.published {
            return Err(Error::NotFound);
        }

        match repository::create_purchase(&self.0, username, &course.id).await {
            Err(Error::DuplicateKey) => Ok(()),
            result => result,
        }
    }

    pub async fn list_purchased(
        &self,
        username: &str,
    ) -> coursehub_shared::Result<Vec<Course>> {
        repository::list_purchased(&self.0, username).await
    }
}
