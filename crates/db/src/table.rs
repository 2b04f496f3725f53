use sea_query::Iden;

/// Columns shared by the `admin` and `user` tables.
#[derive(Iden, Clone)]
pub enum Account {
    Username,
    Password,
    Name,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Admin {
    Table,
}

#[derive(Iden, Clone)]
pub enum User {
    Table,
}

#[derive(Iden, Clone)]
pub enum Course {
    Table,
    Id,
    Title,
    Description,
    Price,
    ImageLink,
    Published,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Purchase {
    Table,
    Username,
    CourseId,
    CreatedAt,
}
