mod admin_create_table;
mod course_create_table;
mod purchase_create_table;
mod user_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

// The username primary key on both account tables is what lets the store
// reject the loser of two concurrent signups for the same name.
sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0001",
    vec_box![],
    vec_box![
        admin_create_table::Operation,
        user_create_table::Operation,
        course_create_table::Operation,
        purchase_create_table::Operation,
    ]
);
