//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName},
};

/// Create a category and return it with its generated ID.
///
/// # Errors
/// Returns [Error::DuplicateCategoryName] if a category with the same name
/// already exists, or an error if there is an SQL error.
pub fn create_category(name: CategoryName, connection: &Connection) -> Result<Category, Error> {
    connection
        .execute("INSERT INTO category (name) VALUES (?1);", (name.as_ref(),))
        .map_err(|error| match error {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 2067 => {
                Error::DuplicateCategoryName(name.to_string())
            }
            error => error.into(),
        })?;

    let id = connection.last_insert_rowid();

    Ok(Category { id, name })
}

/// Retrieve a single category by ID.
///
/// # Errors
/// Returns [Error::CategoryNotFound] with `category_id` if no such category exists.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, name FROM category WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::CategoryNotFound(category_id),
            error => error.into(),
        })
}

/// Retrieve all categories ordered alphabetically by name.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM category ORDER BY name ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );",
        (),
    )?;

    Ok(())
}

pub(crate) fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);

    Ok(Category { id, name })
}
