//! Database operations for the parent/child links between categories.

use rusqlite::{Connection, params};

use crate::{
    Error,
    category::{Category, CategoryId, map_row},
};

/// Check whether `child_id` is linked as a subcategory of `parent_id`.
///
/// Links are directed, so this says nothing about `parent_id` being a
/// subcategory of `child_id`.
pub fn is_child_category(
    parent_id: CategoryId,
    child_id: CategoryId,
    connection: &Connection,
) -> Result<bool, Error> {
    connection
        .prepare(
            "SELECT EXISTS(
                SELECT 1 FROM category_child WHERE parent_id = ?1 AND child_id = ?2
            );",
        )?
        .query_row(params![parent_id, child_id], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Link `child_id` as a subcategory of `parent_id`.
///
/// A category may be linked to itself; no cycle checks are made.
///
/// # Errors
/// Returns [Error::AlreadySubcategory] if the link already exists.
pub fn add_child_category(
    parent_id: CategoryId,
    child_id: CategoryId,
    connection: &Connection,
) -> Result<(), Error> {
    connection
        .execute(
            "INSERT INTO category_child (parent_id, child_id) VALUES (?1, ?2);",
            params![parent_id, child_id],
        )
        .map_err(|error| match error {
            // Code 1555 occurs when a PRIMARY KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 1555 => {
                Error::AlreadySubcategory {
                    parent_id,
                    child_id,
                }
            }
            error => error.into(),
        })?;

    Ok(())
}

/// Remove the link between `parent_id` and its subcategory `child_id`.
///
/// # Errors
/// Returns [Error::NotSubcategory] if there was no such link.
pub fn remove_child_category(
    parent_id: CategoryId,
    child_id: CategoryId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM category_child WHERE parent_id = ?1 AND child_id = ?2;",
        params![parent_id, child_id],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotSubcategory {
            parent_id,
            child_id,
        });
    }

    Ok(())
}

/// Retrieve the subcategories of `parent_id` ordered by ID.
pub fn get_child_categories(
    parent_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    connection
        .prepare(
            "SELECT category.id, category.name FROM category
            INNER JOIN category_child ON category.id = category_child.child_id
            WHERE category_child.parent_id = ?1
            ORDER BY category.id ASC;",
        )?
        .query_map([parent_id], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Initialize the table of parent/child links.
///
/// Links are removed along with either of their categories.
pub fn create_subcategory_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category_child (
            parent_id INTEGER NOT NULL,
            child_id INTEGER NOT NULL,
            PRIMARY KEY (parent_id, child_id),
            FOREIGN KEY(parent_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY(child_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_category_child_child_id ON category_child(child_id);",
    )?;

    Ok(())
}
