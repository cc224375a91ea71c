//! Database initialisation.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, subcategory::create_subcategory_table};

/// Create the tables for the domain models.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an error if a table could not be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Foreign key enforcement is per connection and cannot be changed inside a transaction.
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_subcategory_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
