use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    category::{Category, CategoryName, CategoryState, create_category},
    db::initialize,
    subcategory::SubcategoryState,
};

pub(crate) fn get_test_db_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    connection
}

#[track_caller]
pub(crate) fn create_test_category(name: &str, connection: &Connection) -> Category {
    create_category(CategoryName::new_unchecked(name), connection)
        .expect("Could not create test category")
}

pub(crate) fn get_category_state() -> CategoryState {
    CategoryState {
        db_connection: Arc::new(Mutex::new(get_test_db_connection())),
    }
}

pub(crate) fn get_subcategory_state() -> SubcategoryState {
    SubcategoryState {
        db_connection: Arc::new(Mutex::new(get_test_db_connection())),
    }
}
