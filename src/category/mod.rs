//! Catalog categories.

mod create;
mod db;
mod domain;
mod get;
mod list;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use create::create_category_endpoint;
pub use db::{create_category, create_category_table, get_all_categories, get_category};
pub(crate) use db::map_row;
pub use domain::{Category, CategoryData, CategoryId, CategoryName};
pub use get::get_category_endpoint;
pub use list::list_categories_endpoint;

/// The state needed by the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
