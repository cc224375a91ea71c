//! Parent/child associations between categories.
//!
//! A category may have any number of subcategories and may itself be a
//! subcategory of any number of parents.

mod add;
mod db;
mod list;
mod remove;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use add::add_subcategory_endpoint;
pub use db::{
    add_child_category, create_subcategory_table, get_child_categories, is_child_category,
    remove_child_category,
};
pub use list::list_subcategories_endpoint;
pub use remove::remove_subcategory_endpoint;

/// The state needed by the subcategory endpoints.
#[derive(Debug, Clone)]
pub struct SubcategoryState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SubcategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
