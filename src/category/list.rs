//! Category listing endpoint.

use axum::{Json, extract::State};

use crate::{
    Error,
    category::{Category, CategoryState, get_all_categories},
};

/// List every category, ordered by name.
pub async fn list_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    get_all_categories(&connection).map(Json)
}
