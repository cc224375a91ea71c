//! Single category endpoint.

use axum::{Json, extract::State};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryState, get_category},
    extract::ApiPath,
};

/// Get the category with `category_id`, or 404 naming the ID if it does not exist.
pub async fn get_category_endpoint(
    ApiPath(category_id): ApiPath<CategoryId>,
    State(state): State<CategoryState>,
) -> Result<Json<Category>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    get_category(category_id, &connection).map(Json)
}
