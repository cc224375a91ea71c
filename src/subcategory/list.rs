//! Subcategory listing endpoint.

use axum::{Json, extract::State};

use crate::{
    Error,
    category::{Category, CategoryId, get_category},
    extract::ApiPath,
    subcategory::{SubcategoryState, get_child_categories},
};

/// List the subcategories of `parent_id`.
///
/// Responds with 404 if the parent category does not exist.
pub async fn list_subcategories_endpoint(
    ApiPath(parent_id): ApiPath<CategoryId>,
    State(state): State<SubcategoryState>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let parent = get_category(parent_id, &connection)?;

    get_child_categories(parent.id, &connection).map(Json)
}
