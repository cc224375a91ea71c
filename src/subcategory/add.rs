//! Endpoint for linking a subcategory to a parent category.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    Error,
    category::{Category, CategoryId, get_category},
    extract::ApiPath,
    subcategory::{SubcategoryState, add_child_category, is_child_category},
};

/// Link `child_id` as a subcategory of `parent_id`.
///
/// Responds with 201 and the child category on success, 404 naming whichever
/// category is missing (the parent is checked first), and 400 if the link
/// already exists.
///
/// The database lock is held from the lookups through to the insert, so two
/// concurrent requests cannot both pass the existence check.
pub async fn add_subcategory_endpoint(
    ApiPath((parent_id, child_id)): ApiPath<(CategoryId, CategoryId)>,
    State(state): State<SubcategoryState>,
) -> Result<(StatusCode, Json<Category>), Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let parent = get_category(parent_id, &connection)?;
    let child = get_category(child_id, &connection)?;

    if is_child_category(parent.id, child.id, &connection)? {
        return Err(Error::AlreadySubcategory {
            parent_id: parent.id,
            child_id: child.id,
        });
    }

    add_child_category(parent.id, child.id, &connection)?;
    tracing::info!("Added category {} as a subcategory of {}", child.id, parent.id);

    Ok((StatusCode::CREATED, Json(child)))
}
