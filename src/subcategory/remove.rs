//! Endpoint for unlinking a subcategory from a parent category.

use axum::{extract::State, http::StatusCode};

use crate::{
    Error,
    category::{CategoryId, get_category},
    extract::ApiPath,
    subcategory::{SubcategoryState, is_child_category, remove_child_category},
};

/// Remove the link between `parent_id` and its subcategory `child_id`.
///
/// Responds with 204 and an empty body on success, 404 naming whichever
/// category is missing, and 400 if `child_id` is not a subcategory of
/// `parent_id`. Neither category is deleted.
pub async fn remove_subcategory_endpoint(
    ApiPath((parent_id, child_id)): ApiPath<(CategoryId, CategoryId)>,
    State(state): State<SubcategoryState>,
) -> Result<StatusCode, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let parent = get_category(parent_id, &connection)?;
    let child = get_category(child_id, &connection)?;

    if !is_child_category(parent.id, child.id, &connection)? {
        return Err(Error::NotSubcategory {
            parent_id: parent.id,
            child_id: child.id,
        });
    }

    remove_child_category(parent.id, child.id, &connection)?;
    tracing::info!("Removed category {} from the subcategories of {}", child.id, parent.id);

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod remove_subcategory_endpoint_tests {
    use axum::{
        body::to_bytes,
        extract::State,
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        Error,
        category::get_category,
        extract::ApiPath,
        subcategory::{add_child_category, get_child_categories, remove_subcategory_endpoint},
        test_utils::{create_test_category, get_subcategory_state},
    };

    #[tokio::test]
    async fn remove_subcategory_returns_no_content() {
        let state = get_subcategory_state();
        let (parent, child) = {
            let connection = state.db_connection.lock().unwrap();
            let parent = create_test_category("Books", &connection);
            let child = create_test_category("Fiction", &connection);
            add_child_category(parent.id, child.id, &connection).unwrap();
            (parent, child)
        };

        let response =
            remove_subcategory_endpoint(ApiPath((parent.id, child.id)), State(state.clone()))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_child_categories(parent.id, &connection), Ok(vec![]));
        assert_eq!(get_category(child.id, &connection), Ok(child));
    }

    #[tokio::test]
    async fn remove_link_that_was_never_added_fails() {
        let state = get_subcategory_state();
        let (parent, child) = {
            let connection = state.db_connection.lock().unwrap();
            (
                create_test_category("Books", &connection),
                create_test_category("Fiction", &connection),
            )
        };

        let result =
            remove_subcategory_endpoint(ApiPath((parent.id, child.id)), State(state)).await;

        assert_eq!(
            result,
            Err(Error::NotSubcategory {
                parent_id: parent.id,
                child_id: child.id
            })
        );
    }

    #[tokio::test]
    async fn remove_reversed_link_fails() {
        let state = get_subcategory_state();
        let (parent, child) = {
            let connection = state.db_connection.lock().unwrap();
            let parent = create_test_category("Books", &connection);
            let child = create_test_category("Fiction", &connection);
            add_child_category(parent.id, child.id, &connection).unwrap();
            (parent, child)
        };

        let response =
            remove_subcategory_endpoint(ApiPath((child.id, parent.id)), State(state))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_parent_returns_not_found_with_parent_id() {
        let state = get_subcategory_state();
        let child = create_test_category("Fiction", &state.db_connection.lock().unwrap());
        let missing_id = child.id + 100;

        let result =
            remove_subcategory_endpoint(ApiPath((missing_id, child.id)), State(state)).await;

        assert_eq!(result, Err(Error::CategoryNotFound(missing_id)));
    }

    #[tokio::test]
    async fn unknown_child_returns_not_found_with_child_id() {
        let state = get_subcategory_state();
        let parent = create_test_category("Books", &state.db_connection.lock().unwrap());
        let missing_id = parent.id + 100;

        let result =
            remove_subcategory_endpoint(ApiPath((parent.id, missing_id)), State(state)).await;

        assert_eq!(result, Err(Error::CategoryNotFound(missing_id)));
    }
}
