//! Category creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    Error,
    category::{Category, CategoryData, CategoryName, CategoryState, create_category},
    extract::ApiJson,
};

/// Handle a request to create a category.
///
/// Responds with 201 and the new category, or 400 if the name is empty or
/// already taken. A body that is not a JSON object with a `name` string is
/// rejected with a JSON error body.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    ApiJson(new_category): ApiJson<CategoryData>,
) -> Result<(StatusCode, Json<Category>), Error> {
    let name = CategoryName::new(&new_category.name)?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let category = create_category(name, &connection)?;
    tracing::info!("Created category {} \"{}\"", category.id, category.name);

    Ok((StatusCode::CREATED, Json(category)))
}

#[cfg(test)]
mod create_category_endpoint_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        category::{Category, CategoryData, create_category_endpoint, get_all_categories},
        extract::ApiJson,
        test_utils::{get_category_state, parse_json_body},
    };

    #[tokio::test]
    async fn create_category_succeeds() {
        let state = get_category_state();

        let response = create_category_endpoint(
            State(state.clone()),
            ApiJson(CategoryData {
                name: "Books".to_owned(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let category: Category = parse_json_body(response).await;
        assert_eq!(category.name.as_ref(), "Books");

        let categories = get_all_categories(&state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(categories, vec![category]);
    }

    #[tokio::test]
    async fn create_category_fails_on_empty_name() {
        let state = get_category_state();

        let result = create_category_endpoint(
            State(state),
            ApiJson(CategoryData {
                name: "   ".to_owned(),
            }),
        )
        .await;

        assert!(matches!(result, Err(Error::EmptyCategoryName)));
    }

    #[tokio::test]
    async fn create_category_fails_on_duplicate_name() {
        let state = get_category_state();
        let data = || CategoryData {
            name: "Books".to_owned(),
        };
        create_category_endpoint(State(state.clone()), ApiJson(data()))
            .await
            .expect("Could not create test category");

        let response = create_category_endpoint(State(state), ApiJson(data()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
