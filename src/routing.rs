//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState,
    category::{create_category_endpoint, get_category_endpoint, list_categories_endpoint},
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    subcategory::{
        add_subcategory_endpoint, list_subcategories_endpoint, remove_subcategory_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .route(endpoints::CATEGORY, get(get_category_endpoint))
        .route(endpoints::SUBCATEGORIES, get(list_subcategories_endpoint))
        .route(
            endpoints::SUBCATEGORY,
            post(add_subcategory_endpoint).delete(remove_subcategory_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
