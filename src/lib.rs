//! Catalog is the category service of a product catalog web application.
//!
//! This library provides a JSON REST API for creating categories and for
//! associating categories with each other as parent and child (subcategory).

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod category;
mod db;
mod endpoints;
mod extract;
mod logging;
mod not_found;
mod routing;
mod subcategory;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryId, CategoryName, create_category};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use subcategory::add_child_category;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// No category exists with the given ID.
    ///
    /// The ID is the one that failed to resolve, so when a request names two
    /// categories the client can tell which one is missing.
    #[error("category {0} could not be found")]
    CategoryNotFound(CategoryId),

    /// Tried to add a subcategory link that already exists.
    #[error("category {child_id} is already a subcategory of category {parent_id}")]
    AlreadySubcategory {
        /// The ID of the parent category.
        parent_id: CategoryId,
        /// The ID of the child category.
        child_id: CategoryId,
    },

    /// Tried to remove a subcategory link that does not exist.
    #[error("category {parent_id} does not contain subcategory {child_id}")]
    NotSubcategory {
        /// The ID of the parent category.
        parent_id: CategoryId,
        /// The ID of the child category.
        child_id: CategoryId,
    },

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// The specified category name already exists in the database.
    #[error("the category \"{0}\" already exists")]
    DuplicateCategoryName(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the path is
    /// correct.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// axum could not extract the path parameters or body from the request,
    /// e.g. a non-numeric ID or a body that is not JSON.
    #[error("{message}")]
    RejectedRequest {
        /// The status code chosen by the rejected extractor.
        status: StatusCode,
        /// The extractor's description of the problem.
        message: String,
    },

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// A human readable description of what went wrong.
    pub error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::CategoryNotFound(_) | Error::NotFound => StatusCode::NOT_FOUND,
            Error::AlreadySubcategory { .. }
            | Error::NotSubcategory { .. }
            | Error::EmptyCategoryName
            | Error::DuplicateCategoryName(_) => StatusCode::BAD_REQUEST,
            Error::RejectedRequest { status, .. } => *status,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            // Internal errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
