//! Request extractors whose rejections are reported as [Error]s.
//!
//! axum's own `Path` and `Json` extractors reject bad requests with a plain
//! text body. These wrappers send the same JSON error body as every other
//! failed request.

use axum::extract::{
    FromRequest, FromRequestParts,
    rejection::{JsonRejection, PathRejection},
};

use crate::Error;

/// Path parameters, e.g. `ApiPath((parent_id, child_id)): ApiPath<(CategoryId, CategoryId)>`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

/// A JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::RejectedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::RejectedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
