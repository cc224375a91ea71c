//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/categories/{category_id}', use [format_endpoint].

/// The collection of all categories.
pub const CATEGORIES: &str = "/api/categories";
/// A single category.
pub const CATEGORY: &str = "/api/categories/{category_id}";
/// The subcategories of a parent category.
///
/// The router rejects differently named parameters in the same position, so
/// the parent ID reuses the name from [CATEGORY].
pub const SUBCATEGORIES: &str = "/api/categories/{category_id}/subcategories";
/// The link between a parent category and one of its subcategories.
pub const SUBCATEGORY: &str = "/api/categories/{category_id}/subcategories/{subcategory_id}";

/// Replace the parameters in `endpoint_path` with `ids`, in order.
///
/// A parameter is anything enclosed in braces, e.g. `{parent_id}`. Surplus
/// parameters are left as is and surplus ids are ignored.
///
/// # Examples
/// ```ignore
/// assert_eq!(
///     format_endpoint(SUBCATEGORY, &[1, 2]),
///     "/api/categories/1/subcategories/2"
/// );
/// ```
pub fn format_endpoint(endpoint_path: &str, ids: &[i64]) -> String {
    let mut formatted = String::with_capacity(endpoint_path.len());
    let mut ids = ids.iter();
    let mut rest = endpoint_path;

    while let Some(start) = rest.find('{') {
        let Some(length) = rest[start..].find('}') else {
            break;
        };

        let Some(id) = ids.next() else {
            break;
        };

        formatted.push_str(&rest[..start]);
        formatted.push_str(&id.to_string());
        rest = &rest[start + length + 1..];
    }

    formatted.push_str(rest);
    formatted
}
