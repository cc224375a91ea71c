//! Core category domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty category name.
///
/// Deserializing goes through [CategoryName::new], so a JSON category with an
/// empty name is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryName {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        CategoryName::new(&name)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A catalog category, e.g. 'Books', 'Science Fiction'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The id of the category.
    pub id: CategoryId,

    /// The name of the category.
    pub name: CategoryName,
}

/// JSON request body for creating a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryData {
    pub name: String,
}
