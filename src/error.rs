//! Error types for recipe-box.

use std::path::PathBuf;
use thiserror::Error;

use crate::recipe::RecipeField;

/// Errors raised by the recipe store and state container.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A required text field was empty at submission time.
    #[error("required field '{0}' is empty")]
    MissingField(RecipeField),

    /// No recipe exists at the requested position.
    #[error("no recipe at index {0}")]
    NotFound(usize),

    /// A 1-based recipe number outside the collection.
    #[error("no recipe number {number} (there are {count})")]
    NoSuchNumber {
        /// Number as given by the user.
        number: usize,
        /// Recipes in the collection.
        count: usize,
    },

    /// The backing key-value storage refused a read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// The collection could not be encoded as JSON.
    #[error("failed to encode recipes: {0}")]
    Encode(#[from] serde_json::Error),

    /// A file-backed storage operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecipeError>;
