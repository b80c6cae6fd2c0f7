//! # recipe-box
//!
//! State and persistence for a single-page recipe sharing form.
//!
//! A user fills in a draft recipe (title, description, ingredients, steps
//! and an optional image), submits it, and the whole collection is written
//! as a JSON array under one key of a key-value storage. The web front end
//! (`wasm-ui`) and the `recipe-box` command-line tool both drive the same
//! [`RecipeBook`] state container.
//!
//! ## Example
//!
//! ```
//! use recipe_box::{MemoryStorage, RecipeBook, RecipeField, RecipeStore, Tab};
//!
//! let mut store = RecipeStore::new(MemoryStorage::new());
//! let mut book = RecipeBook::load(&store);
//!
//! book.set_field(RecipeField::Title, "Porridge");
//! book.set_field(RecipeField::Description, "Oats for breakfast");
//! book.set_field(RecipeField::Ingredients, "oats\nmilk");
//! book.set_field(RecipeField::Steps, "Simmer for five minutes");
//! book.submit(&mut store).unwrap();
//!
//! assert_eq!(book.tab(), Tab::SharedRecipes);
//! assert_eq!(RecipeBook::load(&store).recipes().len(), 1);
//! ```

pub mod book;
pub mod collection;
pub mod draft;
pub mod error;
pub mod image;
pub mod recipe;
pub mod store;

pub use book::{RecipeBook, Tab};
pub use collection::RecipeCollection;
pub use draft::RecipeDraft;
pub use error::{RecipeError, Result};
pub use recipe::{Recipe, RecipeField};
pub use store::{DEFAULT_KEY, FileStorage, MemoryStorage, RecipeStore, Storage};
