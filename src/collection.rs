//! Ordered list of submitted recipes and its JSON encoding.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::recipe::Recipe;

/// Submitted recipes in submission order.
///
/// Encodes as a bare JSON array, the layout kept under the storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe, returning its index.
    pub fn push(&mut self, recipe: Recipe) -> usize {
        self.recipes.push(recipe);
        self.recipes.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Encode as the persisted JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.recipes)?)
    }

    /// Decode persisted JSON, dropping whatever cannot be read.
    ///
    /// Invalid JSON, `null` and non-arrays yield an empty collection.
    /// Inside an array, each malformed entry is skipped on its own so the
    /// readable recipes survive the next wholesale save.
    pub fn from_json_lossy(json: &str) -> Self {
        let entries = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(json) {
            Ok(Some(entries)) => entries,
            Ok(None) => return Self::new(),
            Err(e) => {
                log::warn!("Discarding malformed stored recipes: {}", e);
                return Self::new();
            }
        };

        let recipes = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value::<Recipe>(entry) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    log::warn!("Skipping malformed stored recipe #{}: {}", i, e);
                    None
                }
            })
            .collect();
        Self { recipes }
    }
}

impl From<Vec<Recipe>> for RecipeCollection {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl<'a> IntoIterator for &'a RecipeCollection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            description: format!("{title} description"),
            ingredients: "water".to_string(),
            steps: "boil".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_push_returns_index() {
        let mut collection = RecipeCollection::new();
        assert_eq!(collection.push(recipe("A")), 0);
        assert_eq!(collection.push(recipe("B")), 1);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).unwrap().title, "B");
        assert!(collection.get(2).is_none());
    }

    #[test]
    fn test_json_is_bare_array() {
        let collection = RecipeCollection::from(vec![recipe("A")]);
        let json = collection.to_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""title":"A""#));
    }

    #[test]
    fn test_json_preserves_order() {
        let titles = ["first", "second", "third", "fourth"];
        let collection = RecipeCollection::from(titles.iter().map(|t| recipe(t)).collect::<Vec<_>>());
        let loaded = RecipeCollection::from_json_lossy(&collection.to_json().unwrap());
        let loaded_titles: Vec<&str> = loaded.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(loaded_titles, titles);
    }

    #[test]
    fn test_reads_browser_written_json() {
        let json = r#"[{"title":"Tea","description":"Hot","ingredients":"leaves","steps":"steep","image":"data:image/jpeg;base64,/9j/"},
                       {"title":"Toast","description":"Crisp","ingredients":"bread","steps":"toast","image":null}]"#;
        let collection = RecipeCollection::from_json_lossy(json);
        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.get(0).unwrap().image.as_deref(),
            Some("data:image/jpeg;base64,/9j/")
        );
        assert_eq!(collection.get(1).unwrap().image, None);
    }

    #[test]
    fn test_malformed_json_is_empty() {
        assert!(RecipeCollection::from_json_lossy("{not json").is_empty());
        assert!(RecipeCollection::from_json_lossy("null").is_empty());
        assert!(RecipeCollection::from_json_lossy(r#"{"title":"x"}"#).is_empty());
        assert!(RecipeCollection::from_json_lossy(r#"[{"title":"only"}]"#).is_empty());
    }

    #[test]
    fn test_malformed_entries_skipped_individually() {
        let json = r#"[{"title":"ok","description":"d","ingredients":"i","steps":"s","image":null},
                       {"title":"legacy"},
                       42,
                       {"title":"also ok","description":"d","ingredients":"i","steps":"s"}]"#;
        let collection = RecipeCollection::from_json_lossy(json);
        let titles: Vec<&str> = collection.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["ok", "also ok"]);
    }
}
