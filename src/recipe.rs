//! The recipe record and its required text fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};

/// A submitted recipe.
///
/// Field names match the persisted JSON layout. `image` holds a `data:` URL
/// (or `null`) and is omitted-tolerant on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    /// Free text, one ingredient per line by convention.
    pub ingredients: String,
    /// Free text preparation steps.
    pub steps: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The four required text fields of a [`Recipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeField {
    Title,
    Description,
    Ingredients,
    Steps,
}

impl RecipeField {
    /// All required fields in form order.
    pub const ALL: [RecipeField; 4] = [
        RecipeField::Title,
        RecipeField::Description,
        RecipeField::Ingredients,
        RecipeField::Steps,
    ];

    /// Wire/form name of the field.
    pub fn name(self) -> &'static str {
        match self {
            RecipeField::Title => "title",
            RecipeField::Description => "description",
            RecipeField::Ingredients => "ingredients",
            RecipeField::Steps => "steps",
        }
    }

    /// Label shown next to the form control.
    pub fn label(self) -> &'static str {
        match self {
            RecipeField::Title => "Recipe Title",
            RecipeField::Description => "Recipe Description",
            RecipeField::Ingredients => "Ingredients",
            RecipeField::Steps => "Preparation Steps",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Recipe {
    /// Borrow a text field by name.
    pub fn field(&self, field: RecipeField) -> &str {
        match field {
            RecipeField::Title => &self.title,
            RecipeField::Description => &self.description,
            RecipeField::Ingredients => &self.ingredients,
            RecipeField::Steps => &self.steps,
        }
    }

    /// Mutable access to a text field by name.
    pub fn field_mut(&mut self, field: RecipeField) -> &mut String {
        match field {
            RecipeField::Title => &mut self.title,
            RecipeField::Description => &mut self.description,
            RecipeField::Ingredients => &mut self.ingredients,
            RecipeField::Steps => &mut self.steps,
        }
    }

    /// Check that every required field has visible content.
    ///
    /// Whitespace-only input counts as empty. Reports the first offending
    /// field in form order.
    pub fn validate(&self) -> Result<()> {
        match RecipeField::ALL
            .into_iter()
            .find(|&f| self.field(f).trim().is_empty())
        {
            Some(field) => Err(RecipeError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Whether an image is attached.
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Description shortened to at most `max_chars` characters.
    ///
    /// Cuts on a char boundary and appends an ellipsis when shortened.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = self.description.trim();
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.truncate(cut.trim_end().len());
        cut.push('\u{2026}');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe {
            title: "Pancakes".to_string(),
            description: "Fluffy breakfast pancakes".to_string(),
            ingredients: "flour\nmilk\neggs".to_string(),
            steps: "Mix.\nFry.".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_validate_complete_recipe() {
        assert!(pancakes().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let mut recipe = pancakes();
        recipe.ingredients.clear();
        recipe.steps.clear();
        match recipe.validate() {
            Err(RecipeError::MissingField(field)) => assert_eq!(field, RecipeField::Ingredients),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_whitespace_only_is_empty() {
        let mut recipe = pancakes();
        recipe.title = "   \n".to_string();
        assert!(matches!(
            recipe.validate(),
            Err(RecipeError::MissingField(RecipeField::Title))
        ));
    }

    #[test]
    fn test_image_is_optional() {
        let mut recipe = pancakes();
        assert!(!recipe.has_image());
        recipe.image = Some("data:image/png;base64,AAAA".to_string());
        assert!(recipe.has_image());
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn test_field_mut_replaces_value() {
        let mut recipe = pancakes();
        *recipe.field_mut(RecipeField::Steps) = "Whisk and fry".to_string();
        assert_eq!(recipe.field(RecipeField::Steps), "Whisk and fry");
    }

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(pancakes().excerpt(100), "Fluffy breakfast pancakes");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let mut recipe = pancakes();
        recipe.description = "Crème brûlée with caramel".to_string();
        assert_eq!(recipe.excerpt(6), "Crème\u{2026}");
    }

    #[test]
    fn test_missing_image_member_deserializes() {
        let json = r#"{"title":"T","description":"D","ingredients":"I","steps":"S"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.image, None);
    }

    #[test]
    fn test_serializes_null_image() {
        let json = serde_json::to_string(&pancakes()).unwrap();
        assert!(json.contains(r#""image":null"#));
    }
}
