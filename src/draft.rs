//! The in-progress recipe held by the form.

use crate::error::Result;
use crate::recipe::{Recipe, RecipeField};

/// A not-yet-submitted recipe.
///
/// Text fields are replaced wholesale on every edit. The image arrives
/// separately, once the selected file has been read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    recipe: Recipe,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a text field.
    pub fn field(&self, field: RecipeField) -> &str {
        self.recipe.field(field)
    }

    /// Replace a text field with `value`.
    pub fn set_field(&mut self, field: RecipeField, value: impl Into<String>) {
        *self.recipe.field_mut(field) = value.into();
    }

    /// Attach an encoded image, replacing any earlier one.
    pub fn set_image(&mut self, data_url: impl Into<String>) {
        self.recipe.image = Some(data_url.into());
    }

    pub fn image(&self) -> Option<&str> {
        self.recipe.image.as_deref()
    }

    /// Borrow the draft as a recipe, e.g. for previews.
    pub fn as_recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Validate and hand out the finished recipe, resetting the draft.
    ///
    /// On failure the draft is left untouched.
    pub fn take(&mut self) -> Result<Recipe> {
        self.recipe.validate()?;
        Ok(std::mem::take(&mut self.recipe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;

    fn filled() -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.set_field(RecipeField::Title, "Soup");
        draft.set_field(RecipeField::Description, "Warm tomato soup");
        draft.set_field(RecipeField::Ingredients, "tomatoes, salt");
        draft.set_field(RecipeField::Steps, "Simmer for 20 minutes");
        draft
    }

    #[test]
    fn test_set_field_replaces_value() {
        let mut draft = RecipeDraft::new();
        draft.set_field(RecipeField::Title, "Sou");
        draft.set_field(RecipeField::Title, "Soup");
        assert_eq!(draft.field(RecipeField::Title), "Soup");
    }

    #[test]
    fn test_take_resets_draft() {
        let mut draft = filled();
        draft.set_image("data:image/png;base64,iVBO");
        let recipe = draft.take().unwrap();
        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.image.as_deref(), Some("data:image/png;base64,iVBO"));
        assert_eq!(draft, RecipeDraft::new());
    }

    #[test]
    fn test_take_incomplete_keeps_draft() {
        let mut draft = filled();
        draft.set_field(RecipeField::Description, "");
        let before = draft.clone();
        assert!(matches!(
            draft.take(),
            Err(RecipeError::MissingField(RecipeField::Description))
        ));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_text_kept_verbatim() {
        let mut draft = filled();
        draft.set_field(RecipeField::Steps, "  1. Chop\n2. Simmer  \n");
        let recipe = draft.take().unwrap();
        assert_eq!(recipe.steps, "  1. Chop\n2. Simmer  \n");
    }

    #[test]
    fn test_take_drops_image() {
        let mut draft = filled();
        draft.set_image("data:image/gif;base64,R0lG");
        assert!(draft.take().unwrap().has_image());
        assert_eq!(draft.image(), None);
        assert_eq!(draft.field(RecipeField::Title), "");
    }
}
