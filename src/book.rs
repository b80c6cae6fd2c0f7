//! Page state: collection, draft, active tab and gallery selection.

use crate::collection::RecipeCollection;
use crate::draft::RecipeDraft;
use crate::error::{RecipeError, Result};
use crate::recipe::{Recipe, RecipeField};
use crate::store::{RecipeStore, Storage};

/// The two top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Recipe submission form.
    #[default]
    AddRecipe,
    /// Gallery of submitted recipes.
    SharedRecipes,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::AddRecipe, Tab::SharedRecipes];

    pub fn label(self) -> &'static str {
        match self {
            Tab::AddRecipe => "Add Recipe",
            Tab::SharedRecipes => "Shared Recipes",
        }
    }

    /// Glyph shown before the label on the tab button.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::AddRecipe => "+",
            Tab::SharedRecipes => "\u{2630}",
        }
    }
}

/// Everything the page renders, mirrored to storage on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: RecipeCollection,
    draft: RecipeDraft,
    tab: Tab,
    selected: Option<usize>,
    menu_open: bool,
}

impl RecipeBook {
    /// Initial state from whatever the store holds.
    pub fn load<S: Storage>(store: &RecipeStore<S>) -> Self {
        Self {
            recipes: store.load(),
            ..Self::default()
        }
    }

    pub fn recipes(&self) -> &RecipeCollection {
        &self.recipes
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The recipe shown in the detail pane, if any.
    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.and_then(|i| self.recipes.get(i))
    }

    pub fn set_field(&mut self, field: RecipeField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn set_image(&mut self, data_url: impl Into<String>) {
        self.draft.set_image(data_url);
    }

    /// Append the draft to the collection and persist it.
    ///
    /// On success the draft is cleared, the selection dropped and the
    /// gallery shown. On failure nothing changes, so the form can be
    /// resubmitted as is.
    pub fn submit<S: Storage>(&mut self, store: &mut RecipeStore<S>) -> Result<usize> {
        let mut draft = self.draft.clone();
        let recipe = draft.take()?;

        let mut recipes = self.recipes.clone();
        let index = recipes.push(recipe);
        store.save(&recipes)?;

        log::debug!("Submitted recipe #{} '{}'", index, recipes.as_slice()[index].title);
        self.recipes = recipes;
        self.draft = draft;
        self.selected = None;
        self.tab = Tab::SharedRecipes;
        Ok(index)
    }

    /// Open the detail pane for the recipe at `index`.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if self.recipes.get(index).is_none() {
            return Err(RecipeError::NotFound(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Return from the detail pane to the grid.
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
