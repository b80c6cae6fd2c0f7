//! Application state and the actions that change it.
//!
//! The page keeps one [`AppState`] in a `use_reducer` hook. Every event,
//! including the late result of reading an image file, is dispatched as an
//! [`Action`] so it always applies to the latest state.

use std::rc::Rc;

use recipe_box::{RecipeBook, RecipeField, RecipeStore, Storage, Tab};
use yew::prelude::*;

use crate::storage::browser_store;

/// Transient message shown above the active view.
#[derive(Clone, PartialEq, Debug)]
pub enum Notice {
    /// A recipe was shared; holds its title.
    Shared(String),
    /// Submission failed; holds the error text.
    Failed(String),
}

/// Main application state.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AppState {
    /// Recipes, draft, tab and selection.
    pub book: RecipeBook,
    /// Message banner, if any.
    pub notice: Option<Notice>,
    /// Bumped on every successful submit to remount the file input.
    pub form_generation: u32,
}

/// Everything the UI can ask the state to do.
#[derive(Clone, PartialEq, Debug)]
pub enum Action {
    SetField(RecipeField, String),
    SetImage(String),
    Submit,
    Select(usize),
    Back,
    SetTab(Tab),
    ToggleMenu,
    DismissNotice,
}

impl AppState {
    /// Initial state read from `store`.
    pub fn load<S: Storage>(store: &RecipeStore<S>) -> Self {
        Self {
            book: RecipeBook::load(store),
            ..Self::default()
        }
    }

    /// Apply `action`, persisting through `store` on submit.
    pub fn apply<S: Storage>(&mut self, action: Action, store: &mut RecipeStore<S>) {
        match action {
            Action::SetField(field, value) => self.book.set_field(field, value),
            Action::SetImage(data_url) => self.book.set_image(data_url),
            Action::Submit => match self.book.submit(store) {
                Ok(index) => {
                    let title = self
                        .book
                        .recipes()
                        .get(index)
                        .map(|r| r.title.clone())
                        .unwrap_or_default();
                    self.notice = Some(Notice::Shared(title));
                    self.form_generation = self.form_generation.wrapping_add(1);
                }
                Err(e) => {
                    log::warn!("Recipe submission failed: {}", e);
                    self.notice = Some(Notice::Failed(e.to_string()));
                }
            },
            Action::Select(index) => {
                if let Err(e) = self.book.select(index) {
                    log::warn!("Ignoring selection: {}", e);
                }
            }
            Action::Back => self.book.back(),
            Action::SetTab(tab) => self.book.set_tab(tab),
            Action::ToggleMenu => self.book.toggle_menu(),
            Action::DismissNotice => self.notice = None,
        }
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action, &mut browser_store());
        Rc::new(next)
    }
}
