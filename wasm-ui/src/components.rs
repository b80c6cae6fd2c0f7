//! UI Components for the recipe form and gallery.

use recipe_box::{Recipe, RecipeCollection, RecipeDraft, RecipeField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::files::read_as_data_url;
use crate::state::Notice;

/// Single labelled text control bound to one recipe field.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub field: RecipeField,
    pub value: String,
    /// Render a textarea with this many rows instead of a one-line input.
    #[prop_or_default]
    pub rows: Option<u32>,
    pub on_change: Callback<(RecipeField, String)>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let field = props.field;
    let id = format!("recipe-{}", field.name());

    let control = match props.rows {
        None => {
            let on_change = props.on_change.clone();
            let on_input = Callback::from(move |e: InputEvent| {
                let target: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((field, target.value()));
            });
            html! {
                <input
                    type="text"
                    id={id.clone()}
                    name={field.name()}
                    class="field-input"
                    value={props.value.clone()}
                    oninput={on_input}
                    required=true
                />
            }
        }
        Some(rows) => {
            let on_change = props.on_change.clone();
            let on_input = Callback::from(move |e: InputEvent| {
                let target: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit((field, target.value()));
            });
            html! {
                <textarea
                    id={id.clone()}
                    name={field.name()}
                    class="field-input"
                    value={props.value.clone()}
                    oninput={on_input}
                    rows={rows.to_string()}
                    required=true
                />
            }
        }
    };

    html! {
        <div class="form-field">
            <label for={id} class="field-label">{ field.label() }</label>
            { control }
        </div>
    }
}

/// Recipe submission form.
#[derive(Properties, PartialEq)]
pub struct RecipeFormProps {
    pub draft: RecipeDraft,
    /// Changes after each successful submit so the file input starts empty.
    pub generation: u32,
    pub on_field: Callback<(RecipeField, String)>,
    pub on_image: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(RecipeForm)]
pub fn recipe_form(props: &RecipeFormProps) -> Html {
    let on_image_change = {
        let on_image = props.on_image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                if let Err(e) = read_as_data_url(&file, on_image.clone()) {
                    log::warn!("Could not start reading image: {:?}", e);
                }
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let rows = |field: RecipeField| -> Option<u32> {
        match field {
            RecipeField::Title => None,
            RecipeField::Description => Some(3),
            RecipeField::Ingredients => Some(4),
            RecipeField::Steps => Some(6),
        }
    };

    html! {
        <section class="card form-card">
            <h2 class="section-title">{ "Submit Your Recipe" }</h2>
            <form class="recipe-form" onsubmit={on_submit}>
                { for RecipeField::ALL.into_iter().map(|field| html! {
                    <TextField
                        {field}
                        value={props.draft.field(field).to_string()}
                        rows={rows(field)}
                        on_change={props.on_field.clone()}
                    />
                })}
                <div class="form-field">
                    <label for="recipe-image" class="field-label">{ "Recipe Image" }</label>
                    <input
                        key={props.generation.to_string()}
                        type="file"
                        id="recipe-image"
                        class="field-input"
                        accept="image/*"
                        onchange={on_image_change}
                    />
                    if let Some(url) = props.draft.image() {
                        <img class="image-preview" src={url.to_string()} alt="Selected recipe image" />
                    }
                </div>
                <button type="submit" class="submit-button">{ "Submit Recipe" }</button>
            </form>
        </section>
    }
}

/// Summary card shown in the gallery grid.
#[derive(Properties, PartialEq)]
pub struct RecipeCardProps {
    pub recipe: Recipe,
    pub on_click: Callback<MouseEvent>,
}

#[function_component(RecipeCard)]
pub fn recipe_card(props: &RecipeCardProps) -> Html {
    let recipe = &props.recipe;
    html! {
        <div class="recipe-card" onclick={props.on_click.clone()}>
            if let Some(url) = recipe.image.as_ref().filter(|_| recipe.has_image()) {
                <img class="card-image" src={url.clone()} alt={recipe.title.clone()} />
            }
            <div class="card-body">
                <h3 class="card-title">{ &recipe.title }</h3>
                <p class="card-excerpt">{ &recipe.description }</p>
            </div>
        </div>
    }
}

/// Full view of one recipe.
#[derive(Properties, PartialEq)]
pub struct RecipeDetailProps {
    pub recipe: Recipe,
    pub on_back: Callback<()>,
}

#[function_component(RecipeDetail)]
pub fn recipe_detail(props: &RecipeDetailProps) -> Html {
    let on_back_click = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| {
            on_back.emit(());
        })
    };

    let recipe = &props.recipe;
    html! {
        <div class="recipe-detail">
            <button class="back-button" onclick={on_back_click}>
                { "\u{2039} Back to recipes" }
            </button>
            if let Some(url) = recipe.image.as_ref().filter(|_| recipe.has_image()) {
                <img class="detail-image" src={url.clone()} alt={recipe.title.clone()} />
            }
            <h3 class="detail-title">{ &recipe.title }</h3>
            <p class="detail-text">{ &recipe.description }</p>
            <h4 class="detail-heading">{ "Ingredients:" }</h4>
            <p class="detail-text">{ &recipe.ingredients }</p>
            <h4 class="detail-heading">{ "Steps:" }</h4>
            <p class="detail-text">{ &recipe.steps }</p>
        </div>
    }
}

/// Grid of cards, or the detail pane when a recipe is selected.
#[derive(Properties, PartialEq)]
pub struct RecipeGalleryProps {
    pub recipes: RecipeCollection,
    pub selected: Option<usize>,
    pub on_select: Callback<usize>,
    pub on_back: Callback<()>,
}

#[function_component(RecipeGallery)]
pub fn recipe_gallery(props: &RecipeGalleryProps) -> Html {
    let selected = props.selected.and_then(|i| props.recipes.get(i));

    html! {
        <section class="card gallery-card">
            <h2 class="section-title">{ "Shared Recipes" }</h2>
            if let Some(recipe) = selected {
                <RecipeDetail recipe={recipe.clone()} on_back={props.on_back.clone()} />
            } else if props.recipes.is_empty() {
                <p class="empty-hint">{ "No recipes shared yet. Add the first one!" }</p>
            } else {
                <div class="recipe-grid">
                    { for props.recipes.iter().enumerate().map(|(index, recipe)| html! {
                        <RecipeCard
                            key={index}
                            recipe={recipe.clone()}
                            on_click={props.on_select.reform(move |_: MouseEvent| index)}
                        />
                    })}
                </div>
            }
        </section>
    }
}

/// Dismissable banner for submit outcomes.
#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let on_dismiss_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| {
            on_dismiss.emit(());
        })
    };

    let (class, text) = match &props.notice {
        Notice::Shared(title) => ("notice success", format!("\"{}\" was shared.", title)),
        Notice::Failed(error) => ("notice error", format!("Could not save recipe: {}", error)),
    };

    html! {
        <div class={class} role="status">
            <span>{ text }</span>
            <button class="notice-dismiss" onclick={on_dismiss_click}>{ "\u{2715}" }</button>
        </div>
    }
}
