//! Main application component.

use gloo::timers::callback::Timeout;
use recipe_box::{RecipeField, Tab};
use yew::prelude::*;

use crate::components::{NoticeBanner, RecipeForm, RecipeGallery};
use crate::state::{Action, AppState, Notice};
use crate::storage::browser_store;

/// How long a success banner stays up, in milliseconds.
const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Header and footer navigation (label, href).
const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "https://cookbookrecipes.vercel.app/"),
    ("Recipes", "https://cookbookrecipes.vercel.app/meal-index.html"),
    ("Add Recipes", "#"),
    ("Blog", "https://cookbookrecipes.vercel.app/blog-list.html"),
];

/// Footer social links (accessible name, glyph).
const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("WhatsApp", "\u{2706}"),
    ("Twitter", "\u{1D54F}"),
    ("Instagram", "\u{25CE}"),
    ("Facebook", "f"),
];

const LOGO_URL: &str = "https://i.postimg.cc/mDBsM7gV/Untitled-5-2-removebg-preview.png";

fn nav_items(item_class: &'static str) -> Html {
    NAV_LINKS
        .iter()
        .map(|(label, href)| {
            html! {
                <li class={item_class}><a href={*href} class="nav-link">{ *label }</a></li>
            }
        })
        .collect()
}

fn social_links() -> Html {
    SOCIAL_LINKS
        .iter()
        .map(|(name, glyph)| {
            html! {
                <a href="#" class="social-link" title={*name} aria-label={*name}>{ *glyph }</a>
            }
        })
        .collect()
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| AppState::load(&browser_store()));

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Action::ToggleMenu))
    };

    let on_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (RecipeField, String)| {
            state.dispatch(Action::SetField(field, value))
        })
    };

    // Image reads complete asynchronously; dispatching applies the result
    // to whatever the draft is by then.
    let on_image = {
        let dispatcher = state.dispatcher();
        Callback::from(move |data_url: String| dispatcher.dispatch(Action::SetImage(data_url)))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::Submit))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(Action::Select(index)))
    };

    let on_back = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::Back))
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::DismissNotice))
    };

    // Newsletter signup has no backend; keep the page from reloading.
    let on_newsletter = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::info!("Newsletter signup is not connected");
    });

    // Success banners clear themselves; errors stay until dismissed.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.notice.clone(), move |notice| {
            let timeout = matches!(notice, Some(Notice::Shared(_))).then(|| {
                Timeout::new(NOTICE_TIMEOUT_MS, move || {
                    dispatcher.dispatch(Action::DismissNotice)
                })
            });
            move || {
                if let Some(handle) = timeout {
                    handle.cancel();
                }
            }
        });
    }

    let book = &state.book;
    let menu_icon = if book.menu_open() { "\u{2715}" } else { "\u{2630}" };

    html! {
        <div class="app">
            <header class="header">
                <nav class="nav">
                    <a class="logo" href={NAV_LINKS[0].1}>
                        <img src={LOGO_URL} alt="cookbook" />
                    </a>
                    <ul class="nav-links">
                        { nav_items("nav-item") }
                    </ul>
                    <button class="menu-toggle" aria-label="Toggle menu" onclick={on_toggle_menu}>
                        { menu_icon }
                    </button>
                </nav>
                if book.menu_open() {
                    <div class="mobile-menu">
                        <ul>{ nav_items("mobile-item") }</ul>
                    </div>
                }
            </header>

            <main class="main">
                <div class="tab-bar">
                    { for Tab::ALL.into_iter().map(|tab| {
                        let state = state.clone();
                        let onclick = Callback::from(move |_: MouseEvent| state.dispatch(Action::SetTab(tab)));
                        html! {
                            <button
                                class={classes!("tab-button", (book.tab() == tab).then_some("active"))}
                                {onclick}
                            >
                                <span class="tab-icon" aria-hidden="true">{ tab.icon() }</span>
                                { tab.label() }
                            </button>
                        }
                    })}
                </div>

                if let Some(notice) = state.notice.clone() {
                    <NoticeBanner {notice} on_dismiss={on_dismiss} />
                }

                {
                    match book.tab() {
                        Tab::AddRecipe => html! {
                            <RecipeForm
                                draft={book.draft().clone()}
                                generation={state.form_generation}
                                {on_field}
                                {on_image}
                                {on_submit}
                            />
                        },
                        Tab::SharedRecipes => html! {
                            <RecipeGallery
                                recipes={book.recipes().clone()}
                                selected={book.selected_index()}
                                {on_select}
                                {on_back}
                            />
                        },
                    }
                }
            </main>

            <footer class="footer">
                <div class="footer-columns">
                    <div>
                        <h5>{ "Explore" }</h5>
                        <ul>{ nav_items("footer-item") }</ul>
                    </div>
                    <div>
                        <h5>{ "Learn" }</h5>
                        <ul><li class="footer-item"><a href="#">{ "About" }</a></li></ul>
                    </div>
                    <div>
                        <h5>{ "Legal" }</h5>
                        <ul><li class="footer-item"><a href="#">{ "Privacy Policy" }</a></li></ul>
                    </div>
                    <div>
                        <h5>{ "Subscribe to our newsletter" }</h5>
                        <p>{ "Monthly digest of what's new and exciting from us." }</p>
                        <form class="newsletter" onsubmit={on_newsletter}>
                            <input type="email" placeholder="Email address" />
                            <button type="submit">{ "Subscribe" }</button>
                        </form>
                    </div>
                </div>
                <div class="footer-row">
                    <span>{ "\u{00A9} 2024 Cookbook, Inc. All rights reserved." }</span>
                    <div class="social-links">{ social_links() }</div>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}
