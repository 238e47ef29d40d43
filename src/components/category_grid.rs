//! Category Grid Component
//!
//! One titled section per category, each a grid of item cards.

use leptos::prelude::*;

use super::SpriteIcon;
use crate::context::use_app_context;
use crate::controller::Action;
use crate::render::{data_flag, CardView, SectionView};
use crate::store::{use_ui_store, UiStateStoreFields};

/// Container for every category. Rebuilt from scratch on each render.
#[component]
pub fn CategoryGrid() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="dlc-categories" data-role="categories">
            {move || {
                store
                    .page()
                    .get()
                    .sections
                    .into_iter()
                    .map(|section| view! { <CategorySection section=section /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn CategorySection(section: SectionView) -> impl IntoView {
    let summary = section.summary();

    view! {
        <article class="dlc-section">
            <h2>{section.title}</h2>
            <p class="dlc-summary">{summary}</p>
            <div class="dlc-grid">
                {section
                    .cards
                    .into_iter()
                    .map(|card| view! { <ItemCard card=card /> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn ItemCard(card: CardView) -> impl IntoView {
    let ctx = use_app_context();
    let CardView { code, name, enabled, icon, toggle } = card;
    let toggle_code = toggle.code.clone();
    let shown = toggle.enabled;

    view! {
        <div class="dlc-card" data-enabled=data_flag(enabled)>
            <SpriteIcon icon=icon />
            <div class="dlc-name">{name}</div>
            <div class="dlc-code">{code}</div>
            <button
                type="button"
                class="toggle"
                data-code=toggle.code
                data-enabled=data_flag(shown)
                on:click=move |_| ctx.send(Action::Toggle { code: toggle_code.clone(), enabled: shown })
            >
                {toggle.label}
            </button>
        </div>
    }
}
