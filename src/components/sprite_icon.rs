use leptos::prelude::*;

use crate::icon::IconRef;

/// `<svg>` wrapping a `<use>` that points into the sprite sheet
#[component]
pub fn SpriteIcon(icon: IconRef) -> impl IntoView {
    view! {
        <svg class="dlc-icon" aria-hidden="true" inner_html=icon.markup()></svg>
    }
}
