use leptos::prelude::*;

use crate::render::data_flag;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Transient status message, shown while `data-visible="true"`
#[component]
pub fn StatusToast() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div
            class="status"
            role="status"
            data-role="status"
            data-visible=move || data_flag(store.status().read().visible)
            style:background=move || store.status().read().background()
        >
            {move || store.status().read().message.clone()}
        </div>
    }
}
