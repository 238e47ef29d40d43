//! Toolbar Component
//!
//! Page title, last-updated stamp, refresh and reset controls.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::Action;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let updated_at = move || {
        store
            .page()
            .read()
            .updated_at
            .as_ref()
            .map(|at| format!("Last updated {}", at))
    };

    view! {
        <header class="toolbar">
            <h1>"The Sims 4 DLC Checklist"</h1>
            <span class="updated-at">{updated_at}</span>
            <div class="toolbar-actions">
                <button
                    type="button"
                    data-action=Action::Refresh.data_action()
                    on:click=move |_| ctx.send(Action::Refresh)
                >
                    "Refresh"
                </button>
                <button
                    type="button"
                    class="danger"
                    data-action=Action::Reset.data_action()
                    on:click=move |_| ctx.send(Action::Reset)
                >
                    "Reset to defaults"
                </button>
            </div>
        </header>
    }
}
