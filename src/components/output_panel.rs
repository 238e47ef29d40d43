//! Output Panel Component
//!
//! The generated disable argument (editable, can be applied back) and the
//! markdown summary with a rendered preview.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::Action;
use crate::markdown;
use crate::render::OutputField;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
fn CopyButton(field: OutputField) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            type="button"
            class="copy-btn"
            data-copy-target=field.element_id()
            on:click=move |_| ctx.send(Action::Copy(field))
        >
            "Copy"
        </button>
    }
}

#[component]
pub fn OutputPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    // Re-render overwrites any unsaved edit, same as a fresh page.
    let disable_text = move || store.page().read().output(OutputField::DisableArgument).to_string();
    let markdown_text = move || store.page().read().output(OutputField::Markdown).to_string();
    let preview = Memo::new(move |_| markdown::to_html(&store.page().read().markdown));
    let caption = move || {
        let (checked, total) = markdown::task_counts(&store.page().read().markdown);
        format!("{} of {} packs enabled", checked, total)
    };

    view! {
        <section class="outputs">
            <div class="output-block">
                <label for=OutputField::DisableArgument.element_id()>"Disable argument"</label>
                <textarea
                    id=OutputField::DisableArgument.element_id()
                    rows="3"
                    spellcheck="false"
                    prop:value=disable_text
                ></textarea>
                <div class="output-actions">
                    <button
                        type="button"
                        data-action=Action::ApplyDisable.data_action()
                        on:click=move |_| ctx.send(Action::ApplyDisable)
                    >
                        "Apply"
                    </button>
                    <CopyButton field=OutputField::DisableArgument />
                </div>
            </div>

            <div class="output-block">
                <label for=OutputField::Markdown.element_id()>"Markdown summary"</label>
                <textarea
                    id=OutputField::Markdown.element_id()
                    rows="12"
                    readonly=true
                    prop:value=markdown_text
                ></textarea>
                <div class="output-actions">
                    <CopyButton field=OutputField::Markdown />
                </div>
            </div>

            <div class="output-block">
                <p class="preview-caption">{caption}</p>
                <div class="markdown-preview" inner_html=move || preview.get()></div>
            </div>
        </section>
    }
}
