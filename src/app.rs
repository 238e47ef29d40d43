//! DLC Toggle Board App
//!
//! Wires the browser platform, store and controller together, then
//! bootstraps the first state.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::bootstrap::bootstrap;
use crate::components::{CategoryGrid, OutputPanel, StatusToast, Toolbar};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::controller::{ActionController, Ports};
use crate::icon::IconFactory;
use crate::platform::{embedded_payload, BrowserClipboard, BrowserPrompt, DomFields, FetchTransport, GlooScheduler};
use crate::render::ViewRenderer;
use crate::status::StatusNotifier;
use crate::store::{StoreSurface, UiState};

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::from_document();
    tracing::debug!(sprite_url = %config.sprite_url, api_base = %config.api_base, "starting");

    // State
    let store = Store::new(UiState::default());
    provide_context(store);
    let surface = Rc::new(StoreSurface(store));

    let controller = ActionController::new(
        ApiClient::new(Rc::new(FetchTransport), config.api_base.clone()),
        ViewRenderer::new(IconFactory::new(config.sprite_url.clone())),
        StatusNotifier::new(surface.clone(), Rc::new(GlooScheduler), config.status_hide_ms),
        Ports {
            view: surface,
            fields: Rc::new(DomFields),
            prompt: Rc::new(BrowserPrompt),
            clipboard: Rc::new(BrowserClipboard),
        },
    );
    provide_context(AppContext::new(Rc::clone(&controller)));

    // Runs once per mount, outside any effect, so the fallback refresh
    // cannot fire twice.
    spawn_local(bootstrap(&controller, embedded_payload().as_deref()));

    view! {
        <div class="app-layout">
            <Toolbar />
            <main class="main-content">
                <CategoryGrid />
                <OutputPanel />
            </main>
            <StatusToast />
        </div>
    }
}
