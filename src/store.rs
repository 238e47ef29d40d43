//! UI State Store
//!
//! Reactive mirror of what the controller last rendered. Components only
//! read from here; the controller writes through [`StoreSurface`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::platform::{StatusSink, ViewSink};
use crate::render::PageView;
use crate::status::StatusView;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Last rendered page (sections + output fields)
    pub page: PageView,
    pub status: StatusView,
}

pub type UiStore = Store<UiState>;

/// Get the store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// View and status sinks backed by the store
#[derive(Clone, Copy)]
pub struct StoreSurface(pub UiStore);

impl ViewSink for StoreSurface {
    fn replace_view(&self, view: PageView) {
        *self.0.page().write() = view;
    }
}

impl StatusSink for StoreSurface {
    fn set_status(&self, status: StatusView) {
        *self.0.status().write() = status;
    }
}
