//! Application Context
//!
//! The controller handle shared with every component via Leptos context.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{Action, ActionController};

/// Dispatch table entry point. Components never call the API directly.
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<ActionController>, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: Rc<ActionController>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Run `action`; its network part continues on the event loop.
    pub fn send(&self, action: Action) {
        if let Some(pending) = self.controller.try_with_value(|controller| controller.dispatch(action)) {
            spawn_local(pending);
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
