//! Platform Seams
//!
//! Everything the controller needs from the browser, behind traits so the
//! core runs on the host in tests.

mod browser;

pub use browser::{embedded_payload, BrowserClipboard, BrowserPrompt, DomFields, FetchTransport, GlooScheduler};

use std::any::Any;

use async_trait::async_trait;

use crate::error::ClipboardError;
use crate::render::{OutputField, PageView};
use crate::status::StatusView;

// ========================
// Timers
// ========================

/// A scheduled callback. Dropping it cancels the callback.
pub struct PendingTimer(#[allow(dead_code)] Box<dyn Any>);

impl PendingTimer {
    pub fn new<H: 'static>(handle: H) -> Self {
        Self(Box::new(handle))
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> PendingTimer;
}

// ========================
// User Interaction
// ========================

/// Blocking yes/no prompt
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

#[async_trait(?Send)]
pub trait Clipboard {
    /// Async clipboard API
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Select the field and run the legacy copy command
    fn legacy_copy(&self, field: OutputField) -> Result<(), ClipboardError>;
}

// ========================
// Display
// ========================

/// Receives each freshly rendered page
pub trait ViewSink {
    fn replace_view(&self, view: PageView);
}

pub trait StatusSink {
    fn set_status(&self, status: StatusView);
}

/// Live contents of the output fields (the user may have edited them)
pub trait FieldSource {
    fn field_text(&self, field: OutputField) -> Option<String>;
}
