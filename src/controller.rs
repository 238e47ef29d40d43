//! Action Controller
//!
//! Turns user actions into API round trips and owns the only copy of the
//! server state. Each networked action settles into exactly one of
//! render + success status, or failure status with the view left alone.
//!
//! Overlapping actions are not serialized: whichever response arrives last is
//! what stays on screen.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::{ActionError, ApiError};
use crate::models::StatePayload;
use crate::platform::{Clipboard, FieldSource, Prompt, ViewSink};
use crate::render::{OutputField, ViewRenderer};
use crate::status::StatusNotifier;

pub const RESET_PROMPT: &str = "Reset all DLC toggles to the default checklist?";
pub const COPIED: &str = "Copied to clipboard.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `enabled` is the state currently shown on the toggle
    Toggle { code: String, enabled: bool },
    Reset,
    Refresh,
    ApplyDisable,
    Copy(OutputField),
}

impl Action {
    /// `data-action` value of the control that triggers it
    pub fn data_action(&self) -> Option<&'static str> {
        match self {
            Action::Reset => Some("reset"),
            Action::Refresh => Some("refresh"),
            Action::ApplyDisable => Some("apply-disable"),
            Action::Toggle { .. } | Action::Copy(_) => None,
        }
    }
}

/// Browser collaborators the controller drives
pub struct Ports {
    pub view: Rc<dyn ViewSink>,
    pub fields: Rc<dyn FieldSource>,
    pub prompt: Rc<dyn Prompt>,
    pub clipboard: Rc<dyn Clipboard>,
}

pub struct ActionController {
    api: ApiClient,
    renderer: ViewRenderer,
    status: StatusNotifier,
    ports: Ports,
    state: RefCell<Option<StatePayload>>,
}

impl ActionController {
    pub fn new(api: ApiClient, renderer: ViewRenderer, status: StatusNotifier, ports: Ports) -> Rc<Self> {
        Rc::new(Self {
            api,
            renderer,
            status,
            ports,
            state: RefCell::new(None),
        })
    }

    /// Last payload rendered
    #[cfg(test)]
    pub fn state(&self) -> Option<StatePayload> {
        self.state.borrow().clone()
    }

    /// Render `payload` without a round trip (embedded bootstrap data)
    pub fn adopt(&self, payload: StatePayload) {
        self.render(payload);
    }

    /// Run the synchronous part of `action` now and return the rest.
    ///
    /// Preconditions, the confirm prompt and the in-progress status all
    /// happen before this returns; the future only awaits the network.
    pub fn dispatch(self: &Rc<Self>, action: Action) -> LocalBoxFuture<'static, ()> {
        let this = Rc::clone(self);
        match action {
            Action::Toggle { code, enabled } => {
                self.status.notify("Saving...", true);
                async move {
                    let outcome = this.api.toggle(&code, !enabled).await;
                    this.settle(outcome, "State updated.");
                }
                .boxed_local()
            }
            Action::Reset => {
                if !self.ports.prompt.confirm(RESET_PROMPT) {
                    info!("reset declined");
                    return future::ready(()).boxed_local();
                }
                self.status.notify("Resetting...", true);
                async move {
                    let outcome = this.api.reset().await;
                    this.settle(outcome, "Defaults restored.");
                }
                .boxed_local()
            }
            Action::Refresh => {
                self.status.notify("Refreshing...", true);
                async move {
                    let outcome = this.api.fetch_state().await;
                    this.settle(outcome, "Latest data loaded.");
                }
                .boxed_local()
            }
            Action::ApplyDisable => {
                let Some(text) = self.ports.fields.field_text(OutputField::DisableArgument) else {
                    return future::ready(()).boxed_local();
                };
                let argument = text.trim().to_string();
                if argument.is_empty() {
                    self.fail(ActionError::EmptyArgument);
                    return future::ready(()).boxed_local();
                }
                self.status.notify("Updating disable list...", true);
                async move {
                    let outcome = this.api.apply_disable(&argument).await;
                    this.settle(outcome, "Disable list applied.");
                }
                .boxed_local()
            }
            Action::Copy(field) => {
                let Some(text) = self.ports.fields.field_text(field) else {
                    return future::ready(()).boxed_local();
                };
                async move { this.copy(field, &text).await }.boxed_local()
            }
        }
    }

    async fn copy(&self, field: OutputField, text: &str) {
        if let Err(e) = self.ports.clipboard.write_text(text).await {
            warn!(error = %e, "clipboard write failed, using legacy copy");
            if let Err(e) = self.ports.clipboard.legacy_copy(field) {
                warn!(error = %e, "legacy copy failed");
            }
        }
        self.status.notify(COPIED, true);
    }

    fn settle(&self, outcome: Result<StatePayload, ApiError>, success: &str) {
        match outcome {
            Ok(payload) => {
                self.render(payload);
                info!(success, "action applied");
                self.status.notify(success, true);
            }
            Err(e) => self.fail(e.into()),
        }
    }

    fn fail(&self, error: ActionError) {
        warn!(error = %error, "action failed");
        self.status.notify(&error.to_string(), false);
    }

    fn render(&self, payload: StatePayload) {
        let view = self.renderer.render(&payload);
        *self.state.borrow_mut() = Some(payload);
        self.ports.view.replace_view(view);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory ports for driving the controller on the host.

    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::error::ClipboardError;
    use crate::icon::IconFactory;
    use crate::render::PageView;
    use crate::status::testing::{ManualScheduler, StatusLog};
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct FakeSurface {
        pub renders: RefCell<Vec<PageView>>,
        pub fields: RefCell<HashMap<OutputField, String>>,
    }

    impl FakeSurface {
        pub fn current(&self) -> Option<PageView> {
            self.renders.borrow().last().cloned()
        }

        pub fn type_into(&self, field: OutputField, text: &str) {
            self.fields.borrow_mut().insert(field, text.to_string());
        }
    }

    impl ViewSink for FakeSurface {
        fn replace_view(&self, view: PageView) {
            // Like the textareas, rendering overwrites whatever the user typed.
            for field in OutputField::ALL {
                self.type_into(field, view.output(field));
            }
            self.renders.borrow_mut().push(view);
        }
    }

    impl FieldSource for FakeSurface {
        fn field_text(&self, field: OutputField) -> Option<String> {
            self.fields.borrow().get(&field).cloned()
        }
    }

    pub struct FakePrompt {
        pub answer: Cell<bool>,
        pub asked: RefCell<Vec<String>>,
    }

    impl Prompt for FakePrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer.get()
        }
    }

    #[derive(Default)]
    pub struct FakeClipboard {
        pub reject: Cell<bool>,
        pub written: RefCell<Vec<String>>,
        pub legacy: RefCell<Vec<OutputField>>,
    }

    #[async_trait(?Send)]
    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.reject.get() {
                return Err(ClipboardError::Rejected("NotAllowedError".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn legacy_copy(&self, field: OutputField) -> Result<(), ClipboardError> {
            self.legacy.borrow_mut().push(field);
            Ok(())
        }
    }

    pub struct Harness {
        pub controller: Rc<ActionController>,
        pub transport: Rc<ScriptedTransport>,
        pub surface: Rc<FakeSurface>,
        pub status: Rc<StatusLog>,
        pub scheduler: Rc<ManualScheduler>,
        pub prompt: Rc<FakePrompt>,
        pub clipboard: Rc<FakeClipboard>,
    }

    impl Harness {
        pub fn new() -> Self {
            let transport = Rc::new(ScriptedTransport::default());
            let surface = Rc::new(FakeSurface::default());
            let status = Rc::new(StatusLog::default());
            let scheduler = Rc::new(ManualScheduler::default());
            let prompt = Rc::new(FakePrompt {
                answer: Cell::new(true),
                asked: RefCell::new(Vec::new()),
            });
            let clipboard = Rc::new(FakeClipboard::default());

            let controller = ActionController::new(
                ApiClient::new(transport.clone(), ""),
                ViewRenderer::new(IconFactory::new("/svgs.html")),
                StatusNotifier::new(status.clone(), scheduler.clone(), 2_800),
                Ports {
                    view: surface.clone(),
                    fields: surface.clone(),
                    prompt: prompt.clone(),
                    clipboard: clipboard.clone(),
                },
            );
            Self {
                controller,
                transport,
                surface,
                status,
                scheduler,
                prompt,
                clipboard,
            }
        }

        pub fn status(&self) -> (String, bool) {
            let last = self.status.last().expect("no status shown");
            (last.message, last.success)
        }
    }
}
