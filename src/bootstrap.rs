//! Startup
//!
//! Render the payload embedded in the page, or fetch one.

use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use tracing::{debug, warn};

use crate::controller::{Action, ActionController};
use crate::models::StatePayload;

/// Take the first state from `embedded` (the `#bootstrap-data` text) if it
/// decodes, otherwise start exactly one refresh. Must be called once.
pub fn bootstrap(controller: &Rc<ActionController>, embedded: Option<&str>) -> LocalBoxFuture<'static, ()> {
    match embedded.map(|text| serde_json::from_str::<StatePayload>(text)) {
        Some(Ok(payload)) => {
            debug!(categories = payload.categories.len(), "using embedded state");
            controller.adopt(payload);
            future::ready(()).boxed_local()
        }
        Some(Err(e)) => {
            warn!(error = %e, "embedded state unreadable, refreshing");
            controller.dispatch(Action::Refresh)
        }
        None => controller.dispatch(Action::Refresh),
    }
}
