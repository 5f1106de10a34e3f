//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model and the transport. It is organized into
//! submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search submission, cancellation, and completion handling

mod input;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;

use crate::model::AppModel;
use crate::transport::Transport;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) transport: Arc<dyn Transport>,
    // Abort handle of the in-flight search task, if any. Replaced wholesale
    // on each submission.
    active_request: Arc<Mutex<Option<AbortHandle>>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, transport: Arc<dyn Transport>) -> Self {
        Self {
            model,
            transport,
            active_request: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) async fn cancel_active_request(&self) {
        if let Some(handle) = self.active_request.lock().await.take() {
            tracing::debug!("cancelling in-flight search request");
            handle.abort();
        }
    }

    pub(crate) async fn set_active_request(&self, handle: AbortHandle) {
        *self.active_request.lock().await = Some(handle);
    }
}
