//! Search submission, cancellation, and completion handling

use crate::model::{decode_results, ActiveSection, NetworkError, SearchToken};
use crate::query;
use crate::transport::{TransportError, TransportResponse};

use super::AppController;

impl AppController {
    /// Submit the text currently in the search bar against the current
    /// category filter. A query that is empty after trimming is ignored.
    pub async fn submit_search(&self) {
        let model = self.model.lock().await;
        let ui_state = model.get_ui_state().await;
        let query_text = ui_state.search_query.trim().to_string();
        if query_text.is_empty() {
            return;
        }

        // Cancel any in-flight request first so an old search can never get
        // in the way of the new one.
        self.cancel_active_request().await;

        let token = model.begin_search().await;
        tracing::debug!(query = %query_text, category = ?ui_state.category, "performing search");

        let url = match query::search_url(&query_text, ui_state.category) {
            Ok(url) => url,
            Err(e) => {
                // Precondition violation; logged, never shown to the user.
                tracing::error!(error = %e, "search URL construction failed");
                model.fail_search(token).await;
                return;
            }
        };
        drop(model);

        let controller = self.clone();
        let transport = self.transport.clone();
        let task = tokio::spawn(async move {
            let outcome = transport.issue(url).await;
            controller.finish_search(token, outcome).await;
        });
        self.set_active_request(task.abort_handle()).await;
    }

    /// Change the category filter and re-run the search with the text already
    /// in the bar.
    pub async fn change_category(&self, forward: bool) {
        let model = self.model.lock().await;
        let category = model.cycle_category(forward).await;
        tracing::debug!(?category, "category filter changed");
        drop(model);
        self.submit_search().await;
    }

    /// Handle the completion of the request identified by `token`.
    ///
    /// Taking the model lock is the hand-off back to the single mutator
    /// context; the token check then discards completions of searches that a
    /// newer submission has superseded.
    async fn finish_search(
        &self,
        token: SearchToken,
        outcome: Result<TransportResponse, TransportError>,
    ) {
        let model = self.model.lock().await;
        if !model.is_current_search(token).await {
            tracing::debug!(?token, "discarding completion of superseded search");
            return;
        }

        match outcome {
            Err(TransportError::Cancelled) => {
                // Expected when a newer search superseded this one; no state
                // change, no alert.
                tracing::debug!(?token, "search request cancelled");
            }
            Ok(response) if response.status == 200 => {
                let results = match decode_results(&response.body) {
                    Ok(results) => results,
                    Err(e) => {
                        // Renders the same as a search that found nothing.
                        tracing::error!(error = %e, "failed to decode search response");
                        Vec::new()
                    }
                };
                tracing::info!(count = results.len(), "search completed");
                if model.complete_search(token, results).await {
                    // Bring the list into focus so results are navigable
                    model.set_active_section(ActiveSection::Results).await;
                }
            }
            Ok(response) => {
                tracing::error!(status = response.status, "search request failed");
                if model.fail_search(token).await {
                    model.set_error(NetworkError::store_unavailable()).await;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "search request failed");
                if model.fail_search(token).await {
                    model.set_error(NetworkError::store_unavailable()).await;
                }
            }
        }
    }
}
