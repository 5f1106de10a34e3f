//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::results::SearchResult;
use super::session::{RowDescriptor, SearchSession, SearchToken};
use super::types::{ActiveSection, CategoryFilter, NetworkError, UiState};

/// Main application model containing all state
pub struct AppModel {
    session: Arc<Mutex<SearchSession>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SearchSession::new())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Search session
    // ========================================================================

    pub async fn begin_search(&self) -> SearchToken {
        let token = self.session.lock().await.begin_search();
        let mut state = self.ui_state.lock().await;
        state.results_selected = 0;
        token
    }

    pub async fn is_current_search(&self, token: SearchToken) -> bool {
        self.session.lock().await.is_current(token)
    }

    pub async fn complete_search(&self, token: SearchToken, results: Vec<SearchResult>) -> bool {
        self.session.lock().await.complete(token, results)
    }

    pub async fn fail_search(&self, token: SearchToken) -> bool {
        self.session.lock().await.fail(token)
    }

    pub async fn get_row_projection(&self) -> Vec<RowDescriptor> {
        self.session.lock().await.row_projection()
    }

    pub async fn row_count(&self) -> usize {
        self.session.lock().await.row_count()
    }

    pub async fn row_content(&self, index: usize) -> Option<RowDescriptor> {
        self.session.lock().await.row_content(index)
    }

    pub async fn is_row_selectable(&self, index: usize) -> bool {
        self.session.lock().await.is_row_selectable(index)
    }

    pub async fn is_loading(&self) -> bool {
        self.session.lock().await.is_loading()
    }

    pub async fn has_searched(&self) -> bool {
        self.session.lock().await.has_searched()
    }

    pub async fn session_revision(&self) -> u64 {
        self.session.lock().await.revision()
    }

    /// The currently highlighted result, if the highlighted row is selectable.
    pub async fn get_selected_result(&self) -> Option<SearchResult> {
        let index = self.ui_state.lock().await.results_selected;
        let session = self.session.lock().await;
        if !session.is_row_selectable(index) {
            return None;
        }
        match session.row_content(index) {
            Some(RowDescriptor::Result(result)) => Some(result),
            _ => None,
        }
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    pub async fn clear_search_query(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.clear();
    }

    pub async fn get_category(&self) -> CategoryFilter {
        self.ui_state.lock().await.category
    }

    pub async fn cycle_category(&self, forward: bool) -> CategoryFilter {
        let mut state = self.ui_state.lock().await;
        state.category = if forward {
            state.category.next()
        } else {
            state.category.prev()
        };
        state.category
    }

    pub async fn results_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.results_selected > 0 {
            state.results_selected -= 1;
        }
    }

    pub async fn results_move_down(&self) {
        let row_count = self.session.lock().await.row_count();
        let mut state = self.ui_state.lock().await;
        if state.results_selected < row_count.saturating_sub(1) {
            state.results_selected += 1;
        }
    }

    // ========================================================================
    // Error notification
    // ========================================================================

    pub async fn set_error(&self, error: NetworkError) {
        let mut state = self.ui_state.lock().await;
        state.error = Some(error);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error = None;
                state.error_timestamp = None;
            }
        }
    }

    // ========================================================================
    // Help popup & lifecycle
    // ========================================================================

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
