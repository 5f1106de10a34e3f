//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Top bar structure (search bar, category tabs)
//! - `content`: Result list rendering
//! - `overlays`: Modal overlays (error alert, help)

mod content;
mod layout;
mod overlays;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{RowDescriptor, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, rows: &[RowDescriptor]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Length(3), // Category tabs
                Constraint::Min(0),    // Result list
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], ui_state);
        layout::render_category_tabs(frame, chunks[1], ui_state);
        content::render_results(frame, chunks[2], ui_state, rows);

        // Error alert overlay (if a request failed)
        if ui_state.error.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
