//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Truncate to `max_width` characters with a `...` suffix, padding shorter
/// strings so columns stay aligned.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let truncated = if s.chars().count() > max_width {
        let kept: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    };
    format!("{truncated:<max_width$}")
}

pub fn format_price(price: f64, currency: Option<&str>) -> String {
    match currency {
        Some(currency) => format!("{:.2} {}", price, currency),
        None => format!("{:.2}", price),
    }
}
