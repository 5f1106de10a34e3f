//! Top bar rendering (search input, category tabs)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{ActiveSection, CategoryFilter, UiState};

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let is_focused = ui_state.active_section == ActiveSection::Search;

    let search_text = if ui_state.search_query.is_empty() {
        "Type to search the iTunes Store..."
    } else {
        &ui_state.search_query
    };

    let search_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if is_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, area);
}

pub fn render_category_tabs(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let titles: Vec<&str> = CategoryFilter::ALL.iter().map(|c| c.label()).collect();

    let tabs = Tabs::new(titles)
        .select(ui_state.category.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Category (←/→) ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(tabs, area);
}
