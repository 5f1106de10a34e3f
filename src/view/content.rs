//! Result list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, RowDescriptor, SearchResult, UiState};

use super::utils::{format_price, render_scrollable_list, truncate_string};

pub fn render_results(frame: &mut Frame, area: Rect, ui_state: &UiState, rows: &[RowDescriptor]) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    // Before the first search there are no rows at all; show a hint instead.
    if rows.is_empty() {
        let hint = Paragraph::new(
            "Type a search term and press Enter\n\nUse ←/→ to filter by category\nUse Tab to switch between search and results",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    match rows {
        [RowDescriptor::Loading] => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
        [RowDescriptor::NothingFound] => {
            let nothing = Paragraph::new("(Nothing found)")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(nothing, area);
        }
        _ => {
            let content_width = area.width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| match row {
                    RowDescriptor::Result(result) => {
                        result_item(result, i == ui_state.results_selected, is_focused, content_width)
                    }
                    // Unreachable in a populated projection; render inert.
                    RowDescriptor::Loading => ListItem::new("Loading..."),
                    RowDescriptor::NothingFound => ListItem::new("(Nothing found)"),
                })
                .collect();

            render_scrollable_list(frame, area, items, ui_state.results_selected, block);
        }
    }
}

fn result_item(
    result: &SearchResult,
    is_selected: bool,
    is_focused: bool,
    content_width: usize,
) -> ListItem<'static> {
    let name_width = (content_width * 40 / 100).max(12);
    let artist_width = (content_width * 30 / 100).max(10);

    let style = if is_selected && is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let price = result
        .price
        .map(|p| format_price(p, result.currency.as_deref()))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::raw(truncate_string(&result.name, name_width)),
        Span::raw("  "),
        Span::styled(
            truncate_string(&result.artist, artist_width),
            if is_selected && is_focused {
                style
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        Span::raw("  "),
        Span::styled(
            format!("{:<8}", result.kind.label()),
            if is_selected && is_focused {
                style
            } else {
                Style::default().fg(Color::Cyan)
            },
        ),
        Span::raw("  "),
        Span::raw(price),
    ]);

    ListItem::new(line).style(style)
}
