//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Handle error alert first (blocks all other interactions)
        if model.has_error().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.clear_error().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in the search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    model.cycle_section().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.submit_search().await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.clear_search_query().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                    return Ok(());
                }
                KeyCode::Left => {
                    drop(model);
                    self.change_category(false).await;
                    return Ok(());
                }
                KeyCode::Right => {
                    drop(model);
                    self.change_category(true).await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Q still quits even in search mode when Ctrl is pressed
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_search(c).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Handle results list navigation
        if ui_state.active_section == ActiveSection::Results {
            match key.code {
                KeyCode::Tab => {
                    model.cycle_section().await;
                    return Ok(());
                }
                KeyCode::Up => {
                    model.results_move_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.results_move_down().await;
                    return Ok(());
                }
                KeyCode::Left => {
                    drop(model);
                    self.change_category(false).await;
                    return Ok(());
                }
                KeyCode::Right => {
                    drop(model);
                    self.change_category(true).await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    // Placeholder rows (loading, nothing found) refuse selection.
                    if let Some(result) = model.get_selected_result().await {
                        tracing::info!(name = %result.name, artist = %result.artist, "result selected");
                    }
                    return Ok(());
                }
                KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.show_help_popup().await;
                    return Ok(());
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    model.set_should_quit(true).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        Ok(())
    }
}
