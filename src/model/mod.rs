//! Model module - Application state and domain data
//!
//! This module contains everything the rest of the application reads and
//! mutates state through:
//!
//! - `types`: UI-facing types (category filter, UI state, error notification)
//! - `results`: search result records and response decoding
//! - `session`: the search session state machine and row projection
//! - `app_model`: the shared async state container

mod app_model;
pub mod results;
pub mod session;
mod types;

pub use app_model::AppModel;
pub use results::{decode_results, DecodeError, ResultKind, SearchResult};
pub use session::{RowDescriptor, SearchSession, SearchToken};
pub use types::{ActiveSection, CategoryFilter, NetworkError, UiState};
