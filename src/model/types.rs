//! Core type definitions for the application

use std::time::Instant;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// User-selected restriction on result kind, mapped 1:1 to the endpoint's
/// `entity` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    MusicTrack,
    Software,
    Ebook,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::MusicTrack,
        CategoryFilter::Software,
        CategoryFilter::Ebook,
    ];

    pub fn entity(self) -> &'static str {
        match self {
            CategoryFilter::All => "",
            CategoryFilter::MusicTrack => "musicTrack",
            CategoryFilter::Software => "software",
            CategoryFilter::Ebook => "ebook",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::MusicTrack => "Music",
            CategoryFilter::Software => "Software",
            CategoryFilter::Ebook => "E-Books",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::MusicTrack,
            CategoryFilter::MusicTrack => CategoryFilter::Software,
            CategoryFilter::Software => CategoryFilter::Ebook,
            CategoryFilter::Ebook => CategoryFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Ebook,
            CategoryFilter::MusicTrack => CategoryFilter::All,
            CategoryFilter::Software => CategoryFilter::MusicTrack,
            CategoryFilter::Ebook => CategoryFilter::Software,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// User-visible notification emitted when a search request fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkError {
    pub title: String,
    pub message: String,
}

impl NetworkError {
    pub fn store_unavailable() -> Self {
        Self {
            title: "Whoops...".to_string(),
            message: "There was an error accessing the iTunes Store. Please try again."
                .to_string(),
        }
    }
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub category: CategoryFilter,
    pub results_selected: usize,
    pub error: Option<NetworkError>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_query: String::new(),
            category: CategoryFilter::All,
            results_selected: 0,
            error: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}
