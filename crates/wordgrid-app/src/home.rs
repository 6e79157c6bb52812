//! Search screen model.

use crate::client::{DictionaryClient, DictionaryError, Transport};
use crate::model::WordEntry;
use crate::overlay::LoadingOverlay;
use crate::recent::RecentSearches;
use thiserror::Error;
use tracing::{debug, warn};
use wordgrid_core::{Block, Insets, TextBlock};
use wordgrid_layout::{Alignment, Grid, LayoutError, Surface, Track};

/// Why a search produced no entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Nothing was typed.
    #[error("Text field is empty")]
    EmptyQuery,
    /// The service has no entry for the word.
    #[error("No query found for the given word")]
    InvalidWord,
    /// The request failed; the user may retry with the same term.
    #[error("{message}")]
    Connection {
        /// What went wrong
        message: String,
        /// Term to retry with
        term: String,
    },
}

impl SearchError {
    /// Dialog title for the error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::EmptyQuery | Self::InvalidWord => "Error",
            Self::Connection { .. } => "Connection Error",
        }
    }

    /// Term to search again with, for errors worth retrying.
    #[must_use]
    pub fn retry_term(&self) -> Option<&str> {
        match self {
            Self::Connection { term, .. } => Some(term),
            _ => None,
        }
    }
}

/// Search screen: a query field, the recent searches and a loading overlay.
#[derive(Debug)]
pub struct HomeModel<T> {
    client: DictionaryClient<T>,
    recent: RecentSearches,
    overlay: LoadingOverlay,
}

impl<T: Transport> HomeModel<T> {
    /// Title of the search button.
    pub const SEARCH_BUTTON_TITLE: &'static str = "Search";
    /// Placeholder shown in the empty search field.
    pub const SEARCH_PLACEHOLDER: &'static str = "Search";
    /// Heading above the recent searches.
    pub const RECENT_TITLE: &'static str = "Recent search";

    /// Create the screen from its collaborators.
    pub fn new(client: DictionaryClient<T>, recent: RecentSearches, overlay: LoadingOverlay) -> Self {
        Self {
            client,
            recent,
            overlay,
        }
    }

    /// Client searches go through.
    pub const fn client(&self) -> &DictionaryClient<T> {
        &self.client
    }

    /// Recent searches, most recent first.
    pub const fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    /// Handle to the overlay shown while a search runs.
    pub const fn overlay(&self) -> &LoadingOverlay {
        &self.overlay
    }

    /// Recent search at `index`, most recent first.
    pub fn recent_search(&self, index: usize) -> Option<&str> {
        self.recent.get(index)
    }

    /// Look `term` up and return its first entry.
    ///
    /// The overlay is visible for the duration of the request. A successful
    /// search is remembered; failing to persist it is logged, not returned.
    /// A surface hosting [`HomeModel::build_grid`] does not see either
    /// change until [`HomeModel::refresh`] is called.
    pub fn search(&mut self, term: &str) -> Result<WordEntry, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.overlay.show();
        let result = self.client.lookup(term);
        self.overlay.hide();

        let entry = match result {
            Ok(entries) => entries.into_iter().next().ok_or(SearchError::InvalidWord)?,
            Err(err) if err.is_not_found() => return Err(SearchError::InvalidWord),
            Err(err) => return Err(connection_error(&err, term)),
        };
        debug!(term, "search succeeded");

        if let Err(err) = self.recent.record(term) {
            warn!(term, error = %err, "could not save recent search");
        }
        Ok(entry)
    }

    /// Search again after a failure, if the failure is retryable.
    pub fn retry(&mut self, error: &SearchError) -> Option<Result<WordEntry, SearchError>> {
        let term = error.retry_term()?.to_string();
        Some(self.search(&term))
    }

    /// Screen layout: search bar, recent searches title, one row per recent
    /// search, and the overlay in a collapsing track at the bottom.
    pub fn build_grid(&self) -> Result<Grid, LayoutError> {
        let search_bar = Grid::row(vec![
            Track::proportional(1.0, TextBlock::new(Self::SEARCH_PLACEHOLDER))
                .margin(Insets::new(8.0, 16.0, 8.0, 8.0)),
            Track::auto(TextBlock::new(Self::SEARCH_BUTTON_TITLE))
                .margin(Insets::new(8.0, 0.0, 8.0, 16.0))
                .cross(Alignment::AutoNear),
        ])?;

        let mut tracks = vec![
            Track::fixed(56.0, search_bar),
            Track::auto(TextBlock::new(Self::RECENT_TITLE).font_size(18.0))
                .margin(Insets::symmetric(16.0, 8.0)),
        ];
        tracks.extend(self.recent.iter().map(|term| {
            Track::auto(TextBlock::new(term)).margin(Insets::symmetric(16.0, 6.0))
        }));
        tracks.push(Track::proportional(1.0, Block::opaque()));
        tracks.push(Track::auto(self.overlay.clone()).cross(Alignment::AutoNear));

        Grid::column(tracks)
    }

    /// Rebuild the screen grid hosted by `surface` and mark it for layout.
    ///
    /// Picks up the current recent searches and overlay visibility.
    pub fn refresh(&self, surface: &mut Surface) -> Result<(), LayoutError> {
        *surface.root_mut() = self.build_grid()?;
        Ok(())
    }
}

fn connection_error(err: &DictionaryError, term: &str) -> SearchError {
    SearchError::Connection {
        message: err.to_string(),
        term: term.to_string(),
    }
}
