//! Word detail screen model.

use crate::client::{DictionaryClient, DictionaryError, Transport};
use crate::filter::{FilterDelegate, FilterSelector, FilterStyle};
use crate::model::{Synonym, WordEntry};
use std::cmp::Reverse;
use tracing::debug;
use wordgrid_core::{Block, Element, Insets, Measure, TextBlock};
use wordgrid_layout::{Grid, LayoutError, Track};

/// One numbered definition as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRow {
    /// 1-based position in the visible list
    pub number: usize,
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
}

impl DefinitionRow {
    /// Prefix drawn before the part of speech, e.g. `"3 - "`.
    #[must_use]
    pub fn number_label(&self) -> String {
        format!("{} - ", self.number)
    }
}

/// Uppercase the first character and lowercase the rest.
///
/// ```
/// assert_eq!(wordgrid_app::capitalize("nOUN"), "Noun");
/// ```
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Detail screen: definitions filtered by part of speech, plus synonyms.
#[derive(Debug, Clone)]
pub struct WordDetail {
    entry: WordEntry,
    filters: FilterSelector,
    synonyms: Vec<Synonym>,
    max_synonyms: usize,
}

impl WordDetail {
    /// Build the screen for `entry`, showing at most `max_synonyms` synonyms.
    #[must_use]
    pub fn new(entry: WordEntry, max_synonyms: usize) -> Self {
        let filters = FilterSelector::new(
            entry
                .meanings
                .iter()
                .filter_map(|m| m.part_of_speech.as_deref())
                .map(capitalize),
        );
        Self {
            entry,
            filters,
            synonyms: Vec::new(),
            max_synonyms,
        }
    }

    pub const fn entry(&self) -> &WordEntry {
        &self.entry
    }

    /// Title word, capitalised.
    pub fn title(&self) -> String {
        self.entry.word.as_deref().map(capitalize).unwrap_or_default()
    }

    pub fn phonetic(&self) -> Option<&str> {
        self.entry.phonetic.as_deref().filter(|p| !p.is_empty())
    }

    /// Link to a pronunciation recording, if the service has one.
    pub fn audio_url(&self) -> Option<&str> {
        self.entry.audio_url()
    }

    pub const fn filters(&self) -> &FilterSelector {
        &self.filters
    }

    /// Toggle the filter chip at `index`.
    pub fn toggle_filter(
        &mut self,
        index: usize,
        delegate: &mut dyn FilterDelegate,
    ) -> Option<bool> {
        self.filters.toggle(index, delegate)
    }

    pub fn clear_filters(&mut self, delegate: &mut dyn FilterDelegate) {
        self.filters.clear(delegate);
    }

    /// Definitions matching the selected filters, numbered from 1.
    ///
    /// With nothing selected every definition is shown.
    pub fn rows(&self) -> Vec<DefinitionRow> {
        let selected = self.filters.selected();
        self.entry
            .meanings
            .iter()
            .filter_map(|m| {
                let part = capitalize(m.part_of_speech.as_deref().unwrap_or_default());
                (selected.is_empty() || selected.contains(&part)).then_some((part, m))
            })
            .flat_map(|(part, m)| {
                m.definitions.iter().map(move |d| (part.clone(), d))
            })
            .enumerate()
            .map(|(i, (part_of_speech, d))| DefinitionRow {
                number: i + 1,
                part_of_speech,
                definition: d.definition.clone().unwrap_or_default(),
                example: d.example.clone().filter(|e| !e.is_empty()),
            })
            .collect()
    }

    /// Replace the synonyms, highest score first. Unscored ones go last.
    pub fn set_synonyms(&mut self, mut synonyms: Vec<Synonym>) {
        synonyms.retain(|s| s.word.as_deref().is_some_and(|w| !w.is_empty()));
        synonyms.sort_by_key(|s| Reverse(s.score));
        self.synonyms = synonyms;
    }

    /// Fetch synonyms for the entry's word.
    pub fn load_synonyms<T: Transport>(
        &mut self,
        client: &DictionaryClient<T>,
    ) -> Result<(), DictionaryError> {
        let Some(word) = self.entry.word.clone() else {
            return Ok(());
        };
        let synonyms = client.synonyms(&word)?;
        debug!(word = %word, count = synonyms.len(), "loaded synonyms");
        self.set_synonyms(synonyms);
        Ok(())
    }

    /// Synonyms to display.
    pub fn synonyms(&self) -> Vec<&str> {
        self.synonyms
            .iter()
            .filter_map(|s| s.word.as_deref())
            .take(self.max_synonyms)
            .collect()
    }

    /// Screen layout: header, filter chips, one block per visible
    /// definition, then synonyms. Sections without content collapse.
    pub fn build_grid(&self, style: &FilterStyle) -> Result<Grid, LayoutError> {
        let side = Insets::symmetric(16.0, 8.0);

        let phonetic: Element = self.phonetic().map_or_else(
            || Block::opaque().hidden().into(),
            |p| TextBlock::new(p).into(),
        );
        let mut tracks = vec![
            Track::auto(TextBlock::new(self.title()).font_size(32.0)).margin(side),
            Track::auto(phonetic).margin(side),
            Track::auto(self.filters.build_grid(style)?).margin(side),
        ];

        for row in self.rows() {
            let example: Element = row.example.as_deref().map_or_else(
                || Block::opaque().hidden().into(),
                |e| TextBlock::new(e).into(),
            );
            let block = Grid::column(vec![
                Track::auto(TextBlock::new(format!(
                    "{}{}",
                    row.number_label(),
                    row.part_of_speech
                ))),
                Track::auto(TextBlock::new(row.definition)),
                Track::auto(example),
            ])?;
            tracks.push(Track::auto(block).margin(side));
        }

        let synonyms = self.synonyms();
        let mut section = Grid::column(vec![
            Track::auto(TextBlock::new("Synonyms").font_size(18.0)),
            Track::auto(TextBlock::new(synonyms.join(", "))),
        ])?;
        Measure::set_hidden(&mut section, synonyms.is_empty());
        tracks.push(Track::auto(section).margin(side));
        tracks.push(Track::proportional(1.0, Block::opaque()));

        Grid::column(tracks)
    }
}
