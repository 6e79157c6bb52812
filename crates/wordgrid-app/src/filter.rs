//! Filter chips.
//!
//! A horizontal run of labelled chips the user toggles on and off, led by a
//! clear chip that is only shown while something is selected.

use std::collections::BTreeSet;
use wordgrid_core::{Block, Insets, Measure, Size, TextBlock};
use wordgrid_layout::{Grid, LayoutError, Track};

/// Receives selection changes.
pub trait FilterDelegate {
    /// A chip was toggled, on or off.
    fn on_filter_selected(&mut self, label: &str);

    /// The selection became empty.
    fn on_filter_clear(&mut self);
}

/// Chip geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterStyle {
    /// Label font size in pixels
    pub font_size: f32,
    /// Space left and right of each label inside its chip
    pub chip_padding: f32,
    /// Space between neighbouring chips
    pub item_spacing: f32,
    /// Side of the clear chip's icon
    pub clear_icon: f32,
    /// Inset around the clear chip's icon
    pub clear_inset: f32,
}

impl Default for FilterStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            chip_padding: 20.0,
            item_spacing: 10.0,
            clear_icon: 16.0,
            clear_inset: 5.0,
        }
    }
}

/// Toggleable set of filter labels.
///
/// # Examples
///
/// ```
/// use wordgrid_app::FilterSelector;
///
/// let filters = FilterSelector::new(["Noun", "Verb", "Noun"]);
/// assert_eq!(filters.labels(), ["Noun", "Verb"]);
/// assert!(!filters.clear_visible());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelector {
    labels: Vec<String>,
    selected: BTreeSet<String>,
}

impl FilterSelector {
    /// Create a selector; repeated labels keep their first position.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let labels = labels
            .into_iter()
            .map(Into::into)
            .filter(|label: &String| seen.insert(label.clone()))
            .collect();
        Self {
            labels,
            selected: BTreeSet::new(),
        }
    }

    /// Labels in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Currently selected labels.
    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    /// The clear chip is shown iff something is selected.
    pub fn clear_visible(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Flip the chip at `index`.
    ///
    /// Returns the chip's new state, or `None` when there is no such chip.
    /// The delegate hears about the emptied selection before the toggle.
    pub fn toggle(&mut self, index: usize, delegate: &mut dyn FilterDelegate) -> Option<bool> {
        let label = self.labels.get(index)?.clone();
        let selected = if self.selected.remove(&label) {
            false
        } else {
            self.selected.insert(label.clone());
            true
        };

        if self.selected.is_empty() {
            delegate.on_filter_clear();
        }
        delegate.on_filter_selected(&label);
        Some(selected)
    }

    /// Deselect everything.
    pub fn clear(&mut self, delegate: &mut dyn FilterDelegate) {
        self.selected.clear();
        delegate.on_filter_clear();
    }

    /// Lay the chips out as a row: the clear chip, then one chip per label.
    pub fn build_grid(&self, style: &FilterStyle) -> Result<Grid, LayoutError> {
        let spacing = Insets::new(0.0, 0.0, 0.0, style.item_spacing);

        let mut clear = Grid::row(vec![Track::proportional(
            1.0,
            Block::new(Size::new(style.clear_icon, style.clear_icon)),
        )
        .margin(Insets::uniform(style.clear_inset))])?;
        Measure::set_hidden(&mut clear, !self.clear_visible());

        let mut tracks = vec![Track::auto(clear).margin(spacing)];
        let last = self.labels.len().saturating_sub(1);
        for (i, label) in self.labels.iter().enumerate() {
            let chip = Grid::column(vec![Track::proportional(
                1.0,
                TextBlock::new(label.as_str()).font_size(style.font_size),
            )
            .margin(Insets::symmetric(style.chip_padding, 0.0))])?;
            let margin = if i == last { Insets::ZERO } else { spacing };
            tracks.push(Track::auto(chip).margin(margin));
        }

        Grid::row(tracks)
    }

    /// Bring a grid built by [`FilterSelector::build_grid`] in line with the
    /// current selection.
    pub fn sync_grid(&self, grid: &mut Grid) {
        grid.set_hidden(0, !self.clear_visible());
    }
}
