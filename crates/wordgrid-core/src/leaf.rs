//! Stock leaf elements.

use crate::element::{Element, Leaf, Measure};
use crate::geometry::{Rect, Size};
use crate::proposal::Proposal;
use serde::{Deserialize, Serialize};

/// A box with a fixed natural size.
///
/// `Block::opaque()` reports no natural size at all, which is how content
/// without an intrinsic size (plain views, backgrounds) behaves in auto
/// tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    natural: Size,
    hidden: bool,
    #[serde(skip)]
    frame: Rect,
}

impl Block {
    /// Create a block with the given natural size.
    #[must_use]
    pub const fn new(natural: Size) -> Self {
        Self {
            natural,
            hidden: false,
            frame: Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// A block without a natural size.
    #[must_use]
    pub const fn opaque() -> Self {
        Self::new(Size::ZERO)
    }

    /// Start hidden.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Natural size reported to layout.
    #[must_use]
    pub const fn natural(&self) -> Size {
        self.natural
    }
}

impl Measure for Block {
    fn measure(&self, proposal: Proposal) -> Size {
        proposal.constrain(self.natural)
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl Leaf for Block {
    fn place(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}

/// Text measured with fixed-advance glyph metrics.
///
/// Words wrap onto new lines when a width bound is offered; without one the
/// text stays on a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    content: String,
    /// Font size in pixels
    font_size: f32,
    /// Line height multiplier
    line_height: f32,
    hidden: bool,
    #[serde(skip)]
    frame: Rect,
}

impl TextBlock {
    /// Advance per glyph, as a fraction of the font size.
    pub const GLYPH_ADVANCE: f32 = 0.6;

    /// Create a text block with a 16px font.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 16.0,
            line_height: 1.2,
            hidden: false,
            frame: Rect::default(),
        }
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set line height multiplier.
    #[must_use]
    pub const fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    fn glyph_width(&self) -> f32 {
        self.font_size * Self::GLYPH_ADVANCE
    }

    fn line_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Greedy word wrap; returns the widest line and the line count.
    fn wrap(&self, max_width: f32) -> (f32, usize) {
        let glyph = self.glyph_width();
        let space = glyph;
        let mut widest: f32 = 0.0;
        let mut current: f32 = 0.0;
        let mut lines = 1;

        for word in self.content.split_whitespace() {
            let word_width = word.chars().count() as f32 * glyph;
            let needed = if current > 0.0 {
                current + space + word_width
            } else {
                word_width
            };

            if needed > max_width && current > 0.0 {
                widest = widest.max(current);
                current = word_width;
                lines += 1;
            } else {
                current = needed;
            }
        }

        (widest.max(current).min(max_width), lines)
    }
}

impl Measure for TextBlock {
    fn measure(&self, proposal: Proposal) -> Size {
        if self.content.trim().is_empty() {
            return proposal.constrain(Size::new(0.0, self.line_px()));
        }

        let size = match proposal.max_width {
            Some(max_width) => {
                let (width, lines) = self.wrap(max_width.max(0.0));
                Size::new(width, lines as f32 * self.line_px())
            }
            None => {
                let glyphs = self.content.split_whitespace().collect::<Vec<_>>().join(" ");
                Size::new(
                    glyphs.chars().count() as f32 * self.glyph_width(),
                    self.line_px(),
                )
            }
        };

        proposal.constrain(size)
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl Leaf for TextBlock {
    fn place(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}

impl From<Block> for Element {
    fn from(block: Block) -> Self {
        Self::leaf(block)
    }
}

impl From<TextBlock> for Element {
    fn from(text: TextBlock) -> Self {
        Self::leaf(text)
    }
}
