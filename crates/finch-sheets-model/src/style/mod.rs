//! Range styling types
//!
//! A [`RangeStyle`] describes formatting to apply to a range of cells.
//! Unlike a full cell style, every facet is optional: an unset facet means
//! "leave that attribute as it is" when the style is applied, so styles can
//! be layered without clobbering each other.

mod border;
mod color;
mod font;

pub use border::{BorderEdge, BorderLineStyle, RangeBorders};
pub use color::Color;
pub use font::FontStyle;

/// Formatting for a range of cells; all facets optional
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeStyle {
    /// Font settings
    pub font: FontStyle,
    /// Background fill color
    pub fill: Option<Color>,
    /// Borders
    pub borders: RangeBorders,
    /// Horizontal alignment
    pub horizontal_alignment: Option<HorizontalAlignment>,
    /// Vertical alignment
    pub vertical_alignment: Option<VerticalAlignment>,
    /// Number format code (e.g. "0.00%", "yyyy-mm-dd")
    pub number_format: Option<String>,
    /// Wrap text
    pub wrap_text: Option<bool>,
}

impl RangeStyle {
    /// Create a style with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font facet
    pub fn with_font(mut self, font: FontStyle) -> Self {
        self.font = font;
        self
    }

    /// Set the background fill color
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set the borders facet
    pub fn with_borders(mut self, borders: RangeBorders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the horizontal alignment
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(alignment);
        self
    }

    /// Set the vertical alignment
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = Some(alignment);
        self
    }

    /// Set the number format code
    pub fn with_number_format(mut self, format: impl Into<String>) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Set text wrapping
    pub fn with_wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = Some(wrap);
        self
    }

    /// Whether no facet is set
    pub fn is_empty(&self) -> bool {
        self.font.is_empty()
            && self.fill.is_none()
            && self.borders.is_empty()
            && self.horizontal_alignment.is_none()
            && self.vertical_alignment.is_none()
            && self.number_format.is_none()
            && self.wrap_text.is_none()
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Left aligned
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
    /// Justified
    Justify,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Aligned to the top
    Top,
    /// Centered
    Center,
    /// Aligned to the bottom
    Bottom,
}
