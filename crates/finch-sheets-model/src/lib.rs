//! # finch-sheets-model
//!
//! Strongly-typed domain models for Excel concepts:
//! - [`CellReference`] - worksheet-qualified cell references and A1 notation
//! - [`DataValidation`] - numeric/text validation rules
//! - [`CellComment`] - cell annotations
//! - [`RangeStyle`] - formatting deltas for cell ranges
//! - [`DocumentProperties`] - workbook metadata
//!
//! The models are plain values: immutable or freely clonable, structurally
//! comparable, and (with the `serde` feature) serializable to JSON or any
//! other serde format.
//!
//! ## Example
//!
//! ```rust
//! use finch_sheets_model::CellReference;
//!
//! let cell = CellReference::from_qualified_a1("'budget 2024'!AZ423").unwrap();
//! assert_eq!(cell.worksheet_name(), "budget 2024");
//! assert_eq!(cell.row(), 423);
//! assert_eq!(cell.column(), 52);
//! assert_eq!(cell.to_string(), "'budget 2024'!AZ423");
//! ```

pub mod comment;
pub mod document_properties;
pub mod error;
pub mod reference;
pub mod style;
pub mod validation;

// Re-exports for convenience
pub use comment::CellComment;
pub use document_properties::{DocumentProperties, PropertyValue};
pub use error::{Error, Result};
pub use reference::{CellReference, KNOWN_MISSING_WORKSHEET_NAME, MAX_COLUMN_NAME_LEN};
pub use style::{
    BorderEdge, BorderLineStyle, Color, FontStyle, HorizontalAlignment, RangeBorders, RangeStyle,
    VerticalAlignment,
};
pub use validation::DataValidation;

/// Maximum 1-based row number in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum 1-based column number in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a worksheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
