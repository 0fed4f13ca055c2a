//! Data validation rules
//!
//! A [`DataValidation`] constrains what may be entered in a cell. Rules come
//! in two shapes: numeric (whole-number operands) and text (string
//! operands). Either operand may be absent; a single-operand rule such as
//! "greater than 10" simply leaves the second operand unset.
//!
//! ## Example
//!
//! ```rust
//! use finch_sheets_model::DataValidation;
//!
//! let between = DataValidation::numeric(Some(1), Some(100));
//! assert!(between.is_numeric());
//! assert_eq!(between.operand1_value().as_deref(), Some("1"));
//! assert_eq!(between.operand2_value().as_deref(), Some("100"));
//!
//! let text = DataValidation::text(Some("Yes".into()), Some("No".into()));
//! assert!(text.is_text());
//! ```

/// A data validation rule
///
/// Numeric and text rules share the two-operand shape, so both expose their
/// operands through the common [`operand1_value`] / [`operand2_value`]
/// accessors as rendered strings.
///
/// [`operand1_value`]: DataValidation::operand1_value
/// [`operand2_value`]: DataValidation::operand2_value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataValidation {
    /// Whole-number validation
    Numeric {
        /// First operand (e.g. the lower bound of a "between" rule)
        operand1: Option<i64>,
        /// Second operand (e.g. the upper bound of a "between" rule)
        operand2: Option<i64>,
    },
    /// Text validation
    Text {
        /// First operand
        operand1: Option<String>,
        /// Second operand
        operand2: Option<String>,
    },
}

impl DataValidation {
    /// Create a numeric validation rule
    pub fn numeric(operand1: Option<i64>, operand2: Option<i64>) -> Self {
        Self::Numeric { operand1, operand2 }
    }

    /// Create a text validation rule
    pub fn text(operand1: Option<String>, operand2: Option<String>) -> Self {
        Self::Text { operand1, operand2 }
    }

    /// Whether this is a numeric rule
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    /// Whether this is a text rule
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// First operand rendered as a string, if set
    pub fn operand1_value(&self) -> Option<String> {
        match self {
            Self::Numeric { operand1, .. } => operand1.map(|n| n.to_string()),
            Self::Text { operand1, .. } => operand1.clone(),
        }
    }

    /// Second operand rendered as a string, if set
    pub fn operand2_value(&self) -> Option<String> {
        match self {
            Self::Numeric { operand2, .. } => operand2.map(|n| n.to_string()),
            Self::Text { operand2, .. } => operand2.clone(),
        }
    }
}
