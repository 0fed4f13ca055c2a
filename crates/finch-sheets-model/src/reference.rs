//! Worksheet-qualified cell references and A1 notation
//!
//! A [`CellReference`] pins down a single cell by worksheet name plus 1-based
//! row and column numbers. It can be rendered as a bare A1 reference
//! (`"AZ423"`) or a worksheet-qualified one (`"'my sheet'!AZ423"`), and
//! parsed back from either form.
//!
//! ## Example
//!
//! ```rust
//! use finch_sheets_model::CellReference;
//!
//! let cell = CellReference::new("budget", 423, 52).unwrap();
//! assert_eq!(cell.to_a1(), "AZ423");
//! assert_eq!(cell.to_qualified_a1(), "'budget'!AZ423");
//!
//! let parsed = CellReference::from_qualified_a1("'budget'!AZ423").unwrap();
//! assert_eq!(parsed, cell);
//! ```

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Longest valid column name ("XFD" = column 16384)
pub const MAX_COLUMN_NAME_LEN: usize = 3;

/// Worksheet name of the "known missing" sentinel reference
///
/// Deliberately unpronounceable so it cannot collide with a worksheet name
/// anyone would choose on purpose. It is still a *valid* name under the
/// worksheet-name grammar, so the sentinel behaves like any other value.
pub const KNOWN_MISSING_WORKSHEET_NAME: &str = " !\"#$%&'()+,-.;<=>@^_`{|}~54320";

/// Worksheet name grammar.
///
/// First and last characters are printable ASCII minus the quote and the
/// characters Excel reserves (`\ / * [ ] : ?`); interior characters
/// additionally allow the single quote. Length 1-31.
static WORKSHEET_NAME: Lazy<Regex> = Lazy::new(|| {
    const EDGE: &str = r"[\x20-\x26\x28\x29\x2B-\x2E\x30-\x39\x3B-\x3E\x40-\x5A\x5E-\x7E]";
    const INNER: &str = r"[\x20-\x29\x2B-\x2E\x30-\x39\x3B-\x3E\x40-\x5A\x5E-\x7E]";
    Regex::new(&format!("^(?:{EDGE}|{EDGE}{INNER}{{0,29}}{EDGE})$"))
        .expect("worksheet name pattern is valid")
});

/// Bare A1 reference grammar: 1-3 column letters, then a row number with no
/// leading zero. The digit count is capped so the row can always be parsed
/// as a `u32`; the numeric bound is still checked separately since e.g.
/// `9999999` passes the pattern.
static BARE_A1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{1,3}[1-9][0-9]{0,6}$").expect("A1 pattern is valid"));

/// A reference to a single worksheet cell
///
/// Immutable after construction; all three fields are validated by
/// [`CellReference::new`]. Rows and columns are 1-based, matching the
/// numbers a spreadsheet user sees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellReference {
    worksheet_name: String,
    row: u32,
    column: u16,
}

impl CellReference {
    /// Create a validated cell reference
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the worksheet name is empty,
    /// all-whitespace, longer than 31 characters (reported with its own
    /// message, ahead of the pattern check), starts or ends with a single
    /// quote, or contains any of `\ / * [ ] : ?` or a CR/LF.
    /// Returns [`Error::OutOfRange`] if the row is outside 1..=1,048,576
    /// or the column is outside 1..=16,384.
    pub fn new(worksheet_name: impl Into<String>, row: u32, column: u16) -> Result<Self> {
        let worksheet_name = worksheet_name.into();
        validate_worksheet_name(&worksheet_name)?;

        if row < 1 || row > MAX_ROWS {
            return Err(Error::OutOfRange {
                field: "row number",
                value: row,
                min: 1,
                max: MAX_ROWS,
            });
        }
        if column < 1 || column > MAX_COLS {
            return Err(Error::OutOfRange {
                field: "column number",
                value: u32::from(column),
                min: 1,
                max: u32::from(MAX_COLS),
            });
        }

        Ok(Self {
            worksheet_name,
            row,
            column,
        })
    }

    /// The worksheet this reference points into
    pub fn worksheet_name(&self) -> &str {
        &self.worksheet_name
    }

    /// 1-based row number
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 1-based column number
    pub fn column(&self) -> u16 {
        self.column
    }

    /// Convert a 1-based column number to its letter name
    ///
    /// Bijective base-26: there is no zero digit, so column 26 is `"Z"` and
    /// column 27 is `"AA"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use finch_sheets_model::CellReference;
    ///
    /// assert_eq!(CellReference::column_number_to_name(1).unwrap(), "A");
    /// assert_eq!(CellReference::column_number_to_name(703).unwrap(), "AAA");
    /// assert_eq!(CellReference::column_number_to_name(16384).unwrap(), "XFD");
    /// ```
    pub fn column_number_to_name(column: u16) -> Result<String> {
        if column < 1 || column > MAX_COLS {
            return Err(Error::OutOfRange {
                field: "column number",
                value: u32::from(column),
                min: 1,
                max: u32::from(MAX_COLS),
            });
        }

        Ok(column_letters(column))
    }

    /// Convert a column letter name back to its 1-based number
    ///
    /// Case-insensitive; inverse of [`column_number_to_name`].
    ///
    /// [`column_number_to_name`]: CellReference::column_number_to_name
    pub fn column_name_to_number(name: &str) -> Result<u16> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("column name is empty".into()));
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidArgument(format!(
                "column name '{}' contains non-alphabetic characters",
                name
            )));
        }
        if name.len() > MAX_COLUMN_NAME_LEN {
            return Err(Error::OutOfRange {
                field: "column name length",
                value: name.len() as u32,
                min: 1,
                max: MAX_COLUMN_NAME_LEN as u32,
            });
        }

        let mut number: u32 = 0;
        for c in name.chars() {
            number = number * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }
        if number > u32::from(MAX_COLS) {
            return Err(Error::OutOfRange {
                field: "column number",
                value: number,
                min: 1,
                max: u32::from(MAX_COLS),
            });
        }
        Ok(number as u16)
    }

    /// Render as a bare A1 reference, e.g. `"AHT569484"`
    pub fn to_a1(&self) -> String {
        // self.column is validated at construction, so no range check here
        format!("{}{}", column_letters(self.column), self.row)
    }

    /// Render as a worksheet-qualified A1 reference
    ///
    /// The worksheet name is wrapped in single quotes with any embedded
    /// quote doubled, e.g. worksheet `my'sheet` renders as
    /// `'my''sheet'!A1`.
    pub fn to_qualified_a1(&self) -> String {
        format!(
            "'{}'!{}",
            self.worksheet_name.replace('\'', "''"),
            self.to_a1()
        )
    }

    /// Parse a bare A1 reference into a cell on the given worksheet
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `a1` is empty/whitespace or is not
    /// matched by the A1 pattern (1-3 letters then digits with no leading
    /// zero); [`Error::OutOfRange`] if the column exceeds 16,384 or the row
    /// exceeds 1,048,576.
    pub fn from_a1(worksheet_name: impl Into<String>, a1: &str) -> Result<Self> {
        if a1.trim().is_empty() {
            return Err(Error::InvalidArgument("A1 reference is empty".into()));
        }
        if !BARE_A1.is_match(a1) {
            return Err(Error::InvalidArgument(format!(
                "A1 reference '{}' is not matched by the expected pattern",
                a1
            )));
        }

        let letters: String = a1.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
        let digits = &a1[letters.len()..];

        let column = Self::column_name_to_number(&letters)?;
        let row: u32 = digits.parse().map_err(|_| {
            Error::InvalidArgument(format!("row number '{}' is not a valid integer", digits))
        })?;
        if row > MAX_ROWS {
            return Err(Error::OutOfRange {
                field: "row number",
                value: row,
                min: 1,
                max: MAX_ROWS,
            });
        }

        Self::new(worksheet_name, row, column)
    }

    /// Parse a worksheet-qualified A1 reference such as `'budget'!AZ423`
    ///
    /// Splits on the first `!`; the part before it must be at least three
    /// characters and enclosed in single quotes. Only the outer quotes are
    /// stripped; doubled interior quotes are kept as written.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a missing separator or missing quote
    /// delimiters; otherwise whatever [`CellReference::from_a1`] reports
    /// for the remainder.
    pub fn from_qualified_a1(reference: &str) -> Result<Self> {
        if reference.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "worksheet-qualified reference is empty".into(),
            ));
        }
        let Some(sep) = reference.find('!') else {
            return Err(Error::InvalidArgument(format!(
                "worksheet-qualified reference '{}' has no '!' separator",
                reference
            )));
        };

        let quoted = &reference[..sep];
        if quoted.chars().count() < 3
            || !quoted.starts_with('\'')
            || !quoted.ends_with('\'')
        {
            return Err(Error::InvalidArgument(format!(
                "worksheet name in '{}' is not enclosed in single quotes",
                reference
            )));
        }

        let name = &quoted[1..quoted.len() - 1];
        Self::from_a1(name, &reference[sep + 1..])
    }

    /// The "known missing" sentinel reference
    ///
    /// A real, valid value used where code needs "a reference, but known
    /// not to point at data" without resorting to `Option`.
    pub fn known_missing() -> Self {
        Self {
            worksheet_name: KNOWN_MISSING_WORKSHEET_NAME.to_string(),
            row: 1,
            column: 1,
        }
    }

    /// Whether this is the "known missing" sentinel
    pub fn is_known_missing(&self) -> bool {
        self.row == 1 && self.column == 1 && self.worksheet_name == KNOWN_MISSING_WORKSHEET_NAME
    }
}

impl fmt::Display for CellReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known_missing() {
            write!(f, "KNOWN MISSING")
        } else {
            write!(f, "{}", self.to_qualified_a1())
        }
    }
}

impl FromStr for CellReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_qualified_a1(s)
    }
}

/// Bijective base-26 letter name for a 1-based column; caller has already
/// range-checked the column
fn column_letters(column: u16) -> String {
    let mut name = String::new();
    let mut n = u32::from(column);
    while n > 0 {
        n -= 1;
        name.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    name
}

fn validate_worksheet_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "worksheet name is empty or whitespace".into(),
        ));
    }
    // The pattern's repetition bound also caps the length at 31; checking
    // first reports the limit instead of a generic pattern mismatch.
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidArgument(format!(
            "worksheet name '{}' is longer than {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if !WORKSHEET_NAME.is_match(name) {
        return Err(Error::InvalidArgument(format!(
            "worksheet name '{}' is not matched by the expected pattern",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_number_to_name() {
        assert_eq!(CellReference::column_number_to_name(1).unwrap(), "A");
        assert_eq!(CellReference::column_number_to_name(2).unwrap(), "B");
        assert_eq!(CellReference::column_number_to_name(26).unwrap(), "Z");
        assert_eq!(CellReference::column_number_to_name(27).unwrap(), "AA");
        assert_eq!(CellReference::column_number_to_name(52).unwrap(), "AZ");
        assert_eq!(CellReference::column_number_to_name(702).unwrap(), "ZZ");
        assert_eq!(CellReference::column_number_to_name(703).unwrap(), "AAA");
        assert_eq!(CellReference::column_number_to_name(16384).unwrap(), "XFD");
    }

    #[test]
    fn test_column_number_to_name_out_of_range() {
        assert!(matches!(
            CellReference::column_number_to_name(0),
            Err(Error::OutOfRange { field: "column number", .. })
        ));
        assert!(matches!(
            CellReference::column_number_to_name(16385),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_column_name_to_number() {
        assert_eq!(CellReference::column_name_to_number("A").unwrap(), 1);
        assert_eq!(CellReference::column_name_to_number("Z").unwrap(), 26);
        assert_eq!(CellReference::column_name_to_number("AA").unwrap(), 27);
        assert_eq!(CellReference::column_name_to_number("AZ").unwrap(), 52);
        assert_eq!(CellReference::column_name_to_number("ZZ").unwrap(), 702);
        assert_eq!(CellReference::column_name_to_number("AAA").unwrap(), 703);
        assert_eq!(CellReference::column_name_to_number("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(CellReference::column_name_to_number("a").unwrap(), 1);
        assert_eq!(CellReference::column_name_to_number("xfd").unwrap(), 16384);
    }

    #[test]
    fn test_column_name_to_number_errors() {
        assert!(matches!(
            CellReference::column_name_to_number(""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            CellReference::column_name_to_number("A1"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            CellReference::column_name_to_number("AAAA"),
            Err(Error::OutOfRange { field: "column name length", .. })
        ));
        // Valid shape, but past the last column
        assert!(matches!(
            CellReference::column_name_to_number("XFE"),
            Err(Error::OutOfRange { field: "column number", .. })
        ));
        assert!(matches!(
            CellReference::column_name_to_number("ZZZ"),
            Err(Error::OutOfRange { field: "column number", .. })
        ));
    }

    #[test]
    fn test_construct_bounds() {
        assert!(CellReference::new("s", 1, 1).is_ok());
        assert!(CellReference::new("s", 1_048_576, 16_384).is_ok());

        assert!(matches!(
            CellReference::new("s", 0, 1),
            Err(Error::OutOfRange { field: "row number", .. })
        ));
        assert!(matches!(
            CellReference::new("s", 1_048_577, 1),
            Err(Error::OutOfRange { field: "row number", .. })
        ));
        assert!(matches!(
            CellReference::new("s", 1, 0),
            Err(Error::OutOfRange { field: "column number", .. })
        ));
        assert!(matches!(
            CellReference::new("s", 1, 16_385),
            Err(Error::OutOfRange { field: "column number", .. })
        ));
    }

    #[test]
    fn test_construct_worksheet_name_errors() {
        assert!(CellReference::new("", 1, 1).is_err());
        assert!(CellReference::new("   ", 1, 1).is_err());
        assert!(CellReference::new("a".repeat(32), 1, 1).is_err());

        for bad in ["a\\b", "a/b", "a*b", "a[b", "a]b", "a:b", "a?b"] {
            assert!(
                matches!(CellReference::new(bad, 1, 1), Err(Error::InvalidArgument(_))),
                "name {:?} should be rejected",
                bad
            );
        }

        // Quote allowed in the interior only
        assert!(CellReference::new("'start", 1, 1).is_err());
        assert!(CellReference::new("end'", 1, 1).is_err());
        assert!(CellReference::new("mid'dle", 1, 1).is_ok());

        assert!(CellReference::new("a\rb", 1, 1).is_err());
        assert!(CellReference::new("a\nb", 1, 1).is_err());
    }

    #[test]
    fn test_construct_overlong_name_reports_length() {
        let err = CellReference::new("a".repeat(32), 1, 1).unwrap_err();
        assert!(
            err.to_string().contains("longer than 31 characters"),
            "unexpected message: {}",
            err
        );
    }

    #[test]
    fn test_construct_accepts_31_chars() {
        let name = "a".repeat(31);
        let cell = CellReference::new(name.clone(), 1, 1).unwrap();
        assert_eq!(cell.worksheet_name(), name);
    }

    #[test]
    fn test_to_a1() {
        let cell = CellReference::new("my-worksheet", 569_484, 904).unwrap();
        assert_eq!(cell.to_a1(), "AHT569484");
    }

    #[test]
    fn test_to_qualified_a1_escapes_quotes() {
        let cell = CellReference::new("my'work'sheet", 569_484, 904).unwrap();
        assert_eq!(cell.to_qualified_a1(), "'my''work''sheet'!AHT569484");
    }

    #[test]
    fn test_from_a1() {
        let cell = CellReference::from_a1("worksheet-234234", "AZ423").unwrap();
        assert_eq!(cell.worksheet_name(), "worksheet-234234");
        assert_eq!(cell.row(), 423);
        assert_eq!(cell.column(), 52);

        // Lowercase column letters are fine
        let cell = CellReference::from_a1("s", "az423").unwrap();
        assert_eq!(cell.column(), 52);
    }

    #[test]
    fn test_from_a1_pattern_errors() {
        for bad in ["", "  ", "A", "1", "1A", "A0", "A01", "AAAA1", "A1B", "$A$1", "A 1"] {
            assert!(
                matches!(
                    CellReference::from_a1("s", bad),
                    Err(Error::InvalidArgument(_))
                ),
                "input {:?} should be rejected as malformed",
                bad
            );
        }
    }

    #[test]
    fn test_from_a1_range_errors() {
        assert!(matches!(
            CellReference::from_a1("s", "ZZZ1"),
            Err(Error::OutOfRange { field: "column number", .. })
        ));
        assert!(matches!(
            CellReference::from_a1("s", "A9999999"),
            Err(Error::OutOfRange { field: "row number", .. })
        ));
        // Largest valid cell
        assert!(CellReference::from_a1("s", "XFD1048576").is_ok());
    }

    #[test]
    fn test_from_qualified_a1() {
        let cell = CellReference::from_qualified_a1("'budget 2024'!AZ423").unwrap();
        assert_eq!(cell.worksheet_name(), "budget 2024");
        assert_eq!(cell.row(), 423);
        assert_eq!(cell.column(), 52);
    }

    #[test]
    fn test_from_qualified_a1_errors() {
        for bad in [
            "",
            "   ",
            "A1",            // no separator
            "budget!A1",     // unquoted name
            "'b!A1",         // no closing quote before separator
            "''!A1",         // quoted part shorter than 3 chars
            "'budget'A1",    // separator missing
        ] {
            assert!(
                matches!(
                    CellReference::from_qualified_a1(bad),
                    Err(Error::InvalidArgument(_))
                ),
                "input {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_from_qualified_a1_strips_outer_quotes_only() {
        // Doubled interior quotes are not collapsed on read; the parsed
        // name keeps them as written.
        let cell = CellReference::from_qualified_a1("'my''sheet'!A1").unwrap();
        assert_eq!(cell.worksheet_name(), "my''sheet");
    }

    #[test]
    fn test_from_str() {
        let cell: CellReference = "'data'!B2".parse().unwrap();
        assert_eq!(cell.worksheet_name(), "data");
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.column(), 2);
    }

    #[test]
    fn test_known_missing() {
        let missing = CellReference::known_missing();
        assert!(missing.is_known_missing());
        assert_eq!(missing.row(), 1);
        assert_eq!(missing.column(), 1);
        assert_eq!(missing.worksheet_name(), KNOWN_MISSING_WORKSHEET_NAME);

        let ordinary = CellReference::new("data", 1, 1).unwrap();
        assert!(!ordinary.is_known_missing());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CellReference::known_missing().to_string(),
            "KNOWN MISSING"
        );
        let cell = CellReference::new("data", 2, 3).unwrap();
        assert_eq!(cell.to_string(), "'data'!C2");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = CellReference::new("data", 5, 7).unwrap();
        let b = CellReference::new("data", 5, 7).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, CellReference::new("other", 5, 7).unwrap());
        assert_ne!(a, CellReference::new("data", 6, 7).unwrap());
        assert_ne!(a, CellReference::new("data", 5, 8).unwrap());
    }
}
