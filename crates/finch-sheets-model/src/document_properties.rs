//! Workbook document properties
//!
//! Built-in metadata (title, author, timestamps, ...) plus a free-form
//! table of custom properties keyed by name.

use ahash::AHashMap;
use chrono::{DateTime, Utc};

/// Built-in and custom document properties of a workbook
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Subject
    pub subject: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Keywords
    pub keywords: Option<String>,
    /// Free-form comments
    pub comments: Option<String>,
    /// Category
    pub category: Option<String>,
    /// Company
    pub company: Option<String>,
    /// Manager
    pub manager: Option<String>,
    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
    /// Last modification timestamp
    pub last_modified: Option<DateTime<Utc>>,
    /// Custom properties keyed by name
    pub custom: AHashMap<String, PropertyValue>,
}

impl DocumentProperties {
    /// Create empty document properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the company
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the creation timestamp
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Add a custom property, replacing any previous value under the name
    pub fn set_custom(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.custom.insert(name.into(), value);
    }

    /// Look up a custom property by name
    pub fn custom(&self, name: &str) -> Option<&PropertyValue> {
        self.custom.get(name)
    }
}

/// Value of a custom document property
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Date/time value
    Date(DateTime<Utc>),
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}
