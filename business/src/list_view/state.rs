//! View state driving the visible page of the employee list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    FirstName,
    LastName,
    Email,
    City,
    Country,
}

impl SortKey {
    /// All columns in table order.
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::City,
        Self::Country,
    ];

    /// Field name as it appears in the employee payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::City => "city",
            Self::Country => "country",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::City => "City",
            Self::Country => "Country",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key `{0}` (expected one of firstName, lastName, email, city, country)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    /// Accepts the payload field name in any case, plus `first-name` style
    /// and `first_name` style spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ParseSortKeyError(s.to_owned()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// One step of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Prev,
    Next,
}

/// Mutable state behind the visible page.
///
/// Only [`crate::ListViewEngine`] mutates it, through its operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_text: String,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indicator for `key` when it is the active sort column.
    pub fn sort_indicator(&self, key: SortKey) -> Option<&'static str> {
        (self.sort_key == key).then(|| self.sort_order.indicator())
    }
}
