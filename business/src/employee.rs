//! Employee records as returned by the employees endpoint.

use serde::{Deserialize, Serialize};

use crate::list_view::SortKey;

/// One employee's display data.
///
/// Every field may be absent in the payload. Filtering and sorting read fields
/// through [`Employee::field`], which treats a missing value as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Employee {
    /// Value of the column `key`, empty when absent.
    #[inline]
    pub fn field(&self, key: SortKey) -> &str {
        let value = match key {
            SortKey::FirstName => &self.first_name,
            SortKey::LastName => &self.last_name,
            SortKey::Email => &self.email,
            SortKey::City => &self.city,
            SortKey::Country => &self.country,
        };
        value.as_deref().unwrap_or_default()
    }

    /// Builder-style constructor used by tests and demo data.
    pub fn named(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: Some(first_name.to_owned()),
            last_name: Some(last_name.to_owned()),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self
    }

    pub fn with_location(mut self, city: &str, country: &str) -> Self {
        self.city = Some(city.to_owned());
        self.country = Some(country.to_owned());
        self
    }
}
