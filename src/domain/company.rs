//! Company domain model.
//!
//! A [`Company`] is one directory entry. Records are loaded once per mount and
//! never mutated; every pipeline stage produces a new sequence.

use serde::{Deserialize, Serialize};

/// One directory entry as found in the static dataset.
///
/// Only `id`, `name`, `industry` and `employees` are inspected by the query
/// pipeline. The remaining fields are carried through for display.
///
/// `id` is expected to be unique within a loaded set; duplicates are passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub industry: String,
    /// Headcount; `None` means unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Company {
    /// Creates a record with the required fields and no optional metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use company_directory::Company;
    ///
    /// let company = Company::new(1, "TechCorp", "Berlin", "Software");
    /// assert_eq!(company.employees, None);
    /// assert_eq!(company.employees_or_zero(), 0);
    /// ```
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        location: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            industry: industry.into(),
            employees: None,
            logo: None,
            image: None,
            website: None,
            email: None,
            phone: None,
            founded_year: None,
            description: None,
        }
    }

    /// Sets the headcount.
    #[must_use]
    pub const fn with_employees(mut self, employees: u64) -> Self {
        self.employees = Some(employees);
        self
    }

    /// Employee count used for ordering. Unknown counts as zero.
    #[must_use]
    pub fn employees_or_zero(&self) -> u64 {
        self.employees.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_and_defaults() {
        let company: Company = serde_json::from_str(
            r#"{"id": 7, "name": "Acme", "foundedYear": 1999, "employees": 40}"#,
        )
        .unwrap();

        assert_eq!(company.id, 7);
        assert_eq!(company.location, "");
        assert_eq!(company.industry, "");
        assert_eq!(company.founded_year, Some(1999));
        assert_eq!(company.employees, Some(40));
        assert!(company.website.is_none());
    }

    #[test]
    fn rejects_negative_headcount() {
        let result = serde_json::from_str::<Company>(r#"{"id": 1, "name": "A", "employees": -3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_headcount_sorts_as_zero() {
        let company = Company::new(1, "A", "", "");
        assert_eq!(company.employees_or_zero(), 0);
        assert_eq!(company.with_employees(12).employees_or_zero(), 12);
    }
}
