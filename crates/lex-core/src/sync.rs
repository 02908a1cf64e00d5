//! Menu reconciliation report types.
//!
//! Reports are computed fresh on every validation call and never persisted.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of drift between the HTML navigation and the menu JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    MissingInJson,
    MissingInHtml,
    TitleMismatch,
    UrlMismatch,
    ChildrenCountMismatch,
}

impl DiscrepancyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingInJson => "missing_in_json",
            Self::MissingInHtml => "missing_in_html",
            Self::TitleMismatch => "title_mismatch",
            Self::UrlMismatch => "url_mismatch",
            Self::ChildrenCountMismatch => "children_count_mismatch",
        }
    }

    /// Content divergence is an error; presence and shape drift are warnings.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::TitleMismatch | Self::UrlMismatch => Severity::Error,
            Self::MissingInJson | Self::MissingInHtml | Self::ChildrenCountMismatch => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value captured on either side of a discrepancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DiscrepancyValue {
    Text(String),
    Count(usize),
}

impl From<&str> for DiscrepancyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DiscrepancyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<usize> for DiscrepancyValue {
    fn from(value: usize) -> Self {
        Self::Count(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuDiscrepancy {
    #[serde(rename = "type")]
    pub kind: DiscrepancyKind,
    pub id: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_value: Option<DiscrepancyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_value: Option<DiscrepancyValue>,
}

impl MenuDiscrepancy {
    /// Build a discrepancy whose severity follows from its kind.
    #[must_use]
    pub fn new(kind: DiscrepancyKind, id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            description: description.into(),
            severity: kind.severity(),
            html_value: None,
            json_value: None,
        }
    }

    #[must_use]
    pub fn with_values(
        mut self,
        html_value: impl Into<DiscrepancyValue>,
        json_value: impl Into<DiscrepancyValue>,
    ) -> Self {
        self.html_value = Some(html_value.into());
        self.json_value = Some(json_value.into());
        self
    }
}

/// Full reconciliation result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub is_in_sync: bool,
    pub total_issues: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub discrepancies: Vec<MenuDiscrepancy>,
    pub html_item_count: usize,
    pub json_item_count: usize,
    pub checked_at: DateTime<Utc>,
}

impl SyncReport {
    /// Derive the totals from a discrepancy list.
    #[must_use]
    pub fn from_discrepancies(
        discrepancies: Vec<MenuDiscrepancy>,
        html_item_count: usize,
        json_item_count: usize,
        checked_at: DateTime<Utc>,
    ) -> Self {
        let error_count = discrepancies
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = discrepancies.len() - error_count;
        Self {
            is_in_sync: discrepancies.is_empty(),
            total_issues: discrepancies.len(),
            error_count,
            warning_count,
            discrepancies,
            html_item_count,
            json_item_count,
            checked_at,
        }
    }

    /// Discrepancies of one kind.
    pub fn of_kind(&self, kind: DiscrepancyKind) -> impl Iterator<Item = &MenuDiscrepancy> {
        self.discrepancies.iter().filter(move |d| d.kind == kind)
    }

    #[must_use]
    pub const fn summary(&self) -> SyncSummary {
        SyncSummary {
            is_in_sync: self.is_in_sync,
            issue_count: self.total_issues,
            last_checked: self.checked_at,
        }
    }
}

/// Lightweight sync status attached to `GET /api/menu`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub is_in_sync: bool,
    pub issue_count: usize,
    pub last_checked: DateTime<Utc>,
}
