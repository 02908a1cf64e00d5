//! Request and response bodies of the admin API.
//!
//! Every endpoint has its own explicit type; the server never reads or
//! writes untyped JSON objects.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::menu::{MenuDocument, MenuEntry};
use crate::page::{PageContent, SectionContent, SectionInfo};
use crate::sync::SyncSummary;

/// Body of `POST /api/admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub region_schema_version: u32,
}

/// Response of `GET /api/menu`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    #[serde(flatten)]
    pub document: MenuDocument,
    /// `None` when the navigation markup could not be read.
    pub sync_status: Option<SyncSummary>,
}

/// Response of `GET /api/menu?action=sync`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub success: bool,
    pub message: String,
    pub added_items: Vec<MenuEntry>,
}

/// Body of `POST|PUT /api/menu`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuReplaceRequest {
    pub main_menu: Vec<MenuEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuWriteResponse {
    pub success: bool,
    pub message: String,
    pub menu: MenuDocument,
}

/// Response of `DELETE /api/menu?itemId=`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted: MenuEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageWriteResponse {
    pub success: bool,
    pub content: PageContent,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionListResponse {
    pub schema_version: u32,
    pub sections: Vec<SectionInfo>,
}

/// Body of `POST /api/admin/page/:lang/:name/section/:section`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionUpdateRequest {
    pub html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionWriteResponse {
    pub success: bool,
    pub section: SectionContent,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
