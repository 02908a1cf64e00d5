//! Request dispatch: typed route in, JSON response out.

use lex_auth::AuthError;
use lex_core::api::{
    DeleteResponse, HealthResponse, LoginRequest, LoginResponse, MenuReplaceRequest,
    MenuWriteResponse, PageWriteResponse, SectionListResponse, SectionUpdateRequest,
    SectionWriteResponse, SyncResponse,
};
use lex_core::page::{PageUpdate, REGION_SCHEMA_VERSION, SectionContent};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ErrorKind};
use crate::request::HttpRequest;
use crate::routes::AdminRequest;
use crate::state::AdminState;

/// A JSON response ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(error) => Self::error(
                &ApiError::new(ErrorKind::Io, "Failed to encode response")
                    .with_details(error.to_string()),
            ),
        }
    }

    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        let body = serde_json::to_string(&error.body())
            .unwrap_or_else(|_| String::from(r#"{"error":"Internal error"}"#));
        Self {
            status: error.status(),
            body,
        }
    }
}

/// Route, authorize, and run one request. Never fails: errors become JSON
/// error bodies.
#[must_use]
pub fn handle(state: &AdminState, request: &HttpRequest) -> HttpResponse {
    match dispatch(state, request) {
        Ok(response) => response,
        Err(error) => {
            if error.status() >= 500 {
                tracing::error!(status = error.status(), %error, details = ?error.details, "request failed");
            } else {
                tracing::warn!(status = error.status(), %error, "request rejected");
            }
            HttpResponse::error(&error)
        }
    }
}

fn dispatch(state: &AdminState, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let route = AdminRequest::parse(request)?;
    if route.requires_auth() {
        let auth = state.auth.as_ref().ok_or(AuthError::NotConfigured)?;
        auth.authorize(request.authorization.as_deref())?;
    }
    tracing::debug!(method = %request.method, path = %request.path(), ?route, "dispatching");

    match route {
        AdminRequest::Login => {
            let body: LoginRequest = parse_body(request)?;
            let auth = state.auth.as_ref().ok_or(AuthError::NotConfigured)?;
            let issued = auth.login(&body.password)?;
            ok(&LoginResponse {
                token: issued.token,
                expires_at: issued.expires_at,
            })
        }
        AdminRequest::Health => ok(&HealthResponse {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            region_schema_version: REGION_SCHEMA_VERSION,
        }),
        AdminRequest::MenuGet => ok(&state.menu.summary()?),
        AdminRequest::MenuValidate => ok(&state.menu.validate()?),
        AdminRequest::MenuSync => {
            let result = state.menu.sync()?;
            let message = match result.added.len() {
                0 => String::from("Menu already in sync; nothing added"),
                1 => String::from("Added 1 item from the HTML navigation"),
                n => format!("Added {n} items from the HTML navigation"),
            };
            ok(&SyncResponse {
                success: true,
                message,
                added_items: result.added,
            })
        }
        AdminRequest::MenuReplace => {
            let body: MenuReplaceRequest = parse_body(request)?;
            let menu = state.menu.replace(body.main_menu)?;
            ok(&MenuWriteResponse {
                success: true,
                message: String::from("Menu saved and navigation regenerated"),
                menu,
            })
        }
        AdminRequest::MenuDelete { item_id } => {
            let result = state.menu.delete(&item_id)?;
            ok(&DeleteResponse {
                success: true,
                message: format!("Deleted menu item '{item_id}'"),
                deleted: result.deleted,
            })
        }
        AdminRequest::PageGet(page) => ok(&state.pages.read_page(page.locale, &page.name)?),
        AdminRequest::PageUpdate(page) => {
            let update: PageUpdate = parse_body(request)?;
            let content = state.pages.update_page(page.locale, &page.name, &update)?;
            ok(&PageWriteResponse {
                success: true,
                content,
            })
        }
        AdminRequest::SectionList(page) => ok(&SectionListResponse {
            schema_version: REGION_SCHEMA_VERSION,
            sections: state.pages.list_sections(page.locale, &page.name)?,
        }),
        AdminRequest::SectionGet { page, section } => {
            let html = state.pages.read_section(page.locale, &page.name, &section)?;
            ok(&SectionContent { name: section, html })
        }
        AdminRequest::SectionReplace { page, section } => {
            let body: SectionUpdateRequest = parse_body(request)?;
            let html = state
                .pages
                .replace_section(page.locale, &page.name, &section, &body.html)?;
            ok(&SectionWriteResponse {
                success: true,
                section: SectionContent { name: section, html },
            })
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
fn ok<T: Serialize>(value: &T) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::json(200, value))
}

fn parse_body<T: DeserializeOwned>(request: &HttpRequest) -> Result<T, ApiError> {
    if request.body.is_empty() {
        return Err(ApiError::validation("Request body is required"));
    }
    serde_json::from_slice(&request.body)
        .map_err(|e| ApiError::validation("Invalid JSON body").with_details(e.to_string()))
}
