//! Route table: raw requests to typed [`AdminRequest`]s.

use lex_core::Locale;

use crate::error::{ApiError, ErrorKind};
use crate::request::{HttpRequest, Method};

/// Page address shared by the page and section routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub locale: Locale,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRequest {
    Login,
    Health,
    MenuGet,
    MenuValidate,
    MenuSync,
    MenuReplace,
    MenuDelete { item_id: String },
    PageGet(PageRef),
    PageUpdate(PageRef),
    SectionList(PageRef),
    SectionGet { page: PageRef, section: String },
    SectionReplace { page: PageRef, section: String },
}

impl AdminRequest {
    /// Everything except login and health needs a bearer token.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Health)
    }

    /// Parse a request into a route.
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown paths, `MethodNotAllowed` for a known path
    /// with the wrong method, `Validation` for bad parameters.
    pub fn parse(request: &HttpRequest) -> Result<Self, ApiError> {
        let segments: Vec<&str> = request.segments.iter().map(String::as_str).collect();
        let method = &request.method;

        match segments.as_slice() {
            ["api", "admin", "login"] => match method {
                Method::Post => Ok(Self::Login),
                _ => Err(not_allowed(method, request)),
            },
            ["api", "health"] => match method {
                Method::Get => Ok(Self::Health),
                _ => Err(not_allowed(method, request)),
            },
            ["api", "menu"] => match method {
                Method::Get => match request.query_param("action") {
                    None | Some("") => Ok(Self::MenuGet),
                    Some("validate") => Ok(Self::MenuValidate),
                    Some("sync") => Ok(Self::MenuSync),
                    Some(other) => Err(ApiError::validation(format!("Unknown action '{other}'"))
                        .with_details("expected 'validate' or 'sync'")),
                },
                Method::Post | Method::Put => Ok(Self::MenuReplace),
                Method::Delete => {
                    let item_id = request
                        .query_param("itemId")
                        .filter(|id| !id.is_empty())
                        .ok_or_else(|| ApiError::validation("Missing itemId query parameter"))?;
                    Ok(Self::MenuDelete {
                        item_id: item_id.to_string(),
                    })
                }
                Method::Other(_) => Err(not_allowed(method, request)),
            },
            ["api", "admin", "page", lang, name] => {
                let page = page_ref(lang, name)?;
                match method {
                    Method::Get => Ok(Self::PageGet(page)),
                    Method::Post => Ok(Self::PageUpdate(page)),
                    _ => Err(not_allowed(method, request)),
                }
            }
            ["api", "admin", "page", lang, name, "sections"] => {
                let page = page_ref(lang, name)?;
                match method {
                    Method::Get => Ok(Self::SectionList(page)),
                    _ => Err(not_allowed(method, request)),
                }
            }
            ["api", "admin", "page", lang, name, "section", section] => {
                let page = page_ref(lang, name)?;
                let section = (*section).to_string();
                match method {
                    Method::Get => Ok(Self::SectionGet { page, section }),
                    Method::Post => Ok(Self::SectionReplace { page, section }),
                    _ => Err(not_allowed(method, request)),
                }
            }
            _ => Err(ApiError::not_found(format!("No route for {}", request.path()))),
        }
    }
}

fn page_ref(lang: &str, name: &str) -> Result<PageRef, ApiError> {
    let locale = lang
        .parse::<Locale>()
        .map_err(|e| ApiError::validation(e.to_string()))?;
    Ok(PageRef {
        locale,
        name: name.to_string(),
    })
}

fn not_allowed(method: &Method, request: &HttpRequest) -> ApiError {
    ApiError::new(
        ErrorKind::MethodNotAllowed,
        format!("Method {method} not allowed on {}", request.path()),
    )
}
