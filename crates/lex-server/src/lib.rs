//! # lex-server
//!
//! The admin HTTP API.
//!
//! Requests are parsed into an [`AdminRequest`] before anything else runs;
//! handlers receive the [`AdminState`] built at startup and return typed
//! bodies from `lex_core::api`, serialized as JSON. Failures become
//! `{error, details?}` bodies with a status chosen by [`ErrorKind`].

pub mod error;
pub mod handler;
pub mod request;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorKind};
pub use handler::{HttpResponse, handle};
pub use request::{HttpRequest, Method};
pub use routes::AdminRequest;
pub use server::{ServerError, serve};
pub use state::AdminState;
