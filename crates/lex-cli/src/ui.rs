//! Terminal preferences, resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrowest terminal the table renderer will shrink to.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let tables = flags.format == OutputFormat::Table;
    let prefs = UiPrefs {
        table_color: tables && !flags.quiet && color_allowed(),
        term_width: tables.then(columns).flatten(),
    };
    if PREFS.set(prefs).is_err() {
        tracing::debug!("terminal preferences already initialized");
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or_default()
}

fn color_allowed() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn columns() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .trim()
        .parse::<usize>()
        .ok()
        .map(|width| width.max(MIN_TERM_WIDTH))
}
