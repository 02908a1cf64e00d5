use clap::{Args, Subcommand};
use lex_core::Locale;

/// Menu commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MenuCommands {
    /// Print the menu document with its sync status.
    Show,
    /// Compare the HTML navigation against the menu document.
    Validate,
    /// Add HTML-only navigation items to the menu document.
    Sync,
    /// Remove an item (at any depth) from the menu document.
    Delete {
        /// Menu item id.
        id: String,
    },
    /// Print the navigation markup the menu document renders to.
    Render,
}

/// Addresses one page.
#[derive(Clone, Debug, Args)]
pub struct PageArg {
    /// Locale: en or he.
    pub lang: Locale,
    /// Page name, e.g. `index` or `about`.
    pub name: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum PageCommands {
    /// List pages of a locale.
    List {
        /// Locale: en or he.
        lang: Locale,
    },
    /// Print a page's fields.
    Get(PageArg),
    /// Update selected page fields.
    Set(PageSetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PageSetArgs {
    #[command(flatten)]
    pub page: PageArg,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub h1: Option<String>,
    #[arg(long)]
    pub meta_description: Option<String>,
    /// File whose contents replace the inner HTML of `<main>`.
    #[arg(long)]
    pub main_file: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SectionCommands {
    /// List catalog sections and whether the page has them.
    List(PageArg),
    /// Print a section's inner HTML.
    Get(SectionArg),
    /// Replace a section's inner HTML.
    Set(SectionSetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SectionArg {
    #[command(flatten)]
    pub page: PageArg,
    /// Section name from the catalog, e.g. `hero`.
    pub section: String,
}

#[derive(Clone, Debug, Args)]
#[command(group(clap::ArgGroup::new("content").required(true).args(["html", "file"])))]
pub struct SectionSetArgs {
    #[command(flatten)]
    pub target: SectionArg,
    /// New inner HTML.
    #[arg(long)]
    pub html: Option<String>,
    /// File holding the new inner HTML.
    #[arg(long)]
    pub file: Option<String>,
}

/// Admin credential commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Print the SHA-256 digest to store as auth.password_hash.
    HashPassword {
        /// Password; read from stdin when omitted.
        password: Option<String>,
    },
    /// Issue an admin token from the configured secret (for scripts).
    Token,
}

impl AuthCommands {
    /// Commands that need no configuration.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        matches!(self, Self::HashPassword { .. })
    }
}
