use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, MenuCommands, PageCommands, SectionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the admin HTTP API.
    Serve(ServeArgs),
    /// Navigation menu: show, validate against the HTML, sync, edit.
    Menu {
        #[command(subcommand)]
        action: MenuCommands,
    },
    /// Page fields (title, h1, meta description, main content).
    Page {
        #[command(subcommand)]
        action: PageCommands,
    },
    /// Editable page sections (`data-region`).
    Section {
        #[command(subcommand)]
        action: SectionCommands,
    },
    /// Admin credentials.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Print a JSON Schema, or list the available ones.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Bind address (overrides server.bind).
    #[arg(long)]
    pub bind: Option<String>,
    /// Port (overrides server.port).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `menu_document`. Omit to list names.
    pub type_name: Option<String>,
}
