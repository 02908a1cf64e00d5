pub mod auth;
pub mod menu;
pub mod page;
pub mod schema;
pub mod section;
pub mod serve;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Dispatch a parsed command to its handler module.
pub async fn dispatch(command: Commands, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, ctx).await,
        Commands::Menu { action } => menu::handle(&action, &ctx, flags),
        Commands::Page { action } => page::handle(&action, &ctx, flags),
        Commands::Section { action } => section::handle(&action, &ctx, flags),
        Commands::Auth { action } => auth::handle(&action, &ctx, flags),
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
