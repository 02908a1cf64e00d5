use anyhow::Context;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `lexa serve`. The server blocks, so it runs on the blocking pool.
pub async fn handle(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let mut config = ctx.config;
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if !config.auth.is_configured() {
        eprintln!(
            "warning: auth is not configured; set LEXSITE_AUTH__PASSWORD_HASH (see `lexa auth hash-password`) and LEXSITE_AUTH__TOKEN_SECRET"
        );
    }

    let addr = config.server.addr();
    eprintln!("Lexsite admin API on http://{addr}");

    let state = lex_server::AdminState::new(config);
    tokio::task::spawn_blocking(move || lex_server::serve(&state))
        .await
        .context("admin server task failed")?
        .with_context(|| format!("admin server on {addr} stopped"))
}
