use std::io::BufRead;

use anyhow::Context;
use lex_auth::{Authenticator, hash_password};
use lex_core::api::LoginResponse;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordHash {
    password_hash: String,
    env: &'static str,
}

/// Handle auth commands that need no configuration.
pub fn handle_offline(action: &AuthCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::HashPassword { password } => {
            let password = match password {
                Some(password) => password.clone(),
                None => read_password_line()?,
            };
            if password.is_empty() {
                anyhow::bail!("password must not be empty");
            }
            output(
                &PasswordHash {
                    password_hash: hash_password(&password),
                    env: "LEXSITE_AUTH__PASSWORD_HASH",
                },
                flags.format,
            )
        }
        AuthCommands::Token => anyhow::bail!("`auth token` needs the auth configuration"),
    }
}

/// Handle `lexa auth <subcommand>`.
pub fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::HashPassword { .. } => handle_offline(action, flags),
        AuthCommands::Token => {
            let auth = Authenticator::from_config(&ctx.config.auth)
                .context("cannot issue tokens without a valid [auth] section")?;
            let issued = auth.issue()?;
            output(
                &LoginResponse {
                    token: issued.token,
                    expires_at: issued.expires_at,
                },
                flags.format,
            )
        }
    }
}

fn read_password_line() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
