use serde::Serialize;

use lex_core::MenuEntry;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MenuCommands;
use crate::context::AppContext;
use crate::output::{output, output_text};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncOutput {
    added: usize,
    added_items: Vec<MenuEntry>,
    last_synced_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteOutput {
    deleted: MenuEntry,
    remaining: usize,
}

/// Handle `lexa menu <subcommand>`.
pub fn handle(action: &MenuCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MenuCommands::Show => output(&ctx.menu.summary()?, flags.format),
        MenuCommands::Validate => {
            let report = ctx.menu.validate()?;
            if !report.is_in_sync && !flags.quiet {
                eprintln!(
                    "{} issue(s): {} error(s), {} warning(s)",
                    report.total_issues, report.error_count, report.warning_count
                );
            }
            output(&report, flags.format)
        }
        MenuCommands::Sync => {
            let result = ctx.menu.sync()?;
            output(
                &SyncOutput {
                    added: result.added.len(),
                    added_items: result.added,
                    last_synced_at: result.document.last_synced_at,
                },
                flags.format,
            )
        }
        MenuCommands::Delete { id } => {
            let result = ctx.menu.delete(id)?;
            output(
                &DeleteOutput {
                    deleted: result.deleted,
                    remaining: result.document.total_entries(),
                },
                flags.format,
            )
        }
        MenuCommands::Render => output_text(&ctx.menu.render_preview()?, flags.format),
    }
}
