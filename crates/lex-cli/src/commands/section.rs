use anyhow::Context;
use lex_core::api::SectionListResponse;
use lex_core::page::{REGION_SCHEMA_VERSION, SectionContent};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SectionCommands;
use crate::context::AppContext;
use crate::output::{output, output_text};

/// Handle `lexa section <subcommand>`.
pub fn handle(action: &SectionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SectionCommands::List(page) => output(
            &SectionListResponse {
                schema_version: REGION_SCHEMA_VERSION,
                sections: ctx.pages.list_sections(page.lang, &page.name)?,
            },
            flags.format,
        ),
        SectionCommands::Get(target) => {
            let html = ctx
                .pages
                .read_section(target.page.lang, &target.page.name, &target.section)?;
            output_text(&html, flags.format)
        }
        SectionCommands::Set(args) => {
            let html = match (&args.html, &args.file) {
                (Some(html), _) => html.clone(),
                (None, Some(path)) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {path}"))?,
                (None, None) => anyhow::bail!("pass --html or --file"),
            };
            let target = &args.target;
            let stored = ctx.pages.replace_section(
                target.page.lang,
                &target.page.name,
                &target.section,
                &html,
            )?;
            output(
                &SectionContent {
                    name: target.section.clone(),
                    html: stored,
                },
                flags.format,
            )
        }
    }
}
