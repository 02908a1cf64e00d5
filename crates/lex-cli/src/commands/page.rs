use anyhow::Context;
use lex_core::page::PageUpdate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PageCommands, PageSetArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PageListing {
    locale: String,
    pages: Vec<String>,
}

/// Handle `lexa page <subcommand>`.
pub fn handle(action: &PageCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PageCommands::List { lang } => output(
            &PageListing {
                locale: lang.to_string(),
                pages: ctx.pages.list_pages(*lang)?,
            },
            flags.format,
        ),
        PageCommands::Get(page) => output(&ctx.pages.read_page(page.lang, &page.name)?, flags.format),
        PageCommands::Set(args) => {
            let update = page_update(args)?;
            if update.is_empty() {
                anyhow::bail!("nothing to update: pass --title, --h1, --meta-description or --main-file");
            }
            let content = ctx.pages.update_page(args.page.lang, &args.page.name, &update)?;
            output(&content, flags.format)
        }
    }
}

fn page_update(args: &PageSetArgs) -> anyhow::Result<PageUpdate> {
    let main_content = args
        .main_file
        .as_deref()
        .map(|path| std::fs::read_to_string(path).with_context(|| format!("failed to read {path}")))
        .transpose()?;
    Ok(PageUpdate {
        title: args.title.clone(),
        h1: args.h1.clone(),
        meta_description: args.meta_description.clone(),
        main_content,
    })
}
