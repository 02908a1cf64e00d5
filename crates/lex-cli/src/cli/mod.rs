use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lexa` binary.
#[derive(Debug, Parser)]
#[command(name = "lexa", version, about = "Lexsite - law firm site administration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Site root (overrides site.root from configuration)
    #[arg(short, long, global = true)]
    pub root: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            root: self.root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use lex_core::Locale;

    use super::subcommands::{AuthCommands, MenuCommands, PageCommands, SectionCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let cli = Cli::try_parse_from(["lexa", "--format", "table", "menu", "validate", "--verbose"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Menu {
                action: MenuCommands::Validate
            }
        ));
    }

    #[test]
    fn root_override_is_extracted() {
        let cli = Cli::try_parse_from(["lexa", "menu", "show", "--root", "/srv/site"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().root.as_deref(), Some("/srv/site"));
    }

    #[test]
    fn menu_delete_takes_id() {
        let cli = Cli::try_parse_from(["lexa", "menu", "delete", "practice-areas"])
            .expect("cli should parse");
        match cli.command {
            Commands::Menu {
                action: MenuCommands::Delete { id },
            } => assert_eq!(id, "practice-areas"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn page_set_parses_locale_and_fields() {
        let cli = Cli::try_parse_from([
            "lexa", "page", "set", "he", "about", "--title", "אודות", "--h1", "Hello",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Page {
                action: PageCommands::Set(args),
            } => {
                assert_eq!(args.page.lang, Locale::He);
                assert_eq!(args.page.name, "about");
                assert_eq!(args.title.as_deref(), Some("אודות"));
                assert!(args.meta_description.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(Cli::try_parse_from(["lexa", "page", "get", "fr", "index"]).is_err());
    }

    #[test]
    fn section_set_requires_content_source() {
        assert!(Cli::try_parse_from(["lexa", "section", "set", "en", "index", "hero"]).is_err());
        let cli = Cli::try_parse_from([
            "lexa", "section", "set", "en", "index", "hero", "--html", "<h1>Hi</h1>",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Section {
                action: SectionCommands::Set(_)
            }
        ));
    }

    #[test]
    fn auth_hash_password_is_offline() {
        let cli = Cli::try_parse_from(["lexa", "auth", "hash-password", "secret"])
            .expect("cli should parse");
        match cli.command {
            Commands::Auth { action } => {
                assert!(action.is_offline());
                assert!(matches!(action, AuthCommands::HashPassword { .. }));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
