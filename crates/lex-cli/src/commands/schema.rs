use anyhow::Context;
use lex_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `lexa schema [type]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match &args.type_name {
        None => output(&registry.names().collect::<Vec<_>>(), flags.format),
        Some(name) => {
            let schema = registry.get(name).with_context(|| {
                format!(
                    "unknown schema '{name}' (available: {})",
                    registry.names().collect::<Vec<_>>().join(", ")
                )
            })?;
            output(schema, flags.format)
        }
    }
}
