use anyhow::bail;
use medstudy_schema::SchemaRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SchemaListResponse {
    schemas: Vec<&'static str>,
}

/// Handle `medstudy schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match args.name.as_deref() {
        None => output(
            &SchemaListResponse {
                schemas: registry.list(),
            },
            flags.format,
        ),
        Some(name) => match registry.get(name) {
            Some(schema) => output(schema, flags.format),
            None => bail!(
                "unknown schema '{name}' (available: {})",
                registry.list().join(", ")
            ),
        },
    }
}
