//! `teamdraw config` command - show the effective configuration

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use teamdraw_core::error::{Result, TeamdrawError};
use teamdraw_core::format::escape_quotes;

/// Execute the config command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (config, source) = ctx.load_config()?;
    let source = source.map(|p| p.display().to_string());

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = json!({
                "source": source,
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), TeamdrawError>(())
        },
        human => {
            match &source {
                Some(path) => println!("# loaded from {}", path),
                None => println!("# built-in defaults"),
            }
            print!("{}", config.to_toml_string()?);
        },
        records => {
            println!(
                "H teamdraw=1 records=1 mode=config source=\"{}\"",
                escape_quotes(source.as_deref().unwrap_or("defaults"))
            );
            println!(
                "C members_per_team={} grades={} default_grade={}",
                config.sizing.members_per_team,
                config.grades.order.join(","),
                config.grades.default
            );
        }
    )
}
