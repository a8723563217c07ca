//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, Commands, DrawArgs};
use teamdraw_core::config::DrawConfig;
use teamdraw_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn root(&self) -> &Path {
        self.root
    }

    /// Load the effective configuration and the file it came from
    pub fn load_config(&self) -> Result<(DrawConfig, Option<PathBuf>)> {
        DrawConfig::discover(self.root, self.cli.config.as_deref())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: draw with the configured files
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        crate::commands::draw::execute(ctx, &DrawArgs::default())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Draw(args) => crate::commands::draw::execute(ctx, args),
            Commands::Config => crate::commands::config::execute(ctx),
        }
    }
}
