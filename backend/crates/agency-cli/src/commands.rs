use crate::project_commands::ProjectCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}
