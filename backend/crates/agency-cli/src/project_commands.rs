use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    Create {
        /// Project name
        #[arg(long)]
        name: String,
        /// What the project should build
        #[arg(long)]
        description: String,
    },
    /// Have the backend assign and run the project's next task
    NextTask {
        /// Project ID
        project_id: String,
    },
    /// Upload a file to the project's resources
    Upload {
        /// Project ID
        project_id: String,
        /// File to upload
        file: PathBuf,
    },
}
