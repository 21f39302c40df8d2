//! agency - command-line client for the agency project backend
//!
//! # Examples
//!
//! ```bash
//! # Create a project
//! agency project create --name Alpha --description "First project" --pretty
//!
//! # Run the next task of project 42
//! agency project next-task 42
//!
//! # Point at another backend
//! agency --server http://10.0.0.5:7060 project next-task 42
//! ```

use agency_cli::{
    Client, ClientError, cli::Cli, commands::Commands, logger,
    project_commands::ProjectCommands,
};
use agency_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Server URL: explicit flag > config/env > default, validated after overrides
    let config = match Config::load().and_then(|c| cli.resolve_config(c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let client = Client::new(&config.api.base_url);

    let result = match cli.command {
        Commands::Project { action } => match action {
            ProjectCommands::Create { name, description } => {
                client.create_project_raw(&name, &description).await
            }
            ProjectCommands::NextTask { project_id } => {
                client.process_next_task_raw(&project_id).await
            }
            ProjectCommands::Upload { project_id, file } => client
                .upload_resource_file(&project_id, &file)
                .await
                .and_then(|upload| serde_json::to_value(upload).map_err(ClientError::from_json)),
        },
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
