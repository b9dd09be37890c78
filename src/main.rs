use clap::Parser;

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
pub mod workflow;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::api::*;
pub use services::config::*;
pub use services::form;
pub use services::output::*;
pub use services::present::*;
pub use services::store::*;
pub use workflow::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Params { command } => handle_params_commands(&cli, command),
        Commands::Fetch { .. } | Commands::Predict { .. } | Commands::Run => {
            handle_workflow_commands(&cli)
        }
    }
}
