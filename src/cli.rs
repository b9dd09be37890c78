use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "dropsight", version, about = "Student outcome prediction CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Prediction service base URL (overrides DROPSIGHT_API_BASE and config.toml)"
    )]
    pub api_base: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or edit the persisted economic parameters
    Params {
        #[command(subcommand)]
        command: ParamsCommands,
    },
    /// Fetch a student record and show the displayable details
    Fetch { roll_number: String },
    /// Fetch a student record and request an outcome prediction
    Predict { roll_number: String },
    /// Interactive three-step workflow: entry, details, prediction
    Run,
}

#[derive(Subcommand, Debug)]
pub enum ParamsCommands {
    Show,
    Set {
        #[arg(value_enum)]
        field: ParamField,
        value: f64,
    },
    Reset,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ParamField {
    UnemploymentRate,
    InflationRate,
    Gdp,
}
