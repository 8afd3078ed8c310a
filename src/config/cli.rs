use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "neighborhood-map")]
#[command(about = "A page title over an interactive map of London neighborhoods.")]
pub struct CliArgs {
    /// TOML config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Heading text, overriding the config file and environment
    #[arg(long)]
    pub title: Option<String>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
