use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mikro-tui")]
#[command(about = "Terminal calendar client for local and Channel W event sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log into a local JSON event file
    Local,
    /// Log into a remote event service
    Remote,
    /// Print config path and create default file if missing
    ConfigPath,
}
