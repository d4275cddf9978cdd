mod app;
mod cli;
mod config;
mod runtime;
mod ui;

use anyhow::{bail, Result};
use app::{App, LoginState};
use clap::Parser;
use cli::{Cli, Commands};
use config::MikroConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = MikroConfig::load()?;

    let login = match cli.command {
        Commands::Local => LoginState::local(),
        Commands::Remote => {
            if config.services.is_empty() {
                bail!("No services configured; add one to the config file");
            }
            LoginState::remote(config.services.clone())
        }
        Commands::ConfigPath => {
            let path = MikroConfig::config_path()?;
            if !path.exists() {
                config.save()?;
            }
            println!("{}", path.display());
            return Ok(());
        }
    };

    let mut app = App::new(login);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
