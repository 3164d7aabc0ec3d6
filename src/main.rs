use anyhow::Result;
use clap::Parser;
use flow_control::utils::logger;
use flow_control::{AppConfig, MainMenu, TerminalConsole};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flow-control")]
#[command(about = "Console menu with ticket pricing and text exercises", long_about = None)]
struct Cli {
    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Never clear the screen
    #[arg(long)]
    no_clear: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write the log to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            verbose: cli.verbose,
            debug: cli.debug,
            clear_screen: !cli.no_clear,
            color: !cli.no_color,
            log_file: cli.log_file,
        }
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());

    if config.logging_enabled() {
        if let Err(e) = logger::init_global_logger(&config) {
            eprintln!("⚠️  Logging disabled: {}", e);
        }
    }

    let mut console = TerminalConsole::new(&config);
    if config.verbose {
        println!(
            "Starting flow-control ({} input)",
            if console.is_interactive() { "interactive" } else { "piped" }
        );
    }

    logger::info("Main menu opened");
    let result = MainMenu::new().run(&mut console);
    if let Err(e) = &result {
        logger::error(&format!("Stopped: {:#}", e));
    }
    result
}
