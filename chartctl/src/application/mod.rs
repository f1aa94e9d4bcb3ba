pub mod handlers;
pub mod logging;
pub mod menu;
pub mod prompt;

use crate::presentation::cli::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use prompt::TermPrompter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let svc = handlers::service_from_args(cli.dir)?;
    let mut out = std::io::stdout().lock();
    let mut prompter = TermPrompter::new();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run_menu(&svc, &mut prompter, &mut out),
        Commands::Generate { base, force } => handlers::handle_generate(&svc, base, force, &mut out),
        Commands::Read { base, json } => handlers::handle_read(&svc, base, json, &mut out),
        Commands::Line { base, index, json } => {
            handlers::handle_line(&svc, base, index, json, &mut out)
        }
        Commands::Delete { base, yes } => {
            handlers::handle_delete(&svc, base, yes, &mut prompter, &mut out)
        }
        Commands::List { json } => handlers::handle_list(&svc, json, &mut out),
    }
}
