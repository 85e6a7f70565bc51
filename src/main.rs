mod amount;
mod categorize;
mod cli;
mod dates;
mod error;
mod fmt;
mod mailbox;
mod matcher;
mod models;
mod normalize;
mod pdf;
mod pipeline;
mod report;
mod settings;
mod settlement;

use clap::Parser;

use cli::{Cli, Commands, RulesCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            file,
            year,
            month,
            matcher,
            year_policy,
            output,
        } => cli::parse::run(&file, year, month, matcher, year_policy, output),
        Commands::Rules { command } => match command {
            RulesCommands::List => cli::rules::list(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
