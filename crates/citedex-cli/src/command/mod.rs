use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{
    index::IndexArg,
    interactive::InteractiveArg,
    report::ReportArg,
};
use crate::{config, logging};

mod index;
mod interactive;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Configuration file (defaults to the platform config and ./.citedex.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Enter papers and explore statistics through interactive menus
    Interactive(#[clap(flatten)] InteractiveArg),
    /// Print the full summary report for a paper list
    Report(#[clap(flatten)] ReportArg),
    /// Print h-index, i10-index and threshold counts for a paper list
    Index(#[clap(flatten)] IndexArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let config = config::load_config(args.config.as_deref())?;
    logging::init(args.verbose, config.log_filter.as_deref());
    tracing::debug!(?config, "configuration resolved");

    match args
        .mode
        .unwrap_or(Mode::Interactive(InteractiveArg::default()))
    {
        Mode::Interactive(arg) => interactive::run(&arg, config)?,
        Mode::Report(arg) => report::run(&arg, &config)?,
        Mode::Index(arg) => index::run(&arg, &config)?,
    }
    Ok(())
}
