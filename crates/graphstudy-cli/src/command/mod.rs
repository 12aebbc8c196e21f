use clap::{ArgAction, Parser, Subcommand};

use self::rawdata::RawdataArg;
use crate::logging;

mod rawdata;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit log records as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Analyze existing raw data (one floating-point value per line)
    Rawdata(#[clap(flatten)] RawdataArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.verbose, args.log_json);
    match &args.mode {
        Mode::Rawdata(arg) => rawdata::run(arg)?,
    }
    Ok(())
}
