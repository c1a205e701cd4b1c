use std::io;
use std::io::prelude::*;
use std::process;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "booty", version, about = "Share out pieces of eight; the captain takes two shares")]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more to stderr (repeat for more)")]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    booty::logging::init(cli.verbose);

    if let Err(e) = share_out() {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn share_out() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let shares = booty::run(&mut input, &mut output)?;

    write!(output, "{}", shares).context("could not write report")?;
    output.flush().context("could not write report")?;
    Ok(())
}
