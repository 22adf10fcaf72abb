use clap::Parser;
use simreg::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{list, plot, simulate},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Simulate(_) => "simulate",
        Command::Plot(_) => "plot",
        Command::List => "list",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Simulate(args) => simulate::simulate(args)?,
        Command::Plot(args) => plot::plot(args)?,
        Command::List => list::list()?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
