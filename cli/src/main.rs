mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, change};
use macshift_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg: Config = commands.config();

    print::banner(cfg.no_banner, cfg.quiet);
    Ok(change::change(&commands.interface, &commands.mac_address, &cfg))
}
