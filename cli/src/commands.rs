pub mod change;

use clap::{ArgAction, Parser, ValueEnum};
use macshift_common::config::{Backend, Config};

#[derive(Parser, Debug)]
#[command(name = "macshift")]
#[command(about = "Change the MAC address of a network interface.")]
#[command(version)]
pub struct CommandLine {
    /// Network interface name (e.g. eth0, ens33)
    #[arg(short, long)]
    pub interface: String,

    /// New MAC address (format: XX:XX:XX:XX:XX:XX)
    #[arg(short, long = "mac")]
    pub mac_address: String,

    /// Utility used to reconfigure the interface
    #[arg(short, long, value_enum, default_value_t = BackendArg::Ifconfig)]
    pub backend: BackendArg,

    /// Exit with a non-zero status on invalid input or when a command fails
    #[arg(short, long)]
    pub strict: bool,

    /// Reduce output; repeat to also hide address details
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Hide the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Show every command issued and its exit status
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// ifconfig IF hw ether MAC
    Ifconfig,
    /// ip link set dev IF address MAC
    Iproute2,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Ifconfig => Backend::Ifconfig,
            BackendArg::Iproute2 => Backend::Iproute2,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            backend: self.backend.into(),
            strict: self.strict,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
