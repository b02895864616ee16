use std::fmt;

use macshift_common::config::Backend;
use macshift_common::validation::ValidatedTarget;

/// The three operations applied to an interface, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Down,
    SetHardwareAddress,
    Up,
}

impl Step {
    pub const SEQUENCE: [Step; 3] = [Step::Down, Step::SetHardwareAddress, Step::Up];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Down => write!(f, "interface down"),
            Step::SetHardwareAddress => write!(f, "set hardware address"),
            Step::Up => write!(f, "interface up"),
        }
    }
}

/// Builds the command line for `step` against `target`.
pub fn command_for(backend: Backend, step: Step, target: &ValidatedTarget) -> Vec<String> {
    let interface: &str = target.interface.as_str();
    let mac: &str = target.mac_address.as_str();

    let argv: Vec<&str> = match backend {
        Backend::Ifconfig => match step {
            Step::Down => vec!["ifconfig", interface, "down"],
            Step::SetHardwareAddress => vec!["ifconfig", interface, "hw", "ether", mac],
            Step::Up => vec!["ifconfig", interface, "up"],
        },
        Backend::Iproute2 => match step {
            Step::Down => vec!["ip", "link", "set", "dev", interface, "down"],
            Step::SetHardwareAddress => vec!["ip", "link", "set", "dev", interface, "address", mac],
            Step::Up => vec!["ip", "link", "set", "dev", interface, "up"],
        },
    };

    argv.into_iter().map(String::from).collect()
}
