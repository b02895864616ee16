use std::process::ExitCode;

use colored::*;
use is_root::is_root;
use pnet::util::MacAddr;
use tracing::{error, warn};

use crate::terminal::{colors, print};
use macshift_common::config::Config;
use macshift_common::system::InterfaceRepository;
use macshift_common::validation::ValidatedTarget;
use macshift_core::interface::DatalinkInterfaces;
use macshift_core::reconfigure::{MacChanger, Outcome};
use macshift_core::runner::SystemRunner;

/// How a run ends, before it is turned into a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

pub fn change(interface: &str, mac_address: &str, cfg: &Config) -> ExitCode {
    let changer = MacChanger::new(Box::new(SystemRunner), cfg.backend);
    change_with(&changer, &DatalinkInterfaces, interface, mac_address, cfg).into()
}

pub fn change_with(
    changer: &MacChanger,
    repo: &dyn InterfaceRepository,
    interface: &str,
    mac_address: &str,
    cfg: &Config,
) -> RunStatus {
    let target: ValidatedTarget = match changer.check(interface, mac_address) {
        Ok(target) => target,
        Err(e) => {
            let outcome: Outcome = Outcome::rejected(e);
            print::failure(&outcome.message);
            return if cfg.strict {
                RunStatus::Failure
            } else {
                RunStatus::Success
            };
        }
    };

    let before: Option<MacAddr> = repo.hardware_address(target.interface.as_str());
    let outcome: Outcome = changer.apply(target);
    let after: Option<MacAddr> = repo.hardware_address(interface);
    print_details(interface, before, after, cfg);

    if outcome.failed_steps().next().is_some() && !is_root() {
        warn!("Not running as root, the interface commands were most likely refused");
    }

    print::success(&outcome.message);

    match strict_failure(&outcome, after) {
        Some(reason) if cfg.strict => {
            error!("{reason}");
            RunStatus::Failure
        }
        _ => RunStatus::Success,
    }
}

fn print_details(interface: &str, before: Option<MacAddr>, after: Option<MacAddr>, cfg: &Config) {
    let lines: Vec<(&'static str, ColoredString)> = details(interface, before, after, cfg);
    if lines.is_empty() {
        return;
    }

    print::header("interface", cfg.quiet);
    for (key, value) in lines {
        print::aligned_line(key, value);
    }
    print::end_of_program(cfg.quiet);
}

/// Key/value lines shown after a change; fewer the quieter the run.
fn details(
    interface: &str,
    before: Option<MacAddr>,
    after: Option<MacAddr>,
    cfg: &Config,
) -> Vec<(&'static str, ColoredString)> {
    let mut lines: Vec<(&'static str, ColoredString)> = Vec::new();

    if cfg.quiet == 0 {
        lines.push(("Interface", interface.color(colors::ACCENT)));
        lines.push(("Backend", cfg.backend.to_string().color(colors::TEXT_DEFAULT)));
    }
    if cfg.quiet < 2 {
        lines.push(("Previous MAC", mac_or_unknown(before)));
        lines.push(("Current MAC", mac_or_unknown(after)));
    }

    lines
}

fn mac_or_unknown(mac: Option<MacAddr>) -> ColoredString {
    match mac {
        Some(mac) => mac.to_string().color(colors::MAC_ADDR),
        None => "unknown".color(colors::UNKNOWN),
    }
}

/// Reason an applied outcome should still count as a failure when running strictly.
fn strict_failure(outcome: &Outcome, after: Option<MacAddr>) -> Option<String> {
    let failed: Vec<String> = outcome
        .failed_steps()
        .map(|report| format!("{} ({})", report.step, report.status))
        .collect();

    if !failed.is_empty() {
        return Some(format!("Failed steps: {}", failed.join(", ")));
    }

    match (outcome.requested_mac(), after) {
        (Some(requested), Some(after)) if requested != after => Some(format!(
            "Interface reports {after} instead of {requested}"
        )),
        _ => None,
    }
}
