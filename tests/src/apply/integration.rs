#![cfg(test)]
use macshift_common::config::Backend;
use macshift_common::system::{CommandRunner, ExitStatus};
use macshift_common::validation::{self, Validator};
use macshift_core::reconfigure::{INVALID_INPUT_MESSAGE, MacChanger, Outcome, SUCCESS_MESSAGE};
use std::sync::{Arc, Mutex};

/// Records every command line it is asked to run and answers with canned statuses.
#[derive(Clone, Default)]
struct RecordingRunner {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    statuses: Arc<Mutex<Vec<ExitStatus>>>,
}

impl RecordingRunner {
    fn failing_with(statuses: Vec<ExitStatus>) -> Self {
        let runner = Self::default();
        *runner.statuses.lock().unwrap() = statuses.into_iter().rev().collect();
        runner
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, argv: &[String]) -> ExitStatus {
        self.calls.lock().unwrap().push(argv.to_vec());
        self.statuses.lock().unwrap().pop().unwrap_or(ExitStatus::Code(0))
    }
}

fn apply(runner: &RecordingRunner, interface: &str, mac: &str) -> Outcome {
    MacChanger::new(Box::new(runner.clone()), Backend::Ifconfig).apply_mac_address(interface, mac)
}

/// Valid interface and MAC: down, set, up against eth0, then success.
#[test]
fn valid_input_reconfigures_interface() {
    let runner = RecordingRunner::default();
    let outcome = apply(&runner, "eth0", "AA:BB:CC:DD:EE:FF");

    assert!(outcome.applied);
    assert_eq!(outcome.message, SUCCESS_MESSAGE);
    assert_eq!(
        runner.calls(),
        vec![
            vec!["ifconfig", "eth0", "down"],
            vec!["ifconfig", "eth0", "hw", "ether", "AA:BB:CC:DD:EE:FF"],
            vec!["ifconfig", "eth0", "up"],
        ]
    );
}

#[test]
fn invalid_hex_digit_runs_nothing() {
    let runner = RecordingRunner::default();
    let outcome = apply(&runner, "eth0", "AA:BB:CC:DD:EE:FZ");

    assert!(!outcome.applied);
    assert_eq!(outcome.message, INVALID_INPUT_MESSAGE);
    assert!(runner.calls().is_empty());
}

#[test]
fn unsupported_interface_name_runs_nothing() {
    let runner = RecordingRunner::default();
    let outcome = apply(&runner, "wlan0", "AA:BB:CC:DD:EE:FF");

    assert!(!outcome.applied);
    assert_eq!(outcome.message, INVALID_INPUT_MESSAGE);
    assert!(runner.calls().is_empty());
}

#[test]
fn command_failures_are_exposed_but_still_reported_as_success() {
    let runner = RecordingRunner::failing_with(vec![
        ExitStatus::Code(0),
        ExitStatus::Code(1),
        ExitStatus::Terminated,
    ]);
    let outcome = apply(&runner, "eth0", "AA:BB:CC:DD:EE:FF");

    assert_eq!(runner.calls().len(), 3);
    assert!(outcome.applied);
    assert_eq!(outcome.message, SUCCESS_MESSAGE);
    assert!(!outcome.all_steps_succeeded());

    let statuses: Vec<ExitStatus> = outcome.steps.iter().map(|r| r.status.clone()).collect();
    assert_eq!(
        statuses,
        vec![ExitStatus::Code(0), ExitStatus::Code(1), ExitStatus::Terminated]
    );
}

#[test]
fn validate_is_deterministic_and_independent() {
    let cases = [
        ("eth0", "00:11:22:AA:BB:CC", true),
        ("ens33", "ff:ff:ff:ff:ff:ff", true),
        ("nlp7", "00:11:22:AA:BB:CC", true),
        ("enp0s3", "00:11:22:AA:BB:CC", false),
        ("eth0", "001:11:22:AA:BB:CC", false),
        ("lo", "GG:11:22:AA:BB:CC", false),
    ];

    for (interface, mac, expected) in cases {
        for _ in 0..3 {
            assert_eq!(validation::validate(interface, mac), expected, "{interface} {mac}");
        }
        let default = Validator::default();
        assert_eq!(
            default.validate(interface, mac),
            validation::is_legacy_interface_name(interface)
                && validation::is_valid_mac_address(mac)
        );
    }
}
