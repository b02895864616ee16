//! # Interface Reconfigurator
//!
//! Implements the "change MAC address" use case.
//!
//! The interface is taken down, given its new hardware address, and brought
//! back up. The three commands are always issued together: a failing step does
//! not stop the ones after it, and the outcome is reported as applied once all
//! three have been issued. The individual exit statuses are kept on the
//! [`Outcome`] for callers that want to be stricter.

use pnet::util::MacAddr;
use tracing::{debug, warn};

use macshift_common::config::Backend;
use macshift_common::system::{CommandRunner, ExitStatus};
use macshift_common::validation::{ValidatedTarget, ValidationError, Validator};

use crate::backend::{self, Step};

pub const SUCCESS_MESSAGE: &str = "MAC address changed successfully";
pub const INVALID_INPUT_MESSAGE: &str = "The provided interface or MAC address is invalid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub argv: Vec<String>,
    pub status: ExitStatus,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub applied: bool,
    pub message: String,
    /// Why validation rejected the input. `None` when it passed.
    pub rejection: Option<ValidationError>,
    /// The validated input the commands were issued for. `None` when rejected.
    pub target: Option<ValidatedTarget>,
    /// One entry per issued command, in order. Empty when validation failed.
    pub steps: Vec<StepReport>,
}

impl Outcome {
    pub fn rejected(rejection: ValidationError) -> Self {
        debug!("{rejection}");
        Self {
            applied: false,
            message: INVALID_INPUT_MESSAGE.to_string(),
            rejection: Some(rejection),
            target: None,
            steps: Vec::new(),
        }
    }

    /// Address that was requested, if the input passed validation.
    pub fn requested_mac(&self) -> Option<MacAddr> {
        self.target.as_ref().map(|target| target.mac_address.addr())
    }

    pub fn all_steps_succeeded(&self) -> bool {
        self.applied && self.steps.iter().all(|report| report.status.success())
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|report| !report.status.success())
    }
}

/// Application service that validates input and drives a [`CommandRunner`].
pub struct MacChanger {
    runner: Box<dyn CommandRunner>,
    validator: Validator,
    backend: Backend,
}

impl MacChanger {
    pub fn new(runner: Box<dyn CommandRunner>, backend: Backend) -> Self {
        Self {
            runner,
            validator: Validator::default(),
            backend,
        }
    }

    /// Replaces the default validator, e.g. to use a different interface rule.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn apply_mac_address(&self, interface: &str, mac_address: &str) -> Outcome {
        match self.check(interface, mac_address) {
            Ok(target) => self.apply(target),
            Err(e) => Outcome::rejected(e),
        }
    }

    /// Validation alone, for callers that need to act between checking and applying.
    pub fn check(
        &self,
        interface: &str,
        mac_address: &str,
    ) -> Result<ValidatedTarget, ValidationError> {
        self.validator.check(interface, mac_address)
    }

    /// Issues down, set and up for an already validated target.
    pub fn apply(&self, target: ValidatedTarget) -> Outcome {
        let steps: Vec<StepReport> = Step::SEQUENCE
            .iter()
            .map(|step| self.issue(*step, &target))
            .collect();

        Outcome {
            applied: true,
            message: SUCCESS_MESSAGE.to_string(),
            rejection: None,
            target: Some(target),
            steps,
        }
    }

    fn issue(&self, step: Step, target: &ValidatedTarget) -> StepReport {
        let argv: Vec<String> = backend::command_for(self.backend, step, target);
        let status: ExitStatus = self.runner.run(&argv);

        if status.success() {
            debug!("{step} on {}: {status}", target.interface);
        } else {
            warn!("{step} on {} did not succeed ({status})", target.interface);
        }

        StepReport { step, argv, status }
    }
}
