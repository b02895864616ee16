use std::process::Command;

use tracing::debug;

use macshift_common::system::{CommandRunner, ExitStatus};

/// Runs commands on the host, inheriting stdout and stderr so the utility's
/// own diagnostics reach the user.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> ExitStatus {
        let Some((program, args)) = argv.split_first() else {
            return ExitStatus::SpawnFailed("empty command line".to_string());
        };

        debug!("running: {}", argv.join(" "));

        match Command::new(program).args(args).status() {
            Ok(status) => match status.code() {
                Some(code) => ExitStatus::Code(code),
                None => ExitStatus::Terminated,
            },
            Err(e) => ExitStatus::SpawnFailed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn empty_command_does_not_spawn() {
        assert!(matches!(SystemRunner.run(&[]), ExitStatus::SpawnFailed(_)));
    }

    #[test]
    fn missing_program_is_reported() {
        let status = SystemRunner.run(&argv(&["macshift-no-such-program-4f2a"]));
        assert!(matches!(status, ExitStatus::SpawnFailed(_)));
    }

    #[cfg(unix)]
    #[test]
    fn exit_codes_are_passed_through() {
        assert_eq!(SystemRunner.run(&argv(&["true"])), ExitStatus::Code(0));
        assert_eq!(SystemRunner.run(&argv(&["sh", "-c", "exit 3"])), ExitStatus::Code(3));
    }
}
