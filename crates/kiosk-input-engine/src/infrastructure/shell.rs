//! Process-backed [`CommandRunner`] for the shell fallback.

use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::application::strategies::CommandRunner;

/// Runs each program on its own short-lived thread and never waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn spawn(&self, program: &str, args: &[String]) -> std::io::Result<()> {
        let program = program.to_string();
        let args = args.to_vec();
        thread::Builder::new()
            .name("kiosk-shell".to_string())
            .spawn(move || {
                let status = Command::new(&program)
                    .args(&args)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status();
                match status {
                    Ok(status) if status.success() => debug!(%program, ?args, "shell command finished"),
                    Ok(status) => warn!(%program, ?args, %status, "shell command failed"),
                    Err(e) => warn!(%program, ?args, error = %e, "could not run shell command"),
                }
            })?;
        Ok(())
    }
}
