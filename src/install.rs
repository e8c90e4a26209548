use std::{path::Path, process::Command};

use anyhow::Result;
use inquire::{Confirm, InquireError};

use crate::{info, package_manager::PackageManager, warn};

/// Outcome of the install phase. Install failures are deliberately not
/// errors: the scaffolded project is usable either way.
#[derive(Debug, PartialEq, Eq)]
pub enum Install {
    Completed,
    Skipped,
    Failed,
}

/// Offer to run `<package manager> install` inside the new project.
///
/// The child inherits the terminal's stdio so its output is visible live.
/// Runtimes without an install step short-circuit with an informational
/// message.
///
/// # Errors
///
/// Returns an [`Err`] only on unexpected prompt failures. A failing or
/// unspawnable child process is reported as a warning and mapped to
/// [`Install::Failed`].
pub fn install_dependencies(dest: &Path, pm: PackageManager) -> Result<Install> {
    let Some(command) = pm.install_command() else {
        info!("{pm} fetches dependencies on first run, skipping install");
        return Ok(Install::Skipped);
    };

    let answer = Confirm::new("Install dependencies now?")
        .with_default(false)
        .prompt();

    let run = match answer {
        Ok(run) => run,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => false,
        Err(e) => return Err(e.into()),
    };

    if !run {
        info!("Skipping install. Run `{command}` inside the project when ready");
        return Ok(Install::Skipped);
    }

    match Command::new(pm.binary()).arg("install").current_dir(dest).status() {
        Ok(status) if status.success() => Ok(Install::Completed),
        Ok(status) => {
            warn!(
                "`{command}` exited with {status}. The project is intact; run `{command}` manually inside {}",
                dest.display()
            );
            Ok(Install::Failed)
        }
        Err(e) => {
            warn!(
                "failed to spawn `{command}`: {e}. The project is intact; run `{command}` manually inside {}",
                dest.display()
            );
            Ok(Install::Failed)
        }
    }
}
