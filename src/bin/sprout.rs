use std::{path::PathBuf, process::ExitCode, str::FromStr};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use inquire::{validator::Validation, InquireError, Text};
use sprout::{
    args::Args,
    error, info,
    install::install_dependencies,
    materialize::{materialize, CreateOptions, Materialized},
    package_manager::PackageManager,
    project::ProjectName,
    registry, resolver, steps, trace,
};

/// Templates ship next to the installed binary.
fn templates_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the sprout executable")?;

    exe.parent()
        .map(|dir| dir.join("templates"))
        .context("failed to locate the sprout install directory")
}

/// Take the project name from the positional argument, falling back to an
/// interactive prompt that re-prompts on invalid input. `Ok(None)` means the
/// user cancelled.
fn project_name(args: &Args) -> Result<Option<ProjectName>> {
    if let Some(raw) = args.project_name.as_deref() {
        if !raw.trim().is_empty() {
            return ProjectName::from_str(raw).map(Some).map_err(|e| anyhow!(e));
        }
    }

    let entered = Text::new("Project name:")
        .with_validator(|input: &str| match ProjectName::from_str(input) {
            Ok(_) => Ok(Validation::Valid),
            Err(reason) => Ok(Validation::Invalid(reason.into())),
        })
        .prompt();

    match entered {
        Ok(name) => ProjectName::from_str(&name).map(Some).map_err(|e| anyhow!(e)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn app(args: &Args) -> Result<()> {
    let pm = PackageManager::from_env();
    trace!("Detected package manager: {pm}");

    let Some(name) = project_name(args)? else {
        return Ok(());
    };

    let Some(template) = resolver::resolve(registry::TEMPLATES, args.template.as_deref())?
    else {
        return Ok(());
    };

    trace!("Resolved template: {}", template.value);

    let dest = std::env::current_dir()
        .context("failed to get the current directory")?
        .join(name.as_str());

    let opts = CreateOptions::builder()
        .name(name.clone())
        .template(template)
        .overwrite(args.overwrite)
        .package_manager(pm)
        .templates_root(templates_root()?)
        .dest(dest)
        .build()?;

    match materialize(&opts)? {
        Materialized::Aborted => {
            info!("Left {} untouched", opts.dest.display());
            return Ok(());
        }
        Materialized::Created => {}
    }

    info!(
        "Scaffolded {} project in {}",
        template.name,
        opts.dest.display()
    );

    install_dependencies(&opts.dest, pm)?;

    steps::print(&steps::expand(template, name.as_str(), pm));

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
