pub use clap::Parser;

/// Scaffold a runtime starter project from a built-in template.
#[derive(Parser)]
#[clap(version)]
pub struct Args {
    /// Name of the project (prompted for when omitted)
    pub project_name: Option<String>,

    /// Use this template instead of choosing interactively
    #[clap(long, short)]
    pub template: Option<String>,

    /// Skip the confirmation when the target directory already exists
    #[clap(long, short)]
    pub overwrite: bool,
}
