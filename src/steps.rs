use owo_colors::OwoColorize;

use crate::{package_manager::PackageManager, registry::Template};

/// Expand the `{project}` and `{pm}` placeholders in a template's next-step
/// commands.
#[must_use]
pub fn expand(template: &Template, project: &str, pm: PackageManager) -> Vec<String> {
    template
        .steps
        .iter()
        .map(|step| step.replace("{project}", project).replace("{pm}", pm.binary()))
        .collect()
}

/// Print the guidance block shown after a successful scaffold.
pub fn print(steps: &[String]) {
    println!("\nDone. Now run:\n");

    for step in steps {
        println!(
            "  {}",
            step.if_supports_color(owo_colors::Stream::Stdout, |s| {
                s.style(owo_colors::Style::new().bold())
            })
        );
    }

    println!();
}
